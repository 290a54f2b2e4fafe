use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{order, recipient, school, user},
    middleware::auth::require_auth,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Gift Orders API"),
    paths(
        order::get_orders,
        order::get_order,
        order::create_order,
        order::update_order,
        order::delete_order,
        order::cancel_order,
        order::ship_order,
        recipient::get_recipients,
        recipient::get_recipient,
        recipient::create_recipient,
        recipient::update_recipient,
        recipient::delete_recipient,
        school::get_schools,
        school::get_school,
        school::create_school,
        school::update_school,
        school::delete_school,
        user::signup,
        user::login,
        user::auto_login,
    ),
    modifiers(&BearerTokenScheme),
    tags(
        (name = "order", description = "Gift orders and their status transitions"),
        (name = "recipient", description = "People gifts are addressed to"),
        (name = "school", description = "Schools recipients are affiliated with"),
        (name = "user", description = "Signup and bearer-token login"),
    )
)]
pub struct ApiDoc;

struct BearerTokenScheme;

impl Modify for BearerTokenScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Builds the application router.
///
/// Every route except signup, login, and the API docs sits behind the bearer-token guard.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/orders",
            get(order::get_orders).post(order::create_order),
        )
        .route(
            "/orders/{id}",
            get(order::get_order)
                .patch(order::update_order)
                .put(order::update_order)
                .delete(order::delete_order),
        )
        .route(
            "/orders/{id}/cancel",
            put(order::cancel_order).post(order::cancel_order),
        )
        .route(
            "/orders/{id}/ship",
            put(order::ship_order).post(order::ship_order),
        )
        .route(
            "/recipients",
            get(recipient::get_recipients).post(recipient::create_recipient),
        )
        .route(
            "/recipients/{id}",
            get(recipient::get_recipient)
                .patch(recipient::update_recipient)
                .put(recipient::update_recipient)
                .delete(recipient::delete_recipient),
        )
        .route(
            "/schools",
            get(school::get_schools).post(school::create_school),
        )
        .route(
            "/schools/{id}",
            get(school::get_school)
                .patch(school::update_school)
                .put(school::update_school)
                .delete(school::delete_school),
        )
        .route("/auto_login", get(user::auto_login))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let public = Router::new()
        .route("/users", post(user::signup))
        .route("/login", post(user::login));

    Router::new()
        .merge(protected)
        .merge(public)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
