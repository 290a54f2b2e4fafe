use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        user::{AuthTokenDto, LoginDto, SignupDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthUser, model::user::SignupParams,
        service::auth::AuthService, state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// POST /users - Register a new user
///
/// Public. Returns the user together with a bearer token so the client is logged in
/// straight away.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "User created", body = AuthTokenDto),
        (status = 422, description = "Blank or taken e-mail, blank password, negative age", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::new(&state.db, &state.tokens)
        .signup(SignupParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthTokenDto {
            user: user.into_dto(),
            token,
        }),
    ))
}

/// POST /login - Exchange e-mail and password for a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = AuthTokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AuthTokenDto {
            user: user.into_dto(),
            token,
        }),
    ))
}

/// GET /auto_login - Return the user the bearer token belongs to
#[utoipa::path(
    get,
    path = "/auto_login",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Token is valid", body = UserDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn auto_login(AuthUser(user): AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(user.into_dto())))
}
