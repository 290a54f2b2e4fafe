use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SchoolFilterQuery, ValidationErrorsDto},
        order::{CreateOrderDto, OrderDto, UpdateOrderDto},
    },
    server::{
        error::AppError,
        model::order::{CreateOrderParams, UpdateOrderParams},
        service::order::OrderService,
        state::AppState,
    },
};

pub static ORDER_TAG: &str = "order";

fn order_not_found() -> AppError {
    AppError::NotFound("Order not found".to_string())
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = ORDER_TAG,
    params(SchoolFilterQuery),
    responses(
        (status = 200, description = "Orders, optionally limited to those with a recipient in the school", body = Vec<OrderDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_orders(
    State(state): State<AppState>,
    Query(filter): Query<SchoolFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db, &state.notifier)
        .get_all(filter.school_id)
        .await?;

    let dto: Vec<OrderDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db, &state.notifier)
        .get_by_id(id)
        .await?
        .ok_or_else(order_not_found)?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    post,
    path = "/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order created", body = OrderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "A recipient does not exist", body = ErrorDto),
        (status = 422, description = "Invalid order fields", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db, &state.notifier)
        .create(CreateOrderParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// PATCH/PUT /orders/{id}
///
/// Partial update; absent fields keep their stored value. Rejected with a `status`
/// error once the order has shipped.
#[utoipa::path(
    patch,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order or a recipient not found", body = ErrorDto),
        (status = 422, description = "Invalid order fields or order already shipped", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db, &state.notifier)
        .update(UpdateOrderParams::from_dto(id, payload))
        .await?
        .ok_or_else(order_not_found)?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Order deleted, its recipients detached"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = OrderService::new(&state.db, &state.notifier)
        .delete(id)
        .await?;

    if !deleted {
        return Err(order_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/orders/{id}/cancel",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled", body = OrderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 422, description = "Order already shipped or otherwise invalid", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db, &state.notifier)
        .cancel(id)
        .await?
        .ok_or_else(order_not_found)?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// PUT/POST /orders/{id}/ship
///
/// Marks the order shipped, then notifies the owners of its recipients.
#[utoipa::path(
    put,
    path = "/orders/{id}/ship",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order shipped", body = OrderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 422, description = "Order already shipped or otherwise invalid", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn ship_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db, &state.notifier)
        .ship(id)
        .await?
        .ok_or_else(order_not_found)?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
