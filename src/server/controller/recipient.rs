use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SchoolFilterQuery, ValidationErrorsDto},
        recipient::{CreateRecipientDto, RecipientDto, UpdateRecipientDto},
    },
    server::{
        error::AppError,
        model::recipient::{CreateRecipientParams, UpdateRecipientParams},
        service::recipient::RecipientService,
        state::AppState,
    },
};

pub static RECIPIENT_TAG: &str = "recipient";

fn recipient_not_found() -> AppError {
    AppError::NotFound("Recipient not found".to_string())
}

#[utoipa::path(
    get,
    path = "/recipients",
    tag = RECIPIENT_TAG,
    params(SchoolFilterQuery),
    responses(
        (status = 200, description = "Recipients, optionally limited to one school", body = Vec<RecipientDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_recipients(
    State(state): State<AppState>,
    Query(filter): Query<SchoolFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let recipients = RecipientService::new(&state.db)
        .get_all(filter.school_id)
        .await?;

    let dto: Vec<RecipientDto> = recipients.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/recipients/{id}",
    tag = RECIPIENT_TAG,
    params(("id" = i32, Path, description = "Recipient ID")),
    responses(
        (status = 200, description = "The recipient", body = RecipientDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Recipient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_recipient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let recipient = RecipientService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(recipient_not_found)?;

    Ok((StatusCode::OK, Json(recipient.into_dto())))
}

#[utoipa::path(
    post,
    path = "/recipients",
    tag = RECIPIENT_TAG,
    request_body = CreateRecipientDto,
    responses(
        (status = 201, description = "Recipient created", body = RecipientDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "School or order not found", body = ErrorDto),
        (status = 422, description = "Invalid recipient fields", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn create_recipient(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecipientDto>,
) -> Result<impl IntoResponse, AppError> {
    let recipient = RecipientService::new(&state.db)
        .create(CreateRecipientParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(recipient.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/recipients/{id}",
    tag = RECIPIENT_TAG,
    params(("id" = i32, Path, description = "Recipient ID")),
    request_body = UpdateRecipientDto,
    responses(
        (status = 200, description = "Recipient updated", body = RecipientDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Recipient, school, or order not found", body = ErrorDto),
        (status = 422, description = "Invalid recipient fields", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn update_recipient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRecipientDto>,
) -> Result<impl IntoResponse, AppError> {
    let recipient = RecipientService::new(&state.db)
        .update(UpdateRecipientParams::from_dto(id, payload))
        .await?
        .ok_or_else(recipient_not_found)?;

    Ok((StatusCode::OK, Json(recipient.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/recipients/{id}",
    tag = RECIPIENT_TAG,
    params(("id" = i32, Path, description = "Recipient ID")),
    responses(
        (status = 204, description = "Recipient deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Recipient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn delete_recipient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !RecipientService::new(&state.db).delete(id).await? {
        return Err(recipient_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
