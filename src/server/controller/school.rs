use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        school::{CreateSchoolDto, SchoolDto, UpdateSchoolDto},
    },
    server::{
        error::AppError,
        model::school::{CreateSchoolParams, UpdateSchoolParams},
        service::school::SchoolService,
        state::AppState,
    },
};

pub static SCHOOL_TAG: &str = "school";

fn school_not_found() -> AppError {
    AppError::NotFound("School not found".to_string())
}

#[utoipa::path(
    get,
    path = "/schools",
    tag = SCHOOL_TAG,
    responses(
        (status = 200, description = "All schools", body = Vec<SchoolDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_schools(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let schools = SchoolService::new(&state.db).get_all().await?;

    let dto: Vec<SchoolDto> = schools.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/schools/{id}",
    tag = SCHOOL_TAG,
    params(("id" = i32, Path, description = "School ID")),
    responses(
        (status = 200, description = "The school", body = SchoolDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let school = SchoolService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(school_not_found)?;

    Ok((StatusCode::OK, Json(school.into_dto())))
}

#[utoipa::path(
    post,
    path = "/schools",
    tag = SCHOOL_TAG,
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "School created", body = SchoolDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 422, description = "Blank name or address", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn create_school(
    State(state): State<AppState>,
    Json(payload): Json<CreateSchoolDto>,
) -> Result<impl IntoResponse, AppError> {
    let school = SchoolService::new(&state.db)
        .create(CreateSchoolParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(school.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/schools/{id}",
    tag = SCHOOL_TAG,
    params(("id" = i32, Path, description = "School ID")),
    request_body = UpdateSchoolDto,
    responses(
        (status = 200, description = "School updated", body = SchoolDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 422, description = "Blank name or address", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn update_school(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSchoolDto>,
) -> Result<impl IntoResponse, AppError> {
    let school = SchoolService::new(&state.db)
        .update(UpdateSchoolParams::from_dto(id, payload))
        .await?
        .ok_or_else(school_not_found)?;

    Ok((StatusCode::OK, Json(school.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/schools/{id}",
    tag = SCHOOL_TAG,
    params(("id" = i32, Path, description = "School ID")),
    responses(
        (status = 204, description = "School deleted, its recipients kept without a school"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn delete_school(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !SchoolService::new(&state.db).delete(id).await? {
        return Err(school_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
