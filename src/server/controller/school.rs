use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        school::{PaginatedSchoolsDto, SchoolDto, SchoolPayloadDto},
    },
    server::{
        controller::param::{AppJson, AppPath, AppQuery, ListQuery},
        error::AppError,
        model::school::{CreateSchoolParams, UpdateSchoolParams},
        service::school::SchoolService,
        state::AppState,
    },
};

/// Tag for grouping school endpoints in OpenAPI documentation
pub static SCHOOL_TAG: &str = "school";

fn school_not_found() -> AppError {
    AppError::NotFound("School not found".to_string())
}

/// List schools.
///
/// Returns a page of schools with their current enrolment. Supports searching by name,
/// city or country and ordering by `id`, `name`, `max_students`, `city` or `country`.
///
/// # Returns
/// - `200 OK` - Paginated list of schools
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/schools/",
    tag = SCHOOL_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Successfully retrieved schools", body = PaginatedSchoolsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_schools(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = SchoolService::new(&state.db);

    let schools = service.list(query.to_list_params()).await?;

    Ok((StatusCode::OK, Json(schools.into_dto())))
}

/// Get a school by ID.
///
/// # Returns
/// - `200 OK` - School details
/// - `404 Not Found` - No school with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/schools/{id}/",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved school", body = SchoolDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_school(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SchoolService::new(&state.db);

    let school = service.get_by_id(id).await?.ok_or_else(school_not_found)?;

    Ok((StatusCode::OK, Json(school.into_dto())))
}

/// Create a school.
///
/// `name`, `city` and `country` are required. `max_students` defaults to 20.
///
/// # Returns
/// - `201 Created` - The created school
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/schools/",
    tag = SCHOOL_TAG,
    request_body = SchoolPayloadDto,
    responses(
        (status = 201, description = "Successfully created school", body = SchoolDto),
        (status = 400, description = "Invalid school data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_school(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SchoolPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SchoolService::new(&state.db);

    let params = CreateSchoolParams::try_from_dto(payload)?;

    let school = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(school.into_dto())))
}

/// Replace a school.
///
/// Requires every required field. Lowering `max_students` below the current enrolment
/// is rejected.
///
/// # Returns
/// - `200 OK` - The updated school
/// - `400 Bad Request` - Invalid fields or the new limit is below the enrolment
/// - `404 Not Found` - No school with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/schools/{id}/",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    request_body = SchoolPayloadDto,
    responses(
        (status = 200, description = "Successfully updated school", body = SchoolDto),
        (status = 400, description = "Invalid school data or limit below enrolment", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_school(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<SchoolPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    update_school(state, id, payload, false).await
}

/// Partially update a school.
///
/// Only the fields present in the body are changed.
///
/// # Returns
/// - `200 OK` - The updated school
/// - `400 Bad Request` - Invalid fields or the new limit is below the enrolment
/// - `404 Not Found` - No school with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/schools/{id}/",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    request_body = SchoolPayloadDto,
    responses(
        (status = 200, description = "Successfully updated school", body = SchoolDto),
        (status = 400, description = "Invalid school data or limit below enrolment", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_school(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<SchoolPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    update_school(state, id, payload, true).await
}

async fn update_school(
    state: AppState,
    id: i32,
    payload: SchoolPayloadDto,
    partial: bool,
) -> Result<(StatusCode, Json<SchoolDto>), AppError> {
    let service = SchoolService::new(&state.db);

    let params = UpdateSchoolParams::try_from_dto(id, payload, partial)?;

    let school = service.update(params).await?.ok_or_else(school_not_found)?;

    Ok((StatusCode::OK, Json(school.into_dto())))
}

/// Delete a school and all of its students.
///
/// # Returns
/// - `204 No Content` - School deleted
/// - `404 Not Found` - No school with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/schools/{id}/",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted school"),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_school(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SchoolService::new(&state.db);

    if !service.delete(id).await? {
        return Err(school_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
