//! Student endpoints.
//!
//! Every operation is exposed twice: on the flat `/api/students/` collection and nested
//! under `/api/schools/{school_id}/students/`. Nested handlers restrict the visible
//! students to the parent school, and a student enrolled elsewhere is reported as not
//! found.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        student::{PaginatedStudentsDto, StudentDto, StudentPayloadDto},
    },
    server::{
        controller::param::{AppJson, AppPath, AppQuery, ListQuery},
        error::AppError,
        model::student::{CreateStudentParams, StudentScope, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

fn student_not_found() -> AppError {
    AppError::NotFound("Student not found".to_string())
}

/// List students.
///
/// Supports searching by first or last name and ordering by `id`, `first_name`,
/// `last_name`, `age`, `nationality`, `school__name`, `school__city` or `school__country`.
///
/// # Returns
/// - `200 OK` - Paginated list of students
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/",
    tag = STUDENT_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Successfully retrieved students", body = PaginatedStudentsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    list(state, StudentScope::All, query).await
}

/// List the students of a school.
///
/// An unknown school yields an empty page.
///
/// # Returns
/// - `200 OK` - Paginated list of the school's students
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/students/",
    tag = STUDENT_TAG,
    params(
        ("school_id" = i32, Path, description = "School ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved students", body = PaginatedStudentsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_school_students(
    State(state): State<AppState>,
    AppPath(school_id): AppPath<i32>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    list(state, StudentScope::School(school_id), query).await
}

async fn list(
    state: AppState,
    scope: StudentScope,
    query: ListQuery,
) -> Result<(StatusCode, Json<PaginatedStudentsDto>), AppError> {
    let service = StudentService::new(&state.db);

    let students = service.list(scope, query.to_list_params()).await?;

    Ok((StatusCode::OK, Json(students.into_dto())))
}

/// Get a student by ID.
///
/// # Returns
/// - `200 OK` - Student details
/// - `404 Not Found` - No student with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/{id}/",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    get(state, StudentScope::All, id).await
}

/// Get a student of a school by ID.
///
/// # Returns
/// - `200 OK` - Student details
/// - `404 Not Found` - No such student in this school
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/students/{id}/",
    tag = STUDENT_TAG,
    params(
        ("school_id" = i32, Path, description = "School ID"),
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found in this school", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_school_student(
    State(state): State<AppState>,
    AppPath((school_id, id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    get(state, StudentScope::School(school_id), id).await
}

async fn get(
    state: AppState,
    scope: StudentScope,
    id: i32,
) -> Result<(StatusCode, Json<StudentDto>), AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .get_by_id(scope, id)
        .await?
        .ok_or_else(student_not_found)?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Enroll a student.
///
/// The `student_id` is generated by the server. Fails when the school has reached its
/// `max_students` limit.
///
/// # Returns
/// - `201 Created` - The created student
/// - `400 Bad Request` - Invalid fields, unknown school or school full
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students/",
    tag = STUDENT_TAG,
    request_body = StudentPayloadDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data or school full", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    AppJson(payload): AppJson<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    create(state, StudentScope::All, payload).await
}

/// Enroll a student in a school.
///
/// `school` defaults to the school in the path and must match it when given.
///
/// # Returns
/// - `201 Created` - The created student
/// - `400 Bad Request` - Invalid fields, mismatched school or school full
/// - `404 Not Found` - The school does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/schools/{school_id}/students/",
    tag = STUDENT_TAG,
    params(
        ("school_id" = i32, Path, description = "School ID")
    ),
    request_body = StudentPayloadDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data or school full", body = ValidationErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_school_student(
    State(state): State<AppState>,
    AppPath(school_id): AppPath<i32>,
    AppJson(payload): AppJson<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    create(state, StudentScope::School(school_id), payload).await
}

async fn create(
    state: AppState,
    scope: StudentScope,
    payload: StudentPayloadDto,
) -> Result<(StatusCode, Json<StudentDto>), AppError> {
    let service = StudentService::new(&state.db);

    let params = CreateStudentParams::try_from_dto(payload, scope.school_id())?;

    let student = service.create(scope, params).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// Replace a student.
///
/// Requires every required field. Changing `school` moves the student and fails when
/// the target school is full.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Invalid fields or target school full
/// - `404 Not Found` - No student with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/students/{id}/",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentPayloadDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data or school full", body = ValidationErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_student(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    update(state, StudentScope::All, id, payload, false).await
}

/// Partially update a student.
///
/// Only the fields present in the body are changed.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Invalid fields or target school full
/// - `404 Not Found` - No student with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/students/{id}/",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentPayloadDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data or school full", body = ValidationErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_student(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    update(state, StudentScope::All, id, payload, true).await
}

/// Replace a student of a school.
///
/// `school` defaults to the school in the path. A different school moves the student.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Invalid fields or target school full
/// - `404 Not Found` - No such student in this school
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/schools/{school_id}/students/{id}/",
    tag = STUDENT_TAG,
    params(
        ("school_id" = i32, Path, description = "School ID"),
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentPayloadDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data or school full", body = ValidationErrorDto),
        (status = 404, description = "Student not found in this school", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_school_student(
    State(state): State<AppState>,
    AppPath((school_id, id)): AppPath<(i32, i32)>,
    AppJson(payload): AppJson<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    update(state, StudentScope::School(school_id), id, payload, false).await
}

/// Partially update a student of a school.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Invalid fields or target school full
/// - `404 Not Found` - No such student in this school
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/schools/{school_id}/students/{id}/",
    tag = STUDENT_TAG,
    params(
        ("school_id" = i32, Path, description = "School ID"),
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentPayloadDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data or school full", body = ValidationErrorDto),
        (status = 404, description = "Student not found in this school", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_school_student(
    State(state): State<AppState>,
    AppPath((school_id, id)): AppPath<(i32, i32)>,
    AppJson(payload): AppJson<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    update(state, StudentScope::School(school_id), id, payload, true).await
}

async fn update(
    state: AppState,
    scope: StudentScope,
    id: i32,
    payload: StudentPayloadDto,
    partial: bool,
) -> Result<(StatusCode, Json<StudentDto>), AppError> {
    let service = StudentService::new(&state.db);

    let params = UpdateStudentParams::try_from_dto(id, payload, partial, scope.school_id())?;

    let student = service
        .update(scope, params)
        .await?
        .ok_or_else(student_not_found)?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student.
///
/// # Returns
/// - `204 No Content` - Student deleted
/// - `404 Not Found` - No student with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/students/{id}/",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(state, StudentScope::All, id).await
}

/// Delete a student of a school.
///
/// # Returns
/// - `204 No Content` - Student deleted
/// - `404 Not Found` - No such student in this school
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/schools/{school_id}/students/{id}/",
    tag = STUDENT_TAG,
    params(
        ("school_id" = i32, Path, description = "School ID"),
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 404, description = "Student not found in this school", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_school_student(
    State(state): State<AppState>,
    AppPath((school_id, id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    delete(state, StudentScope::School(school_id), id).await
}

async fn delete(state: AppState, scope: StudentScope, id: i32) -> Result<StatusCode, AppError> {
    let service = StudentService::new(&state.db);

    if !service.delete(scope, id).await? {
        return Err(student_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
