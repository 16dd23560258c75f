use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        school::{PaginatedSchoolsDto, SchoolDto, SchoolPayloadDto},
        student::{PaginatedStudentsDto, StudentDto, StudentPayloadDto},
    },
    server::{
        controller::{
            school::{
                self, create_school, delete_school, get_school, list_schools, patch_school,
                replace_school,
            },
            student::{
                self, create_school_student, create_student, delete_school_student,
                delete_student, get_school_student, get_student, list_school_students,
                list_students, patch_school_student, patch_student, replace_school_student,
                replace_student,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Schoolboard API", description = "Schools and their enrolled students"),
    paths(
        school::list_schools,
        school::get_school,
        school::create_school,
        school::replace_school,
        school::patch_school,
        school::delete_school,
        student::list_students,
        student::get_student,
        student::create_student,
        student::replace_student,
        student::patch_student,
        student::delete_student,
        student::list_school_students,
        student::get_school_student,
        student::create_school_student,
        student::replace_school_student,
        student::patch_school_student,
        student::delete_school_student,
    ),
    components(schemas(
        ErrorDto,
        ValidationErrorDto,
        SchoolDto,
        SchoolPayloadDto,
        PaginatedSchoolsDto,
        StudentDto,
        StudentPayloadDto,
        PaginatedStudentsDto,
    )),
    tags(
        (name = "school", description = "School management"),
        (name = "student", description = "Student enrolment")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/schools/", get(list_schools).post(create_school))
        .route(
            "/api/schools/{id}/",
            get(get_school)
                .put(replace_school)
                .patch(patch_school)
                .delete(delete_school),
        )
        .route(
            "/api/schools/{school_id}/students/",
            get(list_school_students).post(create_school_student),
        )
        .route(
            "/api/schools/{school_id}/students/{id}/",
            get(get_school_student)
                .put(replace_school_student)
                .patch(patch_school_student)
                .delete(delete_school_student),
        )
        .route("/api/students/", get(list_students).post(create_student))
        .route(
            "/api/students/{id}/",
            get(get_student)
                .put(replace_student)
                .patch(patch_student)
                .delete(delete_student),
        )
        .route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
