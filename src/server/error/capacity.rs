use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    /// The write would leave a school with more students than `max_students`.
    ///
    /// Raised when a student is created in or moved into a full school, or when a
    /// school's limit is lowered below its current enrolment. Results in a
    /// 400 Bad Request naming the school.
    #[error("Maximum students limit exceeded for {school_name}.")]
    LimitExceeded {
        /// Display name of the school whose limit would be exceeded
        school_name: String,
    },
}

impl IntoResponse for CapacityError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
