//! Request extractors and query parameters shared by the controllers.

use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;
use std::str::FromStr;
use utoipa::IntoParams;

use crate::server::{
    error::AppError,
    model::query::{ListParams, UnknownOrderField, DEFAULT_ENTRIES},
};

/// Query string accepted by the list endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive text to search for
    pub search: Option<String>,
    /// Comma separated fields, prefix with `-` for descending order
    pub ordering: Option<String>,
    /// Page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10, max: 100)
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    DEFAULT_ENTRIES
}

impl ListQuery {
    pub fn to_list_params<F: FromStr<Err = UnknownOrderField>>(self) -> ListParams<F> {
        ListParams::new(self.search, self.ordering.as_deref(), self.page, self.entries)
    }
}

/// JSON body extractor whose rejections are reported as `AppError::BadRequest`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor whose rejections are reported as `AppError::NotFound`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string extractor whose rejections are reported as `AppError::BadRequest`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
