//! HTTP request handlers.
//!
//! Controllers extract path, query and body input, convert DTOs into validated parameter
//! models, call the matching service and convert the resulting domain models back into
//! DTOs. Every handler returns `Result<impl IntoResponse, AppError>`.

pub mod param;
pub mod school;
pub mod student;

#[cfg(test)]
mod test;
