//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON bodies accepted and returned by the controllers. They carry
//! no behavior beyond serialization and OpenAPI schema generation; conversion to and from
//! the server's domain models happens in `server::model`.

pub mod api;
pub mod field;
pub mod school;
pub mod student;
