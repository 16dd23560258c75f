use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::FieldInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SchoolDto {
    pub id: i32,
    pub name: String,
    pub max_students: u32,
    pub city: String,
    pub country: String,
    pub address: String,
    /// Number of students currently enrolled.
    pub total_student: u64,
}

/// Request body for creating, replacing or patching a school.
///
/// Every field is optional at the serde level and tolerates a wrong JSON type, so that
/// missing or mistyped fields can be reported per field instead of as a single
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SchoolPayloadDto {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Option<FieldInput<String>>,
    /// Maximum number of students (default: 20)
    #[serde(default)]
    #[schema(value_type = Option<u32>)]
    pub max_students: Option<FieldInput<i64>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub city: Option<FieldInput<String>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub country: Option<FieldInput<String>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub address: Option<FieldInput<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedSchoolsDto {
    pub results: Vec<SchoolDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
