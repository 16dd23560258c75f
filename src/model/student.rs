use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::field::FieldInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    /// ID of the school the student is enrolled in.
    pub school: i32,
    pub first_name: String,
    pub last_name: String,
    pub student_id: Uuid,
    pub age: Option<Decimal>,
    pub nationality: String,
    pub address: String,
}

/// Request body for creating, replacing or patching a student.
///
/// `student_id` is assigned by the server and is not accepted here; it is ignored if sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentPayloadDto {
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub school: Option<FieldInput<i32>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub first_name: Option<FieldInput<String>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub last_name: Option<FieldInput<String>>,
    /// Age in years, accepted as a JSON number or a decimal string.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub age: Option<FieldInput<Decimal>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub nationality: Option<FieldInput<String>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub address: Option<FieldInput<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedStudentsDto {
    pub results: Vec<StudentDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
