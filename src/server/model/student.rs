//! Domain models and parameters for student operations.
//!
//! Students are always addressed through a `StudentScope`: the flat `/students` routes
//! see every student, the nested `/schools/{school_id}/students` routes only the
//! students of that school.

use rust_decimal::{prelude::ToPrimitive, Decimal};
use sea_orm::DbErr;
use std::str::FromStr;
use uuid::Uuid;

use crate::{
    model::student::{PaginatedStudentsDto, StudentDto, StudentPayloadDto},
    server::{
        error::validation::ValidationError,
        model::query::{Paginated, UnknownOrderField},
        util::validate,
    },
};

pub const NAME_MAX_LEN: usize = 64;
pub const NATIONALITY_MAX_LEN: usize = 80;
pub const AGE_MAX_DIGITS: u32 = 5;
pub const AGE_DECIMAL_PLACES: u32 = 2;

/// Converts an age in years to the stored hundredths-of-a-year representation.
pub fn age_to_hundredths(age: Decimal) -> Option<i32> {
    (age * Decimal::ONE_HUNDRED).round().to_i32()
}

/// Converts stored hundredths back into years with two decimal places.
pub fn age_from_hundredths(hundredths: i32) -> Decimal {
    Decimal::new(hundredths as i64, AGE_DECIMAL_PLACES)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub school_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub student_id: Uuid,
    pub age: Option<Decimal>,
    pub nationality: String,
    pub address: String,
}

impl Student {
    /// Converts an entity model to the domain model.
    ///
    /// # Returns
    /// - `Ok(Student)`: The converted student
    /// - `Err(DbErr::Custom)`: The stored `student_id` is not a valid UUID
    pub fn from_entity(entity: entity::student::Model) -> Result<Self, DbErr> {
        let student_id = Uuid::parse_str(&entity.student_id).map_err(|e| {
            DbErr::Custom(format!(
                "Invalid student_id '{}' for student {}: {}",
                entity.student_id, entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            school_id: entity.school_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            student_id,
            age: entity.age_hundredths.map(age_from_hundredths),
            nationality: entity.nationality,
            address: entity.address,
        })
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            school: self.school_id,
            first_name: self.first_name,
            last_name: self.last_name,
            student_id: self.student_id,
            age: self.age,
            nationality: self.nationality,
            address: self.address,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Paginated<Student> {
    pub fn into_dto(self) -> PaginatedStudentsDto {
        PaginatedStudentsDto {
            results: self.items.into_iter().map(Student::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Which students a request may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentScope {
    All,
    /// Only students enrolled in the given school.
    School(i32),
}

impl StudentScope {
    pub fn school_id(&self) -> Option<i32> {
        match self {
            Self::All => None,
            Self::School(id) => Some(*id),
        }
    }

    /// Whether a student enrolled in `school_id` is visible in this scope.
    pub fn contains(&self, school_id: i32) -> bool {
        match self {
            Self::All => true,
            Self::School(id) => *id == school_id,
        }
    }
}

/// Fields a student list may be sorted by. `School*` variants sort on the related school.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentOrderField {
    Id,
    FirstName,
    LastName,
    Age,
    Nationality,
    SchoolName,
    SchoolCity,
    SchoolCountry,
}

impl StudentOrderField {
    pub fn is_school_field(&self) -> bool {
        matches!(
            self,
            Self::SchoolName | Self::SchoolCity | Self::SchoolCountry
        )
    }
}

impl FromStr for StudentOrderField {
    type Err = UnknownOrderField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            "age" => Ok(Self::Age),
            "nationality" => Ok(Self::Nationality),
            "school__name" => Ok(Self::SchoolName),
            "school__city" => Ok(Self::SchoolCity),
            "school__country" => Ok(Self::SchoolCountry),
            other => Err(UnknownOrderField(other.to_string())),
        }
    }
}

/// Validated input for creating a student.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStudentParams {
    pub school_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<Decimal>,
    pub nationality: String,
    pub address: String,
}

impl CreateStudentParams {
    /// Validates a request payload.
    ///
    /// # Arguments
    /// - `dto`: The request body
    /// - `parent`: School id from a nested route. It is used when the body omits `school`,
    ///   and a body naming a different school is rejected.
    pub fn try_from_dto(
        dto: StudentPayloadDto,
        parent: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let school = validate::field(&mut errors, "school", dto.school.clone(), false);
        let school_id = match (school, parent) {
            (Some(school), Some(parent)) if school != parent => {
                errors.add(
                    "school",
                    format!("Must match the school in the URL ({}).", parent),
                );
                None
            }
            (school, parent) => validate::present(&mut errors, "school", school.or(parent)),
        };
        let fields = StudentFields::validate(&mut errors, dto, false);
        errors.into_result()?;

        Ok(Self {
            school_id: school_id.unwrap_or_default(),
            first_name: fields.first_name.unwrap_or_default(),
            last_name: fields.last_name.unwrap_or_default(),
            age: fields.age,
            nationality: fields.nationality.unwrap_or_default(),
            address: fields.address.unwrap_or_default(),
        })
    }
}

/// Validated input for replacing or patching a student. `None` leaves a field unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStudentParams {
    pub id: i32,
    /// Target school; a value different from the current one moves the student.
    pub school_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<Decimal>,
    pub nationality: Option<String>,
    pub address: Option<String>,
}

impl UpdateStudentParams {
    /// Validates a request payload for student `id`.
    ///
    /// With `partial` unset (PUT) the required fields must be present, except `school`
    /// which falls back to `parent` on nested routes.
    pub fn try_from_dto(
        id: i32,
        dto: StudentPayloadDto,
        partial: bool,
        parent: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let school = validate::field(&mut errors, "school", dto.school.clone(), false);
        let school_id = if partial {
            school
        } else {
            validate::present(&mut errors, "school", school.or(parent))
        };
        let fields = StudentFields::validate(&mut errors, dto, partial);
        errors.into_result()?;

        Ok(Self {
            id,
            school_id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            age: fields.age,
            nationality: fields.nationality,
            address: fields.address,
        })
    }
}

struct StudentFields {
    first_name: Option<String>,
    last_name: Option<String>,
    age: Option<Decimal>,
    nationality: Option<String>,
    address: Option<String>,
}

impl StudentFields {
    fn validate(errors: &mut ValidationError, dto: StudentPayloadDto, partial: bool) -> Self {
        let required = !partial;

        let first_name = validate::field(errors, "first_name", dto.first_name, required)
            .map(|v| validate::bounded_text(errors, "first_name", v, NAME_MAX_LEN));
        let last_name = validate::field(errors, "last_name", dto.last_name, required)
            .map(|v| validate::bounded_text(errors, "last_name", v, NAME_MAX_LEN));
        let nationality = validate::field(errors, "nationality", dto.nationality, required)
            .map(|v| validate::bounded_text(errors, "nationality", v, NATIONALITY_MAX_LEN));
        let age = validate::field(errors, "age", dto.age, false).map(|v| {
            validate::bounded_decimal(errors, "age", v, AGE_MAX_DIGITS, AGE_DECIMAL_PLACES)
        });
        let address = validate::field(errors, "address", dto.address, false)
            .map(|v| v.trim().to_string());

        Self {
            first_name,
            last_name,
            age,
            nationality,
            address,
        }
    }
}
