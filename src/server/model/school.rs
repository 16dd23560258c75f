//! Domain models and parameters for school operations.
//!
//! `School` is the service-layer view of a school row together with its derived student
//! count. The capacity rule lives here as plain predicates so that services can evaluate
//! it against a locked row before writing.

use std::str::FromStr;

use crate::{
    model::school::{PaginatedSchoolsDto, SchoolDto, SchoolPayloadDto},
    server::{
        error::{capacity::CapacityError, validation::ValidationError},
        model::query::{Paginated, UnknownOrderField},
        util::validate,
    },
};

pub const NAME_MAX_LEN: usize = 20;
pub const LOCATION_MAX_LEN: usize = 80;
pub const DEFAULT_MAX_STUDENTS: i32 = 20;

/// A school with its current enrolment.
#[derive(Debug, Clone, PartialEq)]
pub struct School {
    pub id: i32,
    pub name: String,
    pub max_students: i32,
    pub city: String,
    pub country: String,
    pub address: String,
    /// Number of students currently referencing this school.
    pub total_student: u64,
}

impl School {
    /// Converts an entity model plus its student count into the domain model.
    ///
    /// # Arguments
    /// - `entity`: The school row
    /// - `total_student`: Count of students referencing the school
    pub fn from_entity(entity: entity::school::Model, total_student: u64) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            max_students: entity.max_students,
            city: entity.city,
            country: entity.country,
            address: entity.address,
            total_student,
        }
    }

    pub fn into_dto(self) -> SchoolDto {
        SchoolDto {
            id: self.id,
            name: self.name,
            max_students: self.max_students.max(0) as u32,
            city: self.city,
            country: self.country,
            address: self.address,
            total_student: self.total_student,
        }
    }

    pub fn occupancy(&self) -> Occupancy {
        Occupancy {
            total_student: self.total_student,
            max_students: self.max_students.max(0) as u64,
        }
    }

    /// Fails with a capacity error if one more student would exceed the limit.
    pub fn ensure_can_admit(&self) -> Result<(), CapacityError> {
        if self.occupancy().can_admit() {
            Ok(())
        } else {
            Err(self.limit_exceeded())
        }
    }

    /// Fails with a capacity error if the current enrolment does not fit in `new_max`.
    pub fn ensure_can_resize_to(&self, new_max: i32) -> Result<(), CapacityError> {
        if self.occupancy().can_resize_to(new_max.max(0) as u64) {
            Ok(())
        } else {
            Err(self.limit_exceeded())
        }
    }

    fn limit_exceeded(&self) -> CapacityError {
        CapacityError::LimitExceeded {
            school_name: self.name.clone(),
        }
    }
}

impl Paginated<School> {
    pub fn into_dto(self) -> PaginatedSchoolsDto {
        PaginatedSchoolsDto {
            results: self.items.into_iter().map(School::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Enrolment against capacity for a single school.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    pub total_student: u64,
    pub max_students: u64,
}

impl Occupancy {
    /// Whether another student may be attached.
    pub fn can_admit(&self) -> bool {
        self.total_student < self.max_students
    }

    /// Whether the limit may be changed to `new_max`. Equality is allowed.
    pub fn can_resize_to(&self, new_max: u64) -> bool {
        self.total_student <= new_max
    }
}

/// Fields a school list may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchoolOrderField {
    Id,
    Name,
    MaxStudents,
    City,
    Country,
}

impl FromStr for SchoolOrderField {
    type Err = UnknownOrderField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "max_students" => Ok(Self::MaxStudents),
            "city" => Ok(Self::City),
            "country" => Ok(Self::Country),
            other => Err(UnknownOrderField(other.to_string())),
        }
    }
}

/// Validated input for creating a school.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSchoolParams {
    pub name: String,
    pub max_students: i32,
    pub city: String,
    pub country: String,
    pub address: String,
}

impl CreateSchoolParams {
    /// Validates a request payload.
    ///
    /// `name`, `city` and `country` are required; `max_students` defaults to 20 and
    /// `address` to an empty string.
    pub fn try_from_dto(dto: SchoolPayloadDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();
        let fields = SchoolFields::validate(&mut errors, dto, false);
        errors.into_result()?;

        Ok(Self {
            name: fields.name.unwrap_or_default(),
            max_students: fields.max_students.unwrap_or(DEFAULT_MAX_STUDENTS),
            city: fields.city.unwrap_or_default(),
            country: fields.country.unwrap_or_default(),
            address: fields.address.unwrap_or_default(),
        })
    }
}

/// Validated input for replacing or patching a school. `None` leaves a field unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSchoolParams {
    pub id: i32,
    pub name: Option<String>,
    pub max_students: Option<i32>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
}

impl UpdateSchoolParams {
    /// Validates a request payload for school `id`.
    ///
    /// With `partial` unset (PUT) the required fields must be present.
    pub fn try_from_dto(
        id: i32,
        dto: SchoolPayloadDto,
        partial: bool,
    ) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();
        let fields = SchoolFields::validate(&mut errors, dto, partial);
        errors.into_result()?;

        Ok(Self {
            id,
            name: fields.name,
            max_students: fields.max_students,
            city: fields.city,
            country: fields.country,
            address: fields.address,
        })
    }
}

struct SchoolFields {
    name: Option<String>,
    max_students: Option<i32>,
    city: Option<String>,
    country: Option<String>,
    address: Option<String>,
}

impl SchoolFields {
    fn validate(errors: &mut ValidationError, dto: SchoolPayloadDto, partial: bool) -> Self {
        let required = !partial;

        let name = validate::field(errors, "name", dto.name, required)
            .map(|v| validate::bounded_text(errors, "name", v, NAME_MAX_LEN));
        let city = validate::field(errors, "city", dto.city, required)
            .map(|v| validate::bounded_text(errors, "city", v, LOCATION_MAX_LEN));
        let country = validate::field(errors, "country", dto.country, required)
            .map(|v| validate::bounded_text(errors, "country", v, LOCATION_MAX_LEN));

        let max_students = validate::field(errors, "max_students", dto.max_students, false)
            .and_then(|v| validate::bounded_int(errors, "max_students", v, 0, i32::MAX as i64))
            .map(|v| v as i32);
        let address = validate::field(errors, "address", dto.address, false)
            .map(|v| v.trim().to_string());

        Self {
            name,
            max_students,
            city,
            country,
            address,
        }
    }
}
