//! Student fixtures for creating in-memory test data.
//!
//! Ages are stored as hundredths of a year, so `DEFAULT_AGE_HUNDREDTHS` of `1050`
//! represents an age of `10.50`.

use entity::student;

/// Default student first name.
pub const DEFAULT_FIRST_NAME: &str = "John";

/// Default student last name.
pub const DEFAULT_LAST_NAME: &str = "Cena";

/// Default stored age (10.50 years).
pub const DEFAULT_AGE_HUNDREDTHS: Option<i32> = Some(1050);

/// Default student nationality.
pub const DEFAULT_NATIONALITY: &str = "Bangladeshi";

/// Fixed identifier used by the in-memory fixture.
pub const DEFAULT_STUDENT_ID: &str = "6f9619ff-8b86-4d11-b42d-00c04fc964ff";

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - school_id: `1`
/// - first_name: `"John"`
/// - last_name: `"Cena"`
/// - student_id: `DEFAULT_STUDENT_ID`
/// - age_hundredths: `Some(1050)`
/// - nationality: `"Bangladeshi"`
/// - address: `""`
///
/// # Returns
/// - `student::Model` - In-memory student entity
pub fn entity() -> student::Model {
    entity_builder().build()
}

/// Creates a student entity builder for customization.
///
/// # Returns
/// - `StudentEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> StudentEntityBuilder {
    StudentEntityBuilder::default()
}

/// Builder for creating customized student entity models.
pub struct StudentEntityBuilder {
    id: i32,
    school_id: i32,
    first_name: String,
    last_name: String,
    student_id: String,
    age_hundredths: Option<i32>,
    nationality: String,
    address: String,
}

impl Default for StudentEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            school_id: 1,
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            student_id: DEFAULT_STUDENT_ID.to_string(),
            age_hundredths: DEFAULT_AGE_HUNDREDTHS,
            nationality: DEFAULT_NATIONALITY.to_string(),
            address: String::new(),
        }
    }
}

impl StudentEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn school_id(mut self, school_id: i32) -> Self {
        self.school_id = school_id;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = student_id.into();
        self
    }

    pub fn age_hundredths(mut self, age_hundredths: Option<i32>) -> Self {
        self.age_hundredths = age_hundredths;
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and returns the student entity model.
    pub fn build(self) -> student::Model {
        student::Model {
            id: self.id,
            school_id: self.school_id,
            first_name: self.first_name,
            last_name: self.last_name,
            student_id: self.student_id,
            age_hundredths: self.age_hundredths,
            nationality: self.nationality,
            address: self.address,
        }
    }
}
