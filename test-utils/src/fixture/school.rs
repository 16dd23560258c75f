//! School fixtures for creating in-memory test data.

use entity::school;

/// Default test school name.
pub const DEFAULT_NAME: &str = "Test School";

/// Default capacity, matching the column default.
pub const DEFAULT_MAX_STUDENTS: i32 = 20;

/// Default test city.
pub const DEFAULT_CITY: &str = "Dhaka";

/// Default test country.
pub const DEFAULT_COUNTRY: &str = "Bangladesh";

/// Creates a school entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test School"`
/// - max_students: `20`
/// - city: `"Dhaka"`
/// - country: `"Bangladesh"`
/// - address: `""`
///
/// # Returns
/// - `school::Model` - In-memory school entity
pub fn entity() -> school::Model {
    entity_builder().build()
}

/// Creates a school entity builder for customization.
///
/// # Returns
/// - `SchoolEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> SchoolEntityBuilder {
    SchoolEntityBuilder::default()
}

/// Builder for creating customized school entity models.
pub struct SchoolEntityBuilder {
    id: i32,
    name: String,
    max_students: i32,
    city: String,
    country: String,
    address: String,
}

impl Default for SchoolEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            max_students: DEFAULT_MAX_STUDENTS,
            city: DEFAULT_CITY.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            address: String::new(),
        }
    }
}

impl SchoolEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn max_students(mut self, max_students: i32) -> Self {
        self.max_students = max_students;
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and returns the school entity model.
    pub fn build(self) -> school::Model {
        school::Model {
            id: self.id,
            name: self.name,
            max_students: self.max_students,
            city: self.city,
            country: self.country,
            address: self.address,
        }
    }
}
