//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// Every student gets a fresh random `student_id` and unique first name.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db, school.id)
///     .first_name("John")
///     .last_name("Wick")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::student::Model,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory enrolled in the given school.
    ///
    /// Defaults:
    /// - first_name: `"Student {id}"` where id is auto-incremented
    /// - student_id: random UUID v4
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `school_id` - School the student belongs to
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, school_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::student::entity_builder()
            .school_id(school_id)
            .first_name(format!("Student {}", id))
            .student_id(uuid::Uuid::new_v4().to_string())
            .build();

        Self { db, entity }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.entity.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    /// Sets the stored age in hundredths of a year (`640` is 6.40 years).
    pub fn age_hundredths(mut self, age_hundredths: Option<i32>) -> Self {
        self.entity.age_hundredths = age_hundredths;
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.entity.nationality = nationality.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.entity.address = address.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// Inserts directly, bypassing any capacity checks.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            school_id: ActiveValue::Set(self.entity.school_id),
            first_name: ActiveValue::Set(self.entity.first_name),
            last_name: ActiveValue::Set(self.entity.last_name),
            student_id: ActiveValue::Set(self.entity.student_id),
            age_hundredths: ActiveValue::Set(self.entity.age_hundredths),
            nationality: ActiveValue::Set(self.entity.nationality),
            address: ActiveValue::Set(self.entity.address),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values in the given school.
///
/// Shorthand for `StudentFactory::new(db, school_id).build().await`.
pub async fn create_student(
    db: &DatabaseConnection,
    school_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, school_id).build().await
}
