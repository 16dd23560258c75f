//! School factory for creating test school entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schools with customizable fields.
///
/// Default values are sourced from the school fixture, with a unique name per school.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::school::SchoolFactory;
///
/// let school = SchoolFactory::new(&db)
///     .name("St. Joseph")
///     .max_students(3)
///     .build()
///     .await?;
/// ```
pub struct SchoolFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::school::Model,
}

impl<'a> SchoolFactory<'a> {
    /// Creates a new SchoolFactory with default values from fixture.
    ///
    /// Defaults:
    /// - name: `"School {id}"` where id is auto-incremented
    /// - max_students: `20`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SchoolFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::school::entity_builder()
            .name(format!("School {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the school name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the maximum number of students the school accepts.
    pub fn max_students(mut self, max_students: i32) -> Self {
        self.entity.max_students = max_students;
        self
    }

    /// Sets the city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.entity.city = city.into();
        self
    }

    /// Sets the country.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.entity.country = country.into();
        self
    }

    /// Sets the street address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.entity.address = address.into();
        self
    }

    /// Builds and inserts the school entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::school::Model)` - Created school entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::school::Model, DbErr> {
        entity::school::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            max_students: ActiveValue::Set(self.entity.max_students),
            city: ActiveValue::Set(self.entity.city),
            country: ActiveValue::Set(self.entity.country),
            address: ActiveValue::Set(self.entity.address),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a school with default values.
///
/// Shorthand for `SchoolFactory::new(db).build().await`.
pub async fn create_school(db: &DatabaseConnection) -> Result<entity::school::Model, DbErr> {
    SchoolFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_school_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(School).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let school = create_school(db).await?;

        assert!(school.id > 0);
        assert!(school.name.starts_with("School "));
        assert_eq!(school.max_students, fixture::school::DEFAULT_MAX_STUDENTS);

        Ok(())
    }

    #[tokio::test]
    async fn creates_school_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(School).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let school = SchoolFactory::new(db)
            .name("Ideal Boys")
            .max_students(3)
            .city("Chittagong")
            .build()
            .await?;

        assert_eq!(school.name, "Ideal Boys");
        assert_eq!(school.max_students, 3);
        assert_eq!(school.city, "Chittagong");

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_schools() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(School).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let school1 = create_school(db).await?;
        let school2 = create_school(db).await?;

        assert_ne!(school1.id, school2.id);
        assert_ne!(school1.name, school2.name);

        Ok(())
    }
}
