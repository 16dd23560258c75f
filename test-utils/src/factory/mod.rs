//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database and return the
//! stored entity models.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let school = factory::create_school(db).await?;
//!     let student = factory::create_student(db, school.id).await?;
//!
//!     // Fill a school to capacity
//!     let (school, students) = factory::helpers::create_full_school(db, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let school = factory::school::SchoolFactory::new(db)
//!     .name("Green Herald")
//!     .max_students(1)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `school` - Create school entities
//! - `student` - Create student entities
//! - `helpers` - Unique id generation and multi-entity setups

pub mod helpers;
pub mod school;
pub mod student;

pub use school::create_school;
pub use student::create_student;
