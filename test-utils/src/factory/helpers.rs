//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a school with the given capacity and as many students as it can hold.
///
/// # Arguments
/// - `db` - Database connection
/// - `max_students` - Capacity of the school, also the number of students created
///
/// # Returns
/// - `Ok((school, students))` - The school and its students
/// - `Err(DbErr)` - Database error during creation
pub async fn create_full_school(
    db: &DatabaseConnection,
    max_students: i32,
) -> Result<(entity::school::Model, Vec<entity::student::Model>), DbErr> {
    let school = crate::factory::school::SchoolFactory::new(db)
        .max_students(max_students)
        .build()
        .await?;

    let mut students = Vec::new();
    for _ in 0..max_students {
        students.push(crate::factory::student::create_student(db, school.id).await?);
    }

    Ok((school, students))
}

/// Creates a school with default values and one student enrolled in it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((school, student))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_school(
    db: &DatabaseConnection,
) -> Result<(entity::school::Model, entity::student::Model), DbErr> {
    let school = crate::factory::school::create_school(db).await?;
    let student = crate::factory::student::create_student(db, school.id).await?;

    Ok((school, student))
}
