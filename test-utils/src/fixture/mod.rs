//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models for use in
//! unit tests and as default values for factories. Unlike factories, fixtures do NOT
//! insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let school = fixture::school::entity();
//!
//! // Create with custom fields
//! let small = fixture::school::entity_builder()
//!     .max_students(1)
//!     .build();
//! ```

pub mod school;
pub mod student;

pub use school::{entity as school_entity, entity_builder as school_entity_builder};
pub use student::{entity as student_entity, entity_builder as student_entity_builder};
