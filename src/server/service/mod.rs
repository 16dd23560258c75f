//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing the school capacity rule on every write
//! - **Orchestration**: Coordinating school and student repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running each capacity check and its write in one transaction

pub mod populate;
pub mod school;
pub mod student;

#[cfg(test)]
mod test;
