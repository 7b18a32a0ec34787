//! Record store port
//!
//! The roster lives in an external flat table. This trait is the only surface
//! the application layer sees, so the backing technology can be swapped
//! without touching aggregation or mutation logic.

use async_trait::async_trait;

use crate::domain::entities::Student;
use crate::error::DomainError;

/// Flat student table keyed by row
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// List every student in source order
    async fn list_students(&self) -> Result<Vec<Student>, DomainError>;

    /// Append a student as a new row
    async fn append_student(&self, student: &Student) -> Result<(), DomainError>;

    /// Remove every row whose name matches exactly; returns how many were removed
    async fn remove_students(&self, name: &str) -> Result<usize, DomainError>;
}
