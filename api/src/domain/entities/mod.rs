//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod section;
pub mod student;
pub mod team;

pub use section::{same_student, SectionRecord};
pub use student::Student;
pub use team::{Team, TeamDirectory};
