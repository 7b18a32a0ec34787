//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod section_store;
pub mod student_store;

pub use section_store::SectionStore;
pub use student_store::StudentStore;
