//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{SectionRecord, Student};
use crate::domain::ports::{SectionStore, StudentStore};
use crate::error::DomainError;

// ============================================================================
// In-Memory Student Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryStudentStore {
    students: Arc<RwLock<Vec<Student>>>,
    writes: AtomicUsize,
    fail: AtomicBool,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with students for testing
    pub fn with_students(self, students: Vec<Student>) -> Self {
        self.students.write().unwrap().extend(students);
        self
    }

    /// Make every call fail as if the backing store were down
    pub fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }

    /// Current contents, in row order
    pub fn snapshot(&self) -> Vec<Student> {
        self.students.read().unwrap().clone()
    }

    /// Number of append/remove calls that reached the store
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(DomainError::StoreUnavailable(
                "in-memory store set to fail".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn list_students(&self) -> Result<Vec<Student>, DomainError> {
        self.check_available()?;
        Ok(self.snapshot())
    }

    async fn append_student(&self, student: &Student) -> Result<(), DomainError> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.students.write().unwrap().push(student.clone());
        Ok(())
    }

    async fn remove_students(&self, name: &str) -> Result<usize, DomainError> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut students = self.students.write().unwrap();
        let before = students.len();
        students.retain(|s| s.name != name);
        Ok(before - students.len())
    }
}

// ============================================================================
// In-Memory Section Store
// ============================================================================

#[derive(Default)]
pub struct InMemorySectionStore {
    sections: Vec<SectionRecord>,
    fail: bool,
}

impl InMemorySectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sections(mut self, sections: Vec<SectionRecord>) -> Self {
        self.sections.extend(sections);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl SectionStore for InMemorySectionStore {
    async fn list_sections(&self) -> Result<Vec<SectionRecord>, DomainError> {
        if self.fail {
            return Err(DomainError::StoreUnavailable(
                "in-memory section store set to fail".to_string(),
            ));
        }
        Ok(self.sections.clone())
    }
}
