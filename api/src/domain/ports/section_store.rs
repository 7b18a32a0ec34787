//! Completed-sections port

use async_trait::async_trait;

use crate::domain::entities::SectionRecord;
use crate::error::DomainError;

/// Read-only log of completed sections
#[async_trait]
pub trait SectionStore: Send + Sync {
    /// Every recorded section in source order
    async fn list_sections(&self) -> Result<Vec<SectionRecord>, DomainError>;
}
