//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod aggregator;
pub mod progress_service;
pub mod roster_service;

pub use aggregator::{Standings, StudentProgress, TeamStanding};
pub use progress_service::{ProgressService, SectionDetail};
pub use roster_service::{RosterService, RosterView};
