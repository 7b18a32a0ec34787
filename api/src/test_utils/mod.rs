//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The store port is three methods; a hand-written fake is shorter than the setup
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
