//! Photoshoot API integration harness
//!
//! Runs a fixed create/read/update/attach/list/delete sequence against a
//! photoshoot CRUD service and reports SUCCESS, FAILED or EXCEPTION for
//! every step.

pub mod api;
pub mod commands;
pub mod common;
pub mod testing;

// Re-export commonly used types for tests
pub use api::{ApiClient, HttpApiClient, PhotoId, ShootId};
pub use common::{Error, Result};
pub use testing::{Outcome, RunSummary, StepKind, StepReport, TestRunner};
