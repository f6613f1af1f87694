//! Integration test sequence
//!
//! Runs the fixed seven-step photoshoot sequence against an [`ApiClient`]
//! and reports one outcome per step. No step is ever skipped.
//!
//! [`ApiClient`]: crate::api::ApiClient

mod outcome;
mod runner;

pub use outcome::{classify, Outcome, RunSummary, StepKind, StepReport};
pub use runner::TestRunner;
