//! Test harness for the thread generation pipeline.
//!
//! # Key Components
//!
//! - [`helpers`] — scenario builder running the pipeline against a fresh
//!   kernel, plus the harness error type
//! - [`oracle`] — verification functions returning pass/fail verdicts

pub mod helpers;
pub mod oracle;

pub use helpers::{HarnessError, ThreadScenario};
pub use oracle::OracleVerdict;
