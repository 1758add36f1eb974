//! Testing infrastructure for save-analyzer integration tests.
//!
//! - `TestWorld`: Fluent interface for building a save directory and running the CLI
//! - `assertions`: Checks against the JSON output envelope
//! - `fixtures`: Named timestamp sets for common play patterns

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
