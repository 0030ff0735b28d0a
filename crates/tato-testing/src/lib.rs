//! Testing infrastructure for tato-aisle integration tests.
//!
//! - `TestWorld`: an isolated data directory plus a way to run the binary in it
//! - `assertions`: checks against the JSON output of the CLI
//! - `fixtures`: saved carts and config files

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
