//! Testing infrastructure for regview.
//!
//! - `fixtures`: sample artifact catalogs
//! - `recorder`: captures criteria emitted by a toolbar
//! - `world`: isolated environment for running the `regview` binary

pub mod fixtures;
pub mod recorder;
pub mod world;

pub use recorder::CriteriaRecorder;
pub use world::{CliResult, TestWorld};
