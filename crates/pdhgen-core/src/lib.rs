//! pdhgen Core
//!
//! Core types, configuration and errors shared by the pdhgen crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::GeneratorConfig;
pub use error::{Error, PipelineError, Result};
pub use types::*;
