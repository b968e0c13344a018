//! Core data types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Ordered `#define` names in the order the preprocessor emitted them.
///
/// Duplicates are kept: a name traced twice is declared twice.
pub type DefinitionList = Vec<String>;

/// Everything the template needs to render the generated module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderParams {
    /// PDH error-code macro names
    pub errors: DefinitionList,
}

impl RenderParams {
    pub fn new(errors: DefinitionList) -> Self {
        Self { errors }
    }
}

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Expanding,
    Scanning,
    Rendering,
    Writing,
    Formatting,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Expanding => "expanding",
            Stage::Scanning => "scanning",
            Stage::Rendering => "rendering",
            Stage::Writing => "writing",
            Stage::Formatting => "formatting",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Path of the written artifact
    pub output: PathBuf,
    /// Number of error-code constants emitted
    pub definitions: usize,
}
