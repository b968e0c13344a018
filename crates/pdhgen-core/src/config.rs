//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default destination of the generated module
pub const DEFAULT_OUTPUT: &str = "defs_pdh_windows.rs";

/// Generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Destination of the generated module
    pub output: PathBuf,

    /// Preprocessor configuration
    pub preprocessor: PreprocessorConfig,

    /// Formatter configuration
    pub formatter: FormatterConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            preprocessor: PreprocessorConfig::default(),
            formatter: FormatterConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Default configuration writing to `output`
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }
}

/// Preprocessor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreprocessorConfig {
    /// C compiler driver to run; auto-detected when unset
    pub program: Option<PathBuf>,

    /// Arguments appended after the fixed `-E -dD` flags
    pub extra_args: Vec<String>,
}

/// Formatter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Formatter executable
    pub program: PathBuf,

    /// Rust edition passed to the formatter
    pub edition: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("rustfmt"),
            edition: "2021".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output, PathBuf::from("defs_pdh_windows.rs"));
        assert!(config.preprocessor.program.is_none());
        assert_eq!(config.formatter.program, PathBuf::from("rustfmt"));
    }

    #[test]
    fn test_with_output_keeps_tool_defaults() {
        let config = GeneratorConfig::with_output("out/pdh.rs");
        assert_eq!(config.output, PathBuf::from("out/pdh.rs"));
        assert_eq!(config.formatter.edition, "2021");
    }
}
