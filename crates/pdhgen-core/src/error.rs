//! Error types for pdhgen

use std::path::PathBuf;
use thiserror::Error;

use crate::types::Stage;

/// pdhgen error type
#[derive(Error, Debug)]
pub enum Error {
    /// An external tool was missing, could not be started, or exited non-zero
    #[error("{tool}: {reason}")]
    ToolInvocation { tool: String, reason: String },

    #[error("failed to read preprocessor output: {0}")]
    StreamRead(#[source] std::io::Error),

    #[error("failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendering defect; a correct template never produces this
    #[error("template error: {0}")]
    Template(String),
}

impl Error {
    pub fn tool(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::ToolInvocation {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileWrite {
            path: path.into(),
            source,
        }
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Template(err.to_string())
    }
}

/// Result type alias for pdhgen
pub type Result<T> = std::result::Result<T, Error>;

/// A failure tagged with the pipeline stage it happened in
#[derive(Error, Debug)]
#[error("{stage} failed")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: Error,
}

impl PipelineError {
    pub fn new(stage: Stage, source: Error) -> Self {
        Self { stage, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_message() {
        let err = Error::tool("gcc", "exited with status 1");
        assert_eq!(err.to_string(), "gcc: exited with status 1");
    }

    #[test]
    fn test_pipeline_error_names_stage() {
        let err = PipelineError::new(
            Stage::Formatting,
            Error::tool("rustfmt", "not found"),
        );
        assert_eq!(err.to_string(), "formatting failed");

        let cause = std::error::Error::source(&err).unwrap();
        assert_eq!(cause.to_string(), "rustfmt: not found");
    }

    #[test]
    fn test_file_write_error_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::file_write("/tmp/out.rs", io);
        assert!(err.to_string().contains("/tmp/out.rs"));
    }
}
