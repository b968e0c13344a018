//! Source formatting via `rustfmt`.

use pdhgen_core::config::FormatterConfig;
use pdhgen_core::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Rewrites a source file in place in its canonical style
pub trait SourceFormatter {
    fn format_in_place(&self, path: &Path) -> Result<()>;
}

/// `rustfmt` invoked on a single file
#[derive(Debug, Clone)]
pub struct Rustfmt {
    program: PathBuf,
    edition: String,
}

impl Rustfmt {
    pub fn from_config(config: &FormatterConfig) -> Self {
        Self {
            program: config.program.clone(),
            edition: config.edition.clone(),
        }
    }

    fn build_args(&self, path: &Path) -> Vec<String> {
        vec![
            format!("--edition={}", self.edition),
            path.display().to_string(),
        ]
    }

    fn tool_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl SourceFormatter for Rustfmt {
    fn format_in_place(&self, path: &Path) -> Result<()> {
        let args = self.build_args(path);
        debug!("Formatting with {:?} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::tool(self.tool_name(), "not found on PATH"),
                _ => Error::tool(self.tool_name(), format!("failed to start: {}", e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::tool(
                self.tool_name(),
                format!("exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args() {
        let rustfmt = Rustfmt::from_config(&FormatterConfig::default());
        let args = rustfmt.build_args(Path::new("out/defs_pdh_windows.rs"));

        assert_eq!(args, vec!["--edition=2021", "out/defs_pdh_windows.rs"]);
    }

    #[test]
    fn test_edition_from_config() {
        let config = FormatterConfig {
            program: PathBuf::from("rustfmt"),
            edition: "2024".to_string(),
        };
        let args = Rustfmt::from_config(&config).build_args(Path::new("a.rs"));

        assert_eq!(args[0], "--edition=2024");
    }

    #[test]
    fn test_missing_formatter() {
        let config = FormatterConfig {
            program: PathBuf::from("/nonexistent/pdhgen-rustfmt"),
            ..FormatterConfig::default()
        };
        let err = Rustfmt::from_config(&config)
            .format_in_place(Path::new("defs_pdh_windows.rs"))
            .unwrap_err();

        assert!(matches!(err, Error::ToolInvocation { .. }));
    }
}
