//! GCC Preprocessor Integration
//!
//! Wraps the system C compiler driver in preprocess-only mode with the
//! `#define` trace enabled (`-E -dD`), reading the translation unit from
//! stdin.

use pdhgen_core::config::PreprocessorConfig;
use pdhgen_core::{Error, Result};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

/// Expands C macros in a source text
pub trait MacroExpander {
    /// Preprocess `source` and return the raw expanded output
    fn expand(&self, source: &str) -> Result<Vec<u8>>;
}

/// C compiler driver used as the macro expander
#[derive(Debug, Clone)]
pub struct GccExpander {
    /// Path to the compiler driver
    program: PathBuf,
    /// Arguments appended after the fixed flags
    extra_args: Vec<String>,
}

impl GccExpander {
    /// Create an expander, auto-detecting the compiler driver
    pub fn new() -> Result<Self> {
        let program = Self::find_compiler()?;
        debug!("Found C preprocessor at: {:?}", program);
        Ok(Self::with_path(program))
    }

    /// Create an expander with a specific compiler driver
    pub fn with_path(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
        }
    }

    /// Create an expander from configuration
    pub fn from_config(config: &PreprocessorConfig) -> Result<Self> {
        let mut expander = match &config.program {
            Some(program) => Self::with_path(program.clone()),
            None => Self::new()?,
        };
        expander.extra_args = config.extra_args.clone();
        Ok(expander)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Find a compiler driver on the search path
    fn find_compiler() -> Result<PathBuf> {
        let candidates = [
            "gcc",
            "x86_64-w64-mingw32-gcc", // cross toolchain carrying the Windows SDK headers
            "clang",
        ];

        for candidate in candidates {
            if let Ok(output) = Command::new(candidate).arg("--version").output() {
                if output.status.success() {
                    return Ok(PathBuf::from(candidate));
                }
            }
        }

        Err(Error::tool(
            "cc",
            format!("no C preprocessor found (tried {})", candidates.join(", ")),
        ))
    }

    /// Build compiler command line arguments
    fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            "-E".to_string(),  // Preprocess only
            "-dD".to_string(), // Keep #define directives in the output
        ];
        args.extend(self.extra_args.iter().cloned());
        args.push("-".to_string()); // Read from stdin
        args
    }

    fn tool_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl MacroExpander for GccExpander {
    fn expand(&self, source: &str) -> Result<Vec<u8>> {
        let args = self.build_args();
        debug!("Preprocessing with {:?} {:?}", self.program, args);

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::tool(self.tool_name(), "not found on PATH"),
                _ => Error::tool(self.tool_name(), format!("failed to start: {}", e)),
            })?;

        // Feed stdin from its own thread so a full stdout pipe cannot
        // block the write; the handle drops at the end, closing stdin
        let input = source.as_bytes().to_vec();
        let writer = child
            .stdin
            .take()
            .map(|mut stdin| thread::spawn(move || stdin.write_all(&input)));

        let output = child
            .wait_with_output()
            .map_err(|e| Error::tool(self.tool_name(), format!("failed to wait: {}", e)))?;

        let written = match writer.map(|handle| handle.join()) {
            Some(Ok(result)) => result,
            Some(Err(_)) => return Err(Error::tool(self.tool_name(), "stdin writer panicked")),
            None => Ok(()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::tool(
                self.tool_name(),
                format!("exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        // A compiler that quit early shows up as BrokenPipe; its exit status says why
        match written {
            Err(e) if e.kind() != ErrorKind::BrokenPipe => {
                return Err(Error::tool(
                    self.tool_name(),
                    format!("failed to write stdin: {}", e),
                ))
            }
            _ => {}
        }

        debug!("Preprocessor produced {} bytes", output.stdout.len());
        Ok(output.stdout)
    }
}
