//! Definition Scanner
//!
//! Picks PDH macro names out of `-dD` preprocessor output.

use once_cell::sync::Lazy;
use pdhgen_core::{DefinitionList, Error, Result};
use regex::Regex;
use std::io::BufRead;
use tracing::{debug, warn};

/// Prefix shared by every PDH status macro
pub const DEFINITION_PREFIX: &str = "PDH_";

// ASCII word characters only; the name is emitted verbatim as a Rust identifier
static PDH_DEFINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#define (PDH_[A-Za-z0-9_]+)").unwrap());

/// Return the macro name if `line` is a `#define` of a PDH name
pub fn match_definition(line: &str) -> Option<&str> {
    PDH_DEFINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Collect PDH macro names from `reader`, in stream order.
///
/// Non-matching lines are skipped. Lines are decoded lossily so an odd
/// byte in an unrelated line does not abort the scan.
pub fn scan_definitions<R: BufRead>(mut reader: R) -> Result<DefinitionList> {
    let mut names = Vec::new();
    let mut buf = Vec::new();
    let mut lines = 0usize;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(Error::StreamRead)?;
        if read == 0 {
            break;
        }
        lines += 1;

        let line = String::from_utf8_lossy(&buf);
        if let Some(name) = match_definition(&line) {
            names.push(name.to_string());
        }
    }

    debug!("Scanned {} lines, {} PDH definitions", lines, names.len());
    if names.is_empty() {
        warn!("No {}* definitions found in preprocessor output", DEFINITION_PREFIX);
    }

    Ok(names)
}
