//! Include Directive Set
//!
//! The translation unit fed to the preprocessor on stdin.

/// Headers pulled in to discover the PDH status codes
const PDH_HEADERS: &[&str] = &["pdhmsg.h"];

/// Fixed set of `#include <...>` directives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeSet {
    headers: Vec<&'static str>,
}

impl IncludeSet {
    /// The headers declaring the PDH status codes
    pub fn pdh() -> Self {
        Self {
            headers: PDH_HEADERS.to_vec(),
        }
    }

    /// Render as C source, one directive per line
    pub fn to_source(&self) -> String {
        let mut source = String::from("\n");
        for header in &self.headers {
            source.push_str("#include <");
            source.push_str(header);
            source.push_str(">\n");
        }
        source
    }
}

impl Default for IncludeSet {
    fn default() -> Self {
        Self::pdh()
    }
}
