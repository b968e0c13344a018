//! pdhgen Parser
//!
//! Turns the Windows SDK headers into an ordered list of PDH error-code
//! names by running them through a C preprocessor and scanning its
//! `#define` trace.
//!
//! ## Modules
//!
//! - `preprocessor` - include block, compiler invocation and `#define` scanning

pub mod preprocessor;

pub use preprocessor::{
    match_definition, scan_definitions, GccExpander, IncludeSet, MacroExpander,
};
