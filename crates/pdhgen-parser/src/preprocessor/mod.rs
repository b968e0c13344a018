//! C Preprocessor Integration
//!
//! Runs the system C compiler in preprocess-only mode over a fixed include
//! block and recovers the `#define` names it traces.

pub mod gcc;
pub mod includes;
pub mod scanner;

pub use gcc::{GccExpander, MacroExpander};
pub use includes::IncludeSet;
pub use scanner::{match_definition, scan_definitions, DEFINITION_PREFIX};
