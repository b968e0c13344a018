//! pdhgen Codegen
//!
//! Renders the PDH definitions module, writes it to disk and hands it to
//! `rustfmt`.
//!
//! ## Modules
//!
//! - `template` - fixed module template and the generated error-code section
//! - `writer` - destination file creation
//! - `formatter` - in-place source formatting
//! - `pipeline` - runs expand, scan, render, write and format in order

pub mod formatter;
pub mod pipeline;
pub mod template;
pub mod writer;

pub use formatter::{Rustfmt, SourceFormatter};
pub use pipeline::Pipeline;
pub use template::render;
pub use writer::write_output;

use pdhgen_core::{GenerationSummary, GeneratorConfig, PipelineError};

/// Run the whole generator with the system preprocessor and `rustfmt`
pub fn generate(config: &GeneratorConfig) -> Result<GenerationSummary, PipelineError> {
    Pipeline::from_config(config)?.run(&config.output)
}
