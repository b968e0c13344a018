//! Generator Pipeline
//!
//! Runs the five stages once, in order:
//! expanding, scanning, rendering, writing, formatting.
//! The first failure stops the run and is reported with its stage.

use pdhgen_core::{
    Error, GenerationSummary, GeneratorConfig, PipelineError, RenderParams, Stage,
};
use pdhgen_parser::{scan_definitions, GccExpander, IncludeSet, MacroExpander};
use std::path::Path;
use tracing::{debug, info};

use crate::formatter::{Rustfmt, SourceFormatter};
use crate::template::render;
use crate::writer::write_output;

/// Expander and formatter wired to the fixed include block
pub struct Pipeline<E, F> {
    expander: E,
    formatter: F,
    includes: IncludeSet,
}

impl Pipeline<GccExpander, Rustfmt> {
    /// Pipeline backed by the system C compiler and `rustfmt`
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, PipelineError> {
        let expander = GccExpander::from_config(&config.preprocessor)
            .map_err(|e| PipelineError::new(Stage::Expanding, e))?;
        debug!("Using preprocessor {:?}", expander.program());
        let formatter = Rustfmt::from_config(&config.formatter);
        Ok(Self::new(expander, formatter))
    }
}

impl<E: MacroExpander, F: SourceFormatter> Pipeline<E, F> {
    pub fn new(expander: E, formatter: F) -> Self {
        Self {
            expander,
            formatter,
            includes: IncludeSet::pdh(),
        }
    }

    /// Regenerate `output` from scratch
    pub fn run(&self, output: &Path) -> Result<GenerationSummary, PipelineError> {
        let raw = step(Stage::Expanding, || {
            self.expander.expand(&self.includes.to_source())
        })?;

        let errors = step(Stage::Scanning, || scan_definitions(raw.as_slice()))?;
        info!("Found {} PDH error codes", errors.len());

        let params = RenderParams::new(errors);
        let text = step(Stage::Rendering, || render(&params))?;

        step(Stage::Writing, || write_output(output, &text))?;
        info!("Wrote {:?}", output);

        // The writer has closed the file by the time it returns
        step(Stage::Formatting, || self.formatter.format_in_place(output))?;

        Ok(GenerationSummary {
            output: output.to_path_buf(),
            definitions: params.errors.len(),
        })
    }
}

fn step<T>(
    stage: Stage,
    f: impl FnOnce() -> Result<T, Error>,
) -> Result<T, PipelineError> {
    debug!("Stage: {}", stage);
    f().map_err(|e| PipelineError::new(stage, e))
}
