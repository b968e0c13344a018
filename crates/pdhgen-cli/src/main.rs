//! pdhgen CLI
//!
//! Regenerates the PDH definitions module from the Windows SDK headers.

use anyhow::Result;
use clap::Parser;
use pdhgen_codegen::generate;
use pdhgen_core::config::DEFAULT_OUTPUT;
use pdhgen_core::GeneratorConfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pdhgen")]
#[command(author, version, about = "Generate PDH error-code definitions", long_about = None)]
struct Cli {
    /// Output file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = GeneratorConfig::with_output(cli.output);

    let summary = generate(&config)?;
    info!(
        "Generated {} PDH error codes into {}",
        summary.definitions,
        summary.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_output() {
        let cli = Cli::try_parse_from(["pdhgen"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("defs_pdh_windows.rs"));
    }

    #[test]
    fn test_output_flag() {
        let cli = Cli::try_parse_from(["pdhgen", "--output", "src/pdh/defs.rs"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("src/pdh/defs.rs"));
    }

    #[test]
    fn test_output_has_no_short_form() {
        assert!(Cli::try_parse_from(["pdhgen", "-o", "defs.rs"]).is_err());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["pdhgen", "extra"]).is_err());
    }
}
