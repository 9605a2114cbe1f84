//! # tx-config
//!
//! Command-line generator for the gnoweb CSS engine configuration.
//!
//! ## Usage
//!
//! ```text
//! tx-config emit                   # print tx.config.js to stdout
//! tx-config emit --out             # write ./tx.config.js
//! tx-config emit --format json --out theme.json
//! tx-config check                  # validate and summarize
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::constants::{ResolverConfig, DEFAULT_OUTPUT_FILE};
use gnoweb_tokens::{ConfigurationRoot, TokenResolver};

#[derive(Debug, Parser)]
#[command(name = "tx-config")]
#[command(about = "Generate the gnoweb CSS engine configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the configuration to stdout or a file
    Emit {
        #[arg(long, value_enum, default_value_t = OutputFormat::Js)]
        format: OutputFormat,

        /// Destination file; `--out` alone writes tx.config.js
        #[arg(long, short, num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_FILE)]
        out: Option<PathBuf>,

        /// Root font size in pixels
        #[arg(long)]
        base_font_size: Option<f64>,
    },
    /// Validate the configuration and print a summary
    Check {
        /// Root font size in pixels
        #[arg(long)]
        base_font_size: Option<f64>,
    },
}

/// Rendering of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ES module with a default export
    Js,
    /// Plain JSON document
    Json,
}

/// Resolves and validates the configuration.
pub fn resolve(base_font_size: Option<f64>) -> Result<ConfigurationRoot> {
    let config = match base_font_size {
        Some(size) => ResolverConfig::new(size).context("invalid --base-font-size")?,
        None => ResolverConfig::default(),
    };
    let root = TokenResolver::new(&config).assemble_configuration();
    root.validate().context("theme configuration failed validation")?;
    Ok(root)
}

/// Renders the configuration in `format`.
pub fn render(root: &ConfigurationRoot, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Js => root.to_module_source()?,
        OutputFormat::Json => {
            let mut json = root.to_json()?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// One-line description of a validated configuration.
pub fn summary(root: &ConfigurationRoot) -> String {
    format!(
        "configuration valid: {} content globs, {} screens, {} palettes, {} font families, {} font sizes, {} safelisted classes",
        root.content.len(),
        root.theme.screens.len(),
        root.theme.colors.len(),
        root.theme.font_family.len(),
        root.theme.font_size.len(),
        root.safelist.len()
    )
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Executes a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Emit {
            format,
            out,
            base_font_size,
        } => {
            let root = resolve(base_font_size)?;
            let rendered = render(&root, format)?;
            match out {
                Some(path) => write_output(&path, &rendered)?,
                None => print!("{rendered}"),
            }
        }
        Commands::Check { base_font_size } => {
            let root = resolve(base_font_size)?;
            println!("{}", summary(&root));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
