//! Command-line interface.
//!
//! ## Commands
//!
//! - `namecodes codes show <tree|blocks|codes|stub>` - render the catalog
//! - `namecodes codes lookup <codepoint>` - resolve one codepoint
//! - `namecodes filename encode <json>` - encode a filename description
//! - `namecodes filename decode <text>` - decode a filename
//!
//! ## Configuration
//!
//! - `NAMECODES_SCHEME` - scheme version (default: `v.0.1.0`)
//! - `NAMECODES_FORMAT` - `markdown` or `json` (default: `markdown`)

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::render;
use crate::scheme::SchemeVersion;
use crate::types::Filename;

/// Namecode catalog and filename tool.
#[derive(Debug, Parser)]
#[command(name = "namecodes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scheme version to use.
    #[arg(
        long,
        global = true,
        env = "NAMECODES_SCHEME",
        default_value_t = SchemeVersion::default()
    )]
    pub scheme: SchemeVersion,

    /// Output format.
    #[arg(
        long,
        global = true,
        env = "NAMECODES_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Markdown
    )]
    pub format: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect the catalog.
    #[command(subcommand)]
    Codes(CodesCommand),
    /// Encode or decode filenames.
    #[command(subcommand)]
    Filename(FilenameCommand),
}

/// Catalog subcommands.
#[derive(Debug, Subcommand)]
pub enum CodesCommand {
    /// Render the catalog.
    Show(ShowArgs),
    /// Resolve a codepoint to its plane, block, section and label.
    Lookup {
        /// Codepoint, decimal or `0x` hex.
        codepoint: String,
    },
}

/// Arguments for `codes show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Which view to render.
    #[arg(value_enum, default_value_t = View::Tree)]
    pub view: View,
}

/// Catalog views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Box-drawing tree of planes, blocks and sections.
    Tree,
    /// Every block with its code table.
    Blocks,
    /// One flat code table.
    Codes,
    /// Names and ranges only.
    Stub,
}

/// Filename subcommands.
#[derive(Debug, Subcommand)]
pub enum FilenameCommand {
    /// Encode a JSON filename description.
    Encode {
        /// Filename as JSON.
        json: String,
    },
    /// Decode a filename into JSON.
    Decode {
        /// Encoded filename.
        text: String,
    },
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown, or plain text where Markdown does not apply.
    #[default]
    Markdown,
    /// Pretty JSON.
    Json,
}

fn parse_codepoint(text: &str) -> Result<u32> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.with_context(|| format!("Invalid codepoint {text:?}"))
}

/// Run a parsed command and return what it prints.
///
/// # Errors
///
/// Returns an error if the catalog fails to build, input is malformed, or
/// encoding or decoding fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let catalog = cli
        .scheme
        .catalog()
        .with_context(|| format!("Failed to build catalog {}", cli.scheme))?;

    tracing::debug!(
        scheme_version = %cli.scheme,
        fingerprint = %catalog.fingerprint(),
        "Catalog ready"
    );

    let output = match &cli.command {
        Commands::Codes(CodesCommand::Show(args)) => match (args.view, cli.format) {
            (View::Tree, _) => render::tree(catalog),
            (View::Blocks, OutputFormat::Markdown) => render::blocks_markdown(catalog),
            (View::Codes, OutputFormat::Markdown) => render::codes_markdown(catalog),
            (View::Blocks, OutputFormat::Json) => render::json(catalog)?,
            (View::Codes, OutputFormat::Json) => render::codes_json(catalog)?,
            (View::Stub, _) => render::json(&catalog.stub())?,
        },
        Commands::Codes(CodesCommand::Lookup { codepoint }) => {
            let lookup = catalog.resolve(parse_codepoint(codepoint)?)?;
            match cli.format {
                OutputFormat::Markdown => lookup.to_string(),
                OutputFormat::Json => render::json(&lookup)?,
            }
        }
        Commands::Filename(FilenameCommand::Encode { json }) => {
            let filename: Filename =
                serde_json::from_str(json).context("Invalid filename description")?;
            filename.encode(catalog)?
        }
        Commands::Filename(FilenameCommand::Decode { text }) => {
            let filename = Filename::decode(catalog, text)
                .with_context(|| format!("Failed to decode {text:?}"))?;
            render::json(&filename)?
        }
    };

    Ok(output)
}
