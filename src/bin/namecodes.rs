//! Namecodes command-line binary.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `NAMECODES_SCHEME`: scheme version (default: v.0.1.0)
//! - `NAMECODES_FORMAT`: "markdown" or "json" (default: markdown)
//! - `RUST_LOG`: log level filter (default: namecodes=warn)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! Logs go to stderr so stdout carries only command output.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --features cli --bin namecodes -- codes show tree
//! cargo run --features cli --bin namecodes -- filename decode aaa100001-1536.1792.48.0.test.time
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nautilus_namecodes::cli::{execute, Cli};

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "namecodes=warn,nautilus_namecodes=warn".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = execute(&cli)?;
    println!("{output}");

    Ok(())
}
