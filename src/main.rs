//! SQL string codec command-line entry point.
//!
//! Reads text from stdin, encodes or decodes it for a SQL string literal and
//! writes the result to stdout. The dialect and immune characters come from
//! the environment (see [`CodecConfig::from_env`]).
//!
//! ```bash
//! echo -n "O'Brien" | SQL_CODEC_MODE=ansi sql-codec encode
//! ```

use anyhow::{bail, Context, Result};
use sql_string_codec::{Codec, CodecConfig};
use std::io::{Read, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: sql-codec <encode|decode>";

fn main() -> Result<()> {
    // Initialize logging to stderr (stdout carries codec output)
    init_logging();

    let command = std::env::args().nth(1).unwrap_or_default();
    if command != "encode" && command != "decode" {
        bail!("{USAGE}");
    }

    let config = CodecConfig::from_env().map_err(|e| match e.suggestion() {
        Some(hint) => anyhow::anyhow!("{e} ({hint})"),
        None => anyhow::anyhow!(e),
    })?;
    let codec = config.build_codec();
    info!(mode = %codec.mode(), immune = config.immune.len(), "Configuration loaded");

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let output = if command == "encode" {
        codec.encode(&config.immune, &input)
    } else {
        codec.decode(&input)
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}

/// Initialize tracing subscriber with stderr output.
fn init_logging() {
    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn,sql_string_codec=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
