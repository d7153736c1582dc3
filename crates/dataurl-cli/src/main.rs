//! `dataurl` CLI — build data URLs from raw bytes and extract payloads back.
//!
//! ## Usage
//!
//! ```sh
//! # Encode stdin into a base64 data URL (stdin → stdout)
//! echo -n heya | dataurl encode
//!
//! # Encode a file with an explicit media type
//! dataurl encode -i logo.svg --mime-type image/svg+xml
//!
//! # Use the percent-escaped form instead of base64
//! echo -n 'A brief note' | dataurl encode --ascii
//!
//! # Decode a data URL back to its payload bytes
//! echo 'data:;base64,aGV5YQ==' | dataurl decode
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};

use dataurl_core::{decode_string, encode, DataUrl, Encoding, MediaType};

#[derive(Parser)]
#[command(name = "dataurl", version, about = "RFC 2397 data: URL encoder/decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a data URL from raw bytes
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Media type as type/subtype (defaults to text/plain;charset=US-ASCII)
        #[arg(long)]
        mime_type: Option<String>,
        /// Percent-escape the payload instead of base64-encoding it
        #[arg(long)]
        ascii: bool,
    },
    /// Extract the payload bytes of a data URL
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            mime_type,
            ascii,
        } => {
            let data = read_input(input.as_deref())?;
            let media_type = match mime_type.as_deref() {
                Some(raw) => parse_mime_type(raw)?,
                None => MediaType::default(),
            };
            let encoding = if ascii { Encoding::Ascii } else { Encoding::Base64 };
            let url = DataUrl::new(media_type, encoding, data);
            write_output(output.as_deref(), encode(&url).as_bytes())?;
        }
        Commands::Decode { input, output } => {
            let raw = read_input(input.as_deref())?;
            let text = String::from_utf8(raw).context("Input is not valid UTF-8 text")?;
            // Tolerate the trailing newline shells and editors append.
            let url = decode_string(text.trim_end()).context("Failed to decode data URL")?;
            write_output(output.as_deref(), &url.data)?;
        }
    }

    Ok(())
}

/// Split a `type/subtype` argument into a parameterless media type.
fn parse_mime_type(raw: &str) -> Result<MediaType> {
    match raw.split_once('/') {
        Some((type_, subtype)) if !type_.is_empty() && !subtype.is_empty() => {
            Ok(MediaType::new(type_, subtype))
        }
        _ => anyhow::bail!("Invalid mime type '{}': expected type/subtype", raw),
    }
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            io::stdout()
                .write_all(content)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
