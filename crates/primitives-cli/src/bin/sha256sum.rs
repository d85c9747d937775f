//! Prints the SHA-256 digest of a file, or of standard input.

#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use primitives_cli::{digest_line, hash_reader, init_tracing, READ_BUFFER_SIZE, STDIN_NAME};
use tracing::debug;

#[derive(Parser)]
#[command(name = "sha256sum", version, about = "Print SHA-256 digests")]
struct Cli {
    /// File to hash; standard input is read when omitted.
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let line = match &cli.path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open file '{}'", path.display()))?;
            let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
            let (digest, bytes) =
                hash_reader(reader).with_context(|| format!("read {}", path.display()))?;
            debug!(path = %path.display(), bytes, "hashed file");
            digest_line(&digest, &path.display().to_string())
        }
        None => {
            let stdin = io::stdin().lock();
            let reader = BufReader::with_capacity(READ_BUFFER_SIZE, stdin);
            let (digest, bytes) = hash_reader(reader).context("read standard input")?;
            debug!(bytes, "hashed standard input");
            digest_line(&digest, STDIN_NAME)
        }
    };

    let mut out = io::stdout().lock();
    writeln!(out, "{line}").context("write digest")?;
    Ok(())
}
