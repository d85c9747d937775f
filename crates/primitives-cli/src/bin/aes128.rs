//! Whole-file AES-128 (ECB) encryption and decryption.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use aes_core::{padded_len, Aes128};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use primitives_cli::{init_tracing, parse_key_hex};
use tracing::{info, warn};

/// AES-128 file tool.
#[derive(Parser)]
#[command(name = "aes128", version, about = "AES-128 ECB encryption of whole files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file; a trailing partial block is zero-padded.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file produced by `enc` (padding bytes are kept).
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (ciphertext, a multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            input,
            output,
        } => cmd_enc(&key_hex, &input, &output),
        Commands::Dec {
            key_hex,
            input,
            output,
        } => cmd_dec(&key_hex, &input, &output),
    }
}

fn cmd_enc(key_hex: &str, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let cipher = Aes128::new(&parse_key_hex(key_hex)?);
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if padded_len(data.len()) != data.len() {
        warn!(
            len = data.len(),
            "input is not block aligned; the last block is zero-padded"
        );
    }
    let ciphertext = cipher.encrypt(&data);
    fs::write(output_path, &ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(bytes = ciphertext.len(), "encrypted");
    Ok(())
}

fn cmd_dec(key_hex: &str, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let cipher = Aes128::new(&parse_key_hex(key_hex)?);
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let plaintext = cipher
        .decrypt(&data)
        .with_context(|| format!("decrypt {}", input_path.display()))?;
    fs::write(output_path, &plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(bytes = plaintext.len(), "decrypted");
    Ok(())
}
