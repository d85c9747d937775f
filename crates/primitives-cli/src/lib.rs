//! Shared plumbing for the `sha256sum` and `aes128` binaries.

#![forbid(unsafe_code)]

use std::io::{self, Read};

use aes_core::{Aes128Key, KEY_SIZE};
use anyhow::{bail, Context, Result};
use sha256_core::{Digest, Sha256};
use tracing_subscriber::EnvFilter;

/// Capacity of the buffered reader placed in front of files and stdin.
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Name printed in place of a path when hashing standard input.
pub const STDIN_NAME: &str = "-";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is left for program output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Streams `reader` to exhaustion through a fresh hasher.
///
/// Returns the digest and the number of bytes consumed.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<(Digest, u64)> {
    let mut ctx = Sha256::new();
    let bytes = io::copy(&mut reader, &mut ctx)?;
    Ok((ctx.finalize(), bytes))
}

/// Formats one output line: digest, two spaces, name.
pub fn digest_line(digest: &Digest, name: &str) -> String {
    format!("{digest}  {name}")
}

/// Parses a 32-character hex string into an AES-128 key.
pub fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != KEY_SIZE {
        bail!("AES-128 key must be 16 bytes (32 hex characters)");
    }
    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&bytes);
    Ok(Aes128Key::from(key))
}
