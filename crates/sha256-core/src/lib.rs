//! SHA-256 (FIPS 180-4) as a streaming hasher.
//!
//! Feed bytes with [`Sha256::update`] in any chunking and call
//! [`Sha256::finalize`] for the [`Digest`]; [`sha256`] and [`sha256_hex`]
//! cover the one-shot case.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod buffer;
pub mod compress;
mod context;
mod digest;
pub mod schedule;

pub use crate::context::Sha256;
pub use crate::digest::Digest;

/// Bytes per message block.
pub const BLOCK_SIZE: usize = 64;

/// Bytes in a digest.
pub const DIGEST_SIZE: usize = 32;

/// One message block.
pub type Block = [u8; BLOCK_SIZE];

/// Hashes `data` in one call.
pub fn sha256(data: &[u8]) -> Digest {
    let mut ctx = Sha256::new();
    ctx.update(data);
    ctx.finalize()
}

/// Hashes `data` and returns the 64-character lowercase hex digest.
pub fn sha256_hex(data: &[u8]) -> String {
    sha256(data).to_hex()
}
