//! Errors raised by the block driver.

use thiserror::Error;

/// Failures when driving the cipher over byte buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Ciphertext length is not a whole number of blocks.
    #[error("ciphertext length {len} is not a multiple of 16 bytes")]
    UnalignedCiphertext {
        /// Length of the rejected buffer.
        len: usize,
    },
}
