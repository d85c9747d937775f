//! AES-128 built from first principles.
//!
//! This crate provides:
//! - GF(2^8) arithmetic and an S-box derived from field inversion.
//! - Key schedule for AES-128.
//! - Single-block encryption and decryption.
//! - An ECB driver over arbitrary-length buffers.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod ecb;
mod error;
pub mod gf;
mod key;
pub mod round;
mod sbox;

pub use crate::block::{state_index, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::ecb::{decrypt, encrypt, padded_len, Aes128};
pub use crate::error::Error;
pub use crate::key::{Aes128Key, KeySchedule, KEY_SCHEDULE_SIZE, KEY_SIZE, ROUNDS};
pub use crate::sbox::{derive_inv_sbox, derive_sbox, inv_sbox, sbox};
