//! Key types for AES-128.

use crate::block::{Block, BLOCK_SIZE};

/// Bytes in an AES-128 key.
pub const KEY_SIZE: usize = 16;

/// Number of cipher rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// Total bytes of expanded key material.
pub const KEY_SCHEDULE_SIZE: usize = BLOCK_SIZE * (ROUNDS + 1);

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for Aes128Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Expanded round keys for AES-128, one per round plus the initial whitening key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySchedule(pub(crate) [Block; ROUNDS + 1]);

impl KeySchedule {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Returns the schedule as the flat 176-byte sequence `W[0] || ... || W[43]`.
    pub fn to_bytes(&self) -> [u8; KEY_SCHEDULE_SIZE] {
        let mut out = [0u8; KEY_SCHEDULE_SIZE];
        for (dst, round_key) in out.chunks_exact_mut(BLOCK_SIZE).zip(self.0.iter()) {
            dst.copy_from_slice(round_key);
        }
        out
    }
}

impl From<&Aes128Key> for KeySchedule {
    fn from(key: &Aes128Key) -> Self {
        crate::cipher::expand_key(key)
    }
}
