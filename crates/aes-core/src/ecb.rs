//! Buffer-level driver: independent (ECB) encryption of 16-byte blocks.
//!
//! A trailing partial plaintext block is zero-filled before it is encrypted.
//! This is not a reversible padding scheme: decryption returns the padded
//! length and callers that need exact round-trips must remember the original
//! length themselves.

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::Error;
use crate::key::{Aes128Key, KeySchedule};

/// AES-128 cipher bound to one key; the schedule is derived once in [`Aes128::new`].
#[derive(Clone, Debug)]
pub struct Aes128 {
    schedule: KeySchedule,
}

impl Aes128 {
    /// Expands `key` and returns a ready cipher.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            schedule: expand_key(key),
        }
    }

    /// Builds a cipher from an already expanded schedule.
    pub fn with_schedule(schedule: KeySchedule) -> Self {
        Self { schedule }
    }

    /// The expanded round keys.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.schedule)
    }

    /// Decrypts one block.
    #[inline]
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.schedule)
    }

    /// Encrypts `plaintext`; the output length is `plaintext.len()` rounded up to 16.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(padded_len(plaintext.len()));
        for chunk in plaintext.chunks(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block[..chunk.len()].copy_from_slice(chunk);
            out.extend_from_slice(&self.encrypt_block(&block));
        }
        out
    }

    /// Decrypts a buffer produced by [`Aes128::encrypt`].
    ///
    /// Zero bytes added to the final block during encryption are returned as-is.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(Error::UnalignedCiphertext {
                len: ciphertext.len(),
            });
        }
        let mut out = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            out.extend_from_slice(&self.decrypt_block(&block));
        }
        Ok(out)
    }
}

/// Length of the ciphertext produced for `len` bytes of plaintext.
#[inline]
pub const fn padded_len(len: usize) -> usize {
    len.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// One-shot ECB encryption of an arbitrary-length buffer.
pub fn encrypt(plaintext: &[u8], key: &Aes128Key) -> Vec<u8> {
    Aes128::new(key).encrypt(plaintext)
}

/// One-shot ECB decryption of a block-aligned buffer.
pub fn decrypt(ciphertext: &[u8], key: &Aes128Key) -> Result<Vec<u8>, Error> {
    Aes128::new(key).decrypt(ciphertext)
}
