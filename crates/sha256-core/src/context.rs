//! Streaming SHA-256 context.

use std::io;

use crate::buffer::BlockBuffer;
use crate::compress::{compress, H0};
use crate::digest::Digest;
use crate::BLOCK_SIZE;

/// Offset of the 64-bit length field inside the final block.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

const BLOCK_BITS: u64 = (BLOCK_SIZE as u64) * 8;

/// Incremental SHA-256 hasher.
///
/// Input may arrive in any chunking; the digest depends only on the
/// concatenated bytes. A context is owned by one caller and is not meant to
/// be shared between threads without external locking.
#[derive(Clone, Debug)]
pub struct Sha256 {
    /// Bits folded into `state` so far; excludes bytes still pending.
    total_bits: u64,
    pending: BlockBuffer,
    state: [u32; 8],
}

impl Sha256 {
    /// Creates a context initialised with the SHA-256 IV.
    pub const fn new() -> Self {
        Self {
            total_bits: 0,
            pending: BlockBuffer::new(),
            state: H0,
        }
    }

    /// Returns the context to its freshly created state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of message bits already compressed. Always a multiple of 512.
    #[inline]
    pub fn total_bits_processed(&self) -> u64 {
        self.total_bits
    }

    /// Number of buffered bytes awaiting a full block (always below 64).
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn compress_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        compress(&mut self.state, block);
        self.total_bits = self.total_bits.wrapping_add(BLOCK_BITS);
    }

    fn compress_pending(&mut self) {
        compress(&mut self.state, self.pending.as_block());
        self.total_bits = self.total_bits.wrapping_add(BLOCK_BITS);
        self.pending.clear();
    }

    /// Absorbs `data`.
    pub fn update(&mut self, mut data: &[u8]) {
        if !self.pending.is_empty() {
            data = self.pending.fill(data);
            if !self.pending.is_full() {
                return;
            }
            self.compress_pending();
        }

        while let Some((block, rest)) = data.split_first_chunk::<BLOCK_SIZE>() {
            self.compress_block(block);
            data = rest;
        }

        self.pending.fill(data);
    }

    /// Absorbs the UTF-8 bytes of `text`.
    #[inline]
    pub fn update_str(&mut self, text: &str) {
        self.update(text.as_bytes());
    }

    /// Pads, compresses the tail and returns the digest.
    pub fn finalize(mut self) -> Digest {
        self.finish()
    }

    /// Like [`Sha256::finalize`] but leaves the context reset for reuse.
    pub fn finalize_reset(&mut self) -> Digest {
        let digest = self.finish();
        self.reset();
        digest
    }

    fn finish(&mut self) -> Digest {
        let message_bits = self
            .total_bits
            .wrapping_add((self.pending.len() as u64).wrapping_mul(8));

        self.pending.push(0x80);
        if self.pending.len() > LENGTH_OFFSET {
            // No room left for the length field in this block.
            self.pending.zero_fill_to(BLOCK_SIZE);
            compress(&mut self.state, self.pending.as_block());
            self.pending.clear();
        }
        self.pending.zero_fill_to(LENGTH_OFFSET);
        self.pending.finish_with(&message_bits.to_be_bytes());
        compress(&mut self.state, self.pending.as_block());
        self.pending.clear();

        Digest::from_words(self.state)
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use sha2::Digest as _;

    fn oracle(data: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&sha2::Sha256::digest(data));
        out
    }

    fn hash(data: &[u8]) -> Digest {
        let mut ctx = Sha256::new();
        ctx.update(data);
        ctx.finalize()
    }

    #[test]
    fn counters_track_whole_blocks_only() {
        let mut ctx = Sha256::new();
        ctx.update(&[0u8; 100]);
        assert_eq!(ctx.total_bits_processed(), 512);
        assert_eq!(ctx.pending_len(), 36);

        ctx.update(&[0u8; 28]);
        assert_eq!(ctx.total_bits_processed(), 1024);
        assert_eq!(ctx.pending_len(), 0);

        ctx.update(&[0u8; 200]);
        assert_eq!(ctx.total_bits_processed(), 1024 + 3 * 512);
        assert_eq!(ctx.pending_len(), 8);
    }

    #[test]
    fn byte_at_a_time_fills_exact_block() {
        let mut ctx = Sha256::new();
        for i in 0..BLOCK_SIZE {
            assert_eq!(ctx.pending_len(), i);
            assert_eq!(ctx.total_bits_processed(), 0);
            ctx.update(&[i as u8]);
        }
        assert_eq!(ctx.pending_len(), 0);
        assert_eq!(ctx.total_bits_processed(), 512);
    }

    #[test]
    fn empty_updates_are_no_ops() {
        let mut ctx = Sha256::new();
        ctx.update(&[]);
        ctx.update(b"abc");
        ctx.update(&[]);
        assert_eq!(ctx.finalize(), hash(b"abc"));
    }

    #[test]
    fn padding_boundaries_match_oracle() {
        // 55 pending bytes fit the length in one block; 56..=63 need a second.
        for len in [0usize, 1, 54, 55, 56, 57, 62, 63, 64, 65, 118, 119, 120, 127, 128] {
            let data: Vec<u8> = (0..len).map(|i| (i * 31 + 7) as u8).collect();
            assert_eq!(hash(&data).to_bytes(), oracle(&data), "length {len}");
        }
    }

    #[test]
    fn random_chunking_matches_single_update() {
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        for _ in 0..50 {
            let len = rng.gen_range(0..1000);
            let mut data = vec![0u8; len];
            rng.fill_bytes(&mut data);

            let mut ctx = Sha256::new();
            let mut rest = &data[..];
            while !rest.is_empty() {
                let take = rng.gen_range(1..=rest.len().min(150));
                let (head, tail) = rest.split_at(take);
                ctx.update(head);
                rest = tail;
            }
            assert_eq!(ctx.finalize(), hash(&data));
            assert_eq!(hash(&data).to_bytes(), oracle(&data));
        }
    }

    #[test]
    fn finalize_reset_allows_reuse() {
        let mut ctx = Sha256::new();
        ctx.update_str("first message");
        let first = ctx.finalize_reset();
        assert_eq!(ctx.total_bits_processed(), 0);
        assert_eq!(ctx.pending_len(), 0);

        ctx.update_str("abc");
        assert_eq!(ctx.finalize_reset(), hash(b"abc"));
        assert_eq!(first, hash(b"first message"));
    }

    #[test]
    fn cloned_prefix_forks_independently() {
        let mut base = Sha256::new();
        base.update(b"shared prefix that spans more than one block of input data, really");
        let mut left = base.clone();
        let mut right = base;
        left.update(b"-left");
        right.update(b"-right");
        assert_ne!(left.clone().finalize(), right.clone().finalize());
        assert_eq!(
            left.finalize(),
            hash(b"shared prefix that spans more than one block of input data, really-left")
        );
    }

    #[test]
    fn io_write_streams_reader() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        let mut ctx = Sha256::new();
        let copied = io::copy(&mut &data[..], &mut ctx).expect("copy into hasher");
        assert_eq!(copied, data.len() as u64);
        assert_eq!(ctx.finalize(), hash(&data));
    }
}
