//! Message schedule expansion.

use crate::{Block, BLOCK_SIZE};

/// Words in an expanded schedule (one per compression step).
pub const SCHEDULE_LEN: usize = 64;

const BLOCK_WORDS: usize = BLOCK_SIZE / 4;

/// `σ0(x) = ROTR^7(x) ^ ROTR^18(x) ^ SHR^3(x)`
#[inline]
pub const fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// `σ1(x) = ROTR^17(x) ^ ROTR^19(x) ^ SHR^10(x)`
#[inline]
pub const fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Unpacks a block into 16 big-endian words and extends them to 64.
pub fn expand(block: &Block) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for i in BLOCK_WORDS..SCHEDULE_LEN {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }
    w
}
