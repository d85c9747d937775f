//! Bounded pending-block buffer.

use crate::{Block, BLOCK_SIZE};

/// Holds at most one block of input that has not been compressed yet.
#[derive(Clone, Debug)]
pub(crate) struct BlockBuffer {
    data: Block,
    len: usize,
}

impl BlockBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            data: [0u8; BLOCK_SIZE],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len == BLOCK_SIZE
    }

    /// Copies as much of `input` as fits and returns the part that did not.
    pub(crate) fn fill<'a>(&mut self, input: &'a [u8]) -> &'a [u8] {
        let take = (BLOCK_SIZE - self.len).min(input.len());
        let (head, rest) = input.split_at(take);
        self.data[self.len..self.len + take].copy_from_slice(head);
        self.len += take;
        rest
    }

    /// Appends one byte; the buffer must not be full.
    pub(crate) fn push(&mut self, byte: u8) {
        debug_assert!(!self.is_full(), "push into a full block buffer");
        self.data[self.len] = byte;
        self.len += 1;
    }

    /// Zeroes the bytes from the current length up to `end` and extends to it.
    pub(crate) fn zero_fill_to(&mut self, end: usize) {
        debug_assert!(end >= self.len && end <= BLOCK_SIZE);
        self.data[self.len..end].fill(0);
        self.len = end;
    }

    /// Writes `tail` into the last bytes of the block, completing it.
    pub(crate) fn finish_with(&mut self, tail: &[u8]) {
        let start = BLOCK_SIZE - tail.len();
        debug_assert_eq!(self.len, start);
        self.data[start..].copy_from_slice(tail);
        self.len = BLOCK_SIZE;
    }

    /// The underlying block; only meaningful once [`BlockBuffer::is_full`].
    #[inline]
    pub(crate) fn as_block(&self) -> &Block {
        &self.data
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for BlockBuffer {
    fn default() -> Self {
        Self::new()
    }
}
