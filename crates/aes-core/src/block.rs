//! Block representation helpers.

/// Bytes in one AES block.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
///
/// The bytes are kept in state order: byte `i` sits at row `i % 4`, column
/// `i / 4`. FIPS-197 feeds input bytes into the state in that same order, so a
/// caller's plaintext maps onto the state without reshuffling.
pub type Block = [u8; BLOCK_SIZE];

/// Position of `(row, col)` inside a [`Block`].
#[inline]
pub const fn state_index(row: usize, col: usize) -> usize {
    col * 4 + row
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
