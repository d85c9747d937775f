//! AES substitution boxes.
//!
//! The boxes are not transcribed from FIPS-197. `derive_sbox` computes each
//! entry from the field inverse followed by the affine transform, and the
//! lookup tables used by the round functions are filled by evaluating it at
//! compile time.

use crate::gf::inv;

const AFFINE_CONSTANT: u8 = 0x63;
const INV_AFFINE_CONSTANT: u8 = 0x05;

/// Forward substitution computed from first principles.
pub const fn derive_sbox(a: u8) -> u8 {
    let b = inv(a);
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ AFFINE_CONSTANT
}

/// Inverse substitution computed from first principles.
pub const fn derive_inv_sbox(a: u8) -> u8 {
    inv(a.rotate_left(1) ^ a.rotate_left(3) ^ a.rotate_left(6) ^ INV_AFFINE_CONSTANT)
}

const fn build_table(inverse: bool) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = if inverse {
            derive_inv_sbox(i as u8)
        } else {
            derive_sbox(i as u8)
        };
        i += 1;
    }
    table
}

static SBOX: [u8; 256] = build_table(false);
static INV_SBOX: [u8; 256] = build_table(true);

/// Forward S-box lookup.
#[inline]
pub fn sbox(a: u8) -> u8 {
    SBOX[a as usize]
}

/// Inverse S-box lookup.
#[inline]
pub fn inv_sbox(a: u8) -> u8 {
    INV_SBOX[a as usize]
}
