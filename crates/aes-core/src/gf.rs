//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.
//!
//! Every function here is a `const fn` so the substitution tables can be
//! derived at compile time from the same code that is exercised at runtime.

/// Low byte of the reduction polynomial.
const REDUCE: u8 = 0x1b;

/// Exponent ladder for `a^254`: step `i` multiplies the accumulator by the
/// value it held before step `CHAIN[i]`.
const CHAIN: [usize; 11] = [0, 1, 1, 3, 4, 3, 6, 7, 3, 9, 1];

/// Multiplies by `x` (i.e. by 2), reducing when the high bit falls off.
#[inline]
pub const fn mul2(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCE
    } else {
        shifted
    }
}

/// Multiplies two field elements (shift-and-add over the bits of `b`).
#[inline]
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut bit = 0;
    while bit < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = mul2(a);
        b >>= 1;
        bit += 1;
    }
    product
}

/// Multiplicative inverse, computed as `a^254`.
///
/// `inv(0)` is `0`, matching the convention the AES S-box relies on.
pub const fn inv(a: u8) -> u8 {
    let mut acc = a;
    let mut prev = [0u8; CHAIN.len()];
    let mut step = 0;
    while step < CHAIN.len() {
        prev[step] = acc;
        acc = mul(acc, prev[CHAIN[step]]);
        step += 1;
    }
    acc
}
