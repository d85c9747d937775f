//! AES round transformations.

use crate::block::{state_index, xor_in_place, Block};
use crate::gf::{mul, mul2};
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

fn rotate_rows(state: &mut Block, rotate: impl Fn(&mut [u8; 4], usize)) {
    for row in 1..4 {
        let mut line = [0u8; 4];
        for (col, cell) in line.iter_mut().enumerate() {
            *cell = state[state_index(row, col)];
        }
        rotate(&mut line, row);
        for (col, cell) in line.iter().enumerate() {
            state[state_index(row, col)] = *cell;
        }
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut Block) {
    rotate_rows(state, |line, n| line.rotate_left(n));
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    rotate_rows(state, |line, n| line.rotate_right(n));
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = mul2(a0) ^ (mul2(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ mul2(a1) ^ (mul2(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ mul2(a2) ^ (mul2(a3) ^ a3);
    col[3] = (mul2(a0) ^ a0) ^ a1 ^ a2 ^ mul2(a3);
}

fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = mul(a0, 0x0e) ^ mul(a1, 0x0b) ^ mul(a2, 0x0d) ^ mul(a3, 0x09);
    col[1] = mul(a0, 0x09) ^ mul(a1, 0x0e) ^ mul(a2, 0x0b) ^ mul(a3, 0x0d);
    col[2] = mul(a0, 0x0d) ^ mul(a1, 0x09) ^ mul(a2, 0x0e) ^ mul(a3, 0x0b);
    col[3] = mul(a0, 0x0b) ^ mul(a1, 0x0d) ^ mul(a2, 0x09) ^ mul(a3, 0x0e);
}

fn for_each_column(state: &mut Block, mix: fn(&mut [u8; 4])) {
    for col in 0..4 {
        let idx = state_index(0, col);
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        mix(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for_each_column(state, mix_single_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for_each_column(state, inv_mix_single_column);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
