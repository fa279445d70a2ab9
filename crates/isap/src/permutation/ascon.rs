// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Ascon-p permutation (ISAP v2.0, Appendix A).
//!
//! 320-bit state as five 64-bit words x0..x4. Byte `i` of the sponge view is
//! byte `i % 8` of word `i / 8` in big-endian order.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::Permutation;

/// Round constants c_r for the 12-round schedule (ISAP v2.0, Table A.2)
const RC: [u64; 12] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// Ascon-p state.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct AsconP {
    x: [u64; 5],
    // S-box temporaries, kept in the struct so they are wiped with it
    t: [u64; 5],
}

impl AsconP {
    /// Build a state from its five words.
    pub fn from_words(x: [u64; 5]) -> Self {
        Self { x, t: [0; 5] }
    }

    /// Current state words.
    pub fn words(&self) -> &[u64; 5] {
        &self.x
    }

    #[inline(always)]
    fn round(&mut self, rc: u64) {
        let x = &mut self.x;
        let t = &mut self.t;

        // p_C: addition of constants
        x[2] ^= rc;

        // p_S: 5-bit S-box, bitsliced
        x[0] ^= x[4];
        x[4] ^= x[3];
        x[2] ^= x[1];

        t[0] = !x[0] & x[1];
        t[1] = !x[1] & x[2];
        t[2] = !x[2] & x[3];
        t[3] = !x[3] & x[4];
        t[4] = !x[4] & x[0];

        x[0] ^= t[1];
        x[1] ^= t[2];
        x[2] ^= t[3];
        x[3] ^= t[4];
        x[4] ^= t[0];

        x[1] ^= x[0];
        x[0] ^= x[4];
        x[3] ^= x[2];
        x[2] = !x[2];

        // p_L: linear diffusion
        x[0] ^= x[0].rotate_right(19) ^ x[0].rotate_right(28);
        x[1] ^= x[1].rotate_right(61) ^ x[1].rotate_right(39);
        x[2] ^= x[2].rotate_right(1) ^ x[2].rotate_right(6);
        x[3] ^= x[3].rotate_right(10) ^ x[3].rotate_right(17);
        x[4] ^= x[4].rotate_right(7) ^ x[4].rotate_right(41);
    }

    #[cfg(test)]
    pub(crate) fn scratch_is_clear(&self) -> bool {
        self.t.iter().all(|t| *t == 0)
    }

    #[inline(always)]
    const fn shift(offset: usize) -> u32 {
        (56 - 8 * (offset % 8)) as u32
    }
}

impl Permutation for AsconP {
    const STATE_SIZE: usize = 40;
    const MAX_ROUNDS: usize = 12;

    fn permute(&mut self, rounds: usize) {
        debug_assert!((1..=Self::MAX_ROUNDS).contains(&rounds));

        for rc in &RC[Self::MAX_ROUNDS - rounds..] {
            self.round(*rc);
        }

        self.t.zeroize();
    }

    #[inline]
    fn xor_byte(&mut self, offset: usize, byte: u8) {
        self.x[offset / 8] ^= u64::from(byte) << Self::shift(offset);
    }

    #[inline]
    fn byte(&self, offset: usize) -> u8 {
        (self.x[offset / 8] >> Self::shift(offset)) as u8
    }

    #[inline]
    fn set_byte(&mut self, offset: usize, byte: u8) {
        let shift = Self::shift(offset);
        let word = &mut self.x[offset / 8];

        *word = (*word & !(0xff << shift)) | (u64::from(byte) << shift);
    }
}
