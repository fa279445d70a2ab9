// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keccak-p\[400\] permutation (FIPS 202, Section 3) with 16-bit lanes.
//!
//! Lane (x, y) lives at index `x + 5 * y`. Byte `i` of the sponge view is
//! byte `i % 2` of lane `i / 2` in little-endian order, matching the
//! byte-oriented reference interface (XKCP SnP).

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::Permutation;

/// Lane width in bits
const LANE_BITS: u32 = 16;

/// ρ offsets per lane index, reduced modulo the lane width (FIPS 202, Table 2)
const RHO: [u32; 25] = [
    0,
    1,
    62 % LANE_BITS,
    28 % LANE_BITS,
    27 % LANE_BITS,
    36 % LANE_BITS,
    44 % LANE_BITS,
    6,
    55 % LANE_BITS,
    20 % LANE_BITS,
    3,
    10,
    43 % LANE_BITS,
    25 % LANE_BITS,
    39 % LANE_BITS,
    41 % LANE_BITS,
    45 % LANE_BITS,
    15,
    21 % LANE_BITS,
    8,
    18 % LANE_BITS,
    2,
    61 % LANE_BITS,
    56 % LANE_BITS,
    14,
];

/// ι round constants for 20 rounds, truncated to 16 bits (FIPS 202, Section 3.2.5)
const RC: [u16; 20] = [
    0x0001, 0x8082, 0x808a, 0x8000, 0x808b, 0x0001, 0x8081, 0x8009, 0x008a, 0x0088,
    0x8009, 0x000a, 0x808b, 0x008b, 0x8089, 0x8003, 0x8002, 0x0080, 0x800a, 0x000a,
];

/// Keccak-p\[400\] state.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct KeccakP400 {
    a: [u16; 25],
    // Round temporaries (θ column parities, ρ∘π output)
    c: [u16; 5],
    b: [u16; 25],
}

impl KeccakP400 {
    /// Build a state from its 25 lanes.
    pub fn from_lanes(a: [u16; 25]) -> Self {
        Self {
            a,
            c: [0; 5],
            b: [0; 25],
        }
    }

    /// Current state lanes.
    pub fn lanes(&self) -> &[u16; 25] {
        &self.a
    }

    #[inline(always)]
    fn round(&mut self, rc: u16) {
        let a = &mut self.a;
        let b = &mut self.b;
        let c = &mut self.c;

        // θ
        for x in 0..5 {
            c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                a[x + 5 * y] ^= d;
            }
        }

        // ρ and π: B[y, 2x + 3y] = ROT(A[x, y], r[x, y])
        for x in 0..5 {
            for y in 0..5 {
                let lane = x + 5 * y;
                b[y + 5 * ((2 * x + 3 * y) % 5)] = a[lane].rotate_left(RHO[lane]);
            }
        }

        // χ
        for y in 0..5 {
            let row = 5 * y;
            for x in 0..5 {
                a[row + x] = b[row + x] ^ (!b[row + (x + 1) % 5] & b[row + (x + 2) % 5]);
            }
        }

        // ι
        a[0] ^= rc;
    }

    #[cfg(test)]
    pub(crate) fn scratch_is_clear(&self) -> bool {
        self.c.iter().chain(self.b.iter()).all(|lane| *lane == 0)
    }
}

impl Permutation for KeccakP400 {
    const STATE_SIZE: usize = 50;
    const MAX_ROUNDS: usize = 20;

    fn permute(&mut self, rounds: usize) {
        debug_assert!((1..=Self::MAX_ROUNDS).contains(&rounds));

        for rc in &RC[Self::MAX_ROUNDS - rounds..] {
            self.round(*rc);
        }

        self.c.zeroize();
        self.b.zeroize();
    }

    #[inline]
    fn xor_byte(&mut self, offset: usize, byte: u8) {
        self.a[offset / 2] ^= u16::from(byte) << (8 * (offset % 2));
    }

    #[inline]
    fn byte(&self, offset: usize) -> u8 {
        (self.a[offset / 2] >> (8 * (offset % 2))) as u8
    }

    #[inline]
    fn set_byte(&mut self, offset: usize, byte: u8) {
        let shift = 8 * (offset % 2);
        let lane = &mut self.a[offset / 2];

        *lane = (*lane & !(0xff << shift)) | (u16::from(byte) << shift);
    }
}
