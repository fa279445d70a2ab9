// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Round-reduced permutations underlying the ISAP family.
//!
//! Both families expose their state as a flat byte string so that the sponge
//! layer can be written once. The byte order of that view is part of the
//! algorithm definition: Ascon-p words are big-endian, Keccak-p\[400\] lanes
//! are little-endian.

mod ascon;
mod keccak;

use zeroize::Zeroize;

pub use ascon::AsconP;
pub use keccak::KeccakP400;

/// A fixed-width permutation with a byte-addressable state.
///
/// Offsets passed to the byte accessors are always public (derived from
/// buffer lengths), so the word/shift arithmetic they perform leaks nothing
/// about state contents.
pub trait Permutation: Default + Zeroize {
    /// State width in bytes.
    const STATE_SIZE: usize;

    /// Number of rounds of the full schedule.
    const MAX_ROUNDS: usize;

    /// Apply the last `rounds` rounds of the schedule.
    ///
    /// `rounds` must lie in `1..=MAX_ROUNDS`.
    fn permute(&mut self, rounds: usize);

    /// state\[offset\] ^= byte
    fn xor_byte(&mut self, offset: usize, byte: u8);

    /// Read state\[offset\].
    fn byte(&self, offset: usize) -> u8;

    /// state\[offset\] = byte
    fn set_byte(&mut self, offset: usize, byte: u8);

    /// state\[offset..offset + bytes.len()\] ^= bytes
    #[inline]
    fn xor_bytes(&mut self, offset: usize, bytes: &[u8]) {
        debug_assert!(offset + bytes.len() <= Self::STATE_SIZE);

        for (i, b) in bytes.iter().enumerate() {
            self.xor_byte(offset + i, *b);
        }
    }

    /// state\[offset..offset + bytes.len()\] = bytes
    #[inline]
    fn overwrite_bytes(&mut self, offset: usize, bytes: &[u8]) {
        debug_assert!(offset + bytes.len() <= Self::STATE_SIZE);

        for (i, b) in bytes.iter().enumerate() {
            self.set_byte(offset + i, *b);
        }
    }

    /// out = state\[offset..offset + out.len()\]
    #[inline]
    fn extract_bytes(&self, offset: usize, out: &mut [u8]) {
        debug_assert!(offset + out.len() <= Self::STATE_SIZE);

        for (i, b) in out.iter_mut().enumerate() {
            *b = self.byte(offset + i);
        }
    }
}
