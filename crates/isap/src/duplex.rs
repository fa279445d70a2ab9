// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Duplex sponge over a byte-addressable permutation state.
//!
//! Rate region is the first `rate` bytes of the state, capacity the rest.
//! Padding is the single byte `0x80` after the data (pad10*), domain
//! separation flips the last bit of the state.

use crate::permutation::Permutation;

/// Padding byte appended to every absorbed string
pub(crate) const PAD_BYTE: u8 = 0x80;

/// Domain-separation byte XORed into the last state byte
pub(crate) const DOMAIN_SEPARATOR: u8 = 0x01;

/// Duplex instance exclusively owning one permutation state.
///
/// The state is zeroized on drop by the permutation itself.
pub(crate) struct Duplex<P: Permutation> {
    state: P,
    rate: usize,
}

impl<P: Permutation> Duplex<P> {
    /// Fresh all-zero state with the given rate in bytes.
    pub fn new(rate: usize) -> Self {
        debug_assert!(rate > 0 && rate < P::STATE_SIZE);

        Self {
            state: P::default(),
            rate,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &P {
        &self.state
    }

    /// Overwrite `bytes.len()` state bytes starting at `offset`.
    #[inline]
    pub fn load(&mut self, offset: usize, bytes: &[u8]) {
        self.state.overwrite_bytes(offset, bytes);
    }

    /// Copy `out.len()` state bytes starting at `offset`.
    #[inline]
    pub fn extract(&self, offset: usize, out: &mut [u8]) {
        self.state.extract_bytes(offset, out);
    }

    #[inline]
    pub fn permute(&mut self, rounds: usize) {
        self.state.permute(rounds);
    }

    /// Absorb `data` followed by the padding byte, permuting after every
    /// rate-sized block.
    ///
    /// Always absorbs at least one block: empty input yields a block that
    /// carries only the padding byte, and input that fills whole blocks gets a
    /// trailing padding-only block.
    pub fn absorb(&mut self, data: &[u8], rounds: usize) {
        let mut blocks = data.chunks_exact(self.rate);

        for block in blocks.by_ref() {
            self.state.xor_bytes(0, block);
            self.state.permute(rounds);
        }

        let remainder = blocks.remainder();
        self.state.xor_bytes(0, remainder);
        self.state.xor_byte(remainder.len(), PAD_BYTE);
        self.state.permute(rounds);
    }

    /// Absorb a single bit into the most significant bit of the first state
    /// byte, then permute.
    ///
    /// `bit` must be 0 or 1. Used by re-keying, whose absorption rate is one
    /// bit.
    #[inline]
    pub fn absorb_bit(&mut self, bit: u8, rounds: usize) {
        debug_assert!(bit <= 1);

        self.state.xor_byte(0, bit << 7);
        self.state.permute(rounds);
    }

    /// Flip the last bit of the state to separate absorption phases.
    #[inline]
    pub fn separate_domain(&mut self) {
        self.state.xor_byte(P::STATE_SIZE - 1, DOMAIN_SEPARATOR);
    }

    /// For each rate-sized block of `data`: permute, then XOR the leading
    /// rate bytes of the state into the block (truncated for the last one).
    ///
    /// Output feedback only: `data` never flows back into the state.
    pub fn squeeze_xor(&mut self, data: &mut [u8], rounds: usize) {
        for block in data.chunks_mut(self.rate) {
            self.state.permute(rounds);

            for (i, b) in block.iter_mut().enumerate() {
                *b ^= self.state.byte(i);
            }
        }
    }
}
