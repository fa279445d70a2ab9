// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod duplex;

use crate::permutation::Permutation;

/// Lowercase hex of the full byte view of a permutation state.
pub(crate) fn state_hex<P: Permutation>(state: &P) -> String {
    let mut bytes = vec![0u8; P::STATE_SIZE];
    state.extract_bytes(0, &mut bytes);
    hex::encode(bytes)
}

/// `00 01 02 ..` of length `len`.
pub(crate) fn sequential(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}
