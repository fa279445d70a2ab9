// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use isap_core::{IsapBackend, Key, Nonce};

use crate::parser::KatVector;

/// Length grid of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Largest plaintext length, inclusive.
    pub max_pt_len: usize,
    /// Largest associated-data length, inclusive.
    pub max_ad_len: usize,
}

impl Default for GridConfig {
    /// The `genkat_aead` grid: 0..=32 bytes of each.
    fn default() -> Self {
        Self {
            max_pt_len: 32,
            max_ad_len: 32,
        }
    }
}

fn sequential<const N: usize>() -> [u8; N] {
    core::array::from_fn(|i| i as u8)
}

/// Compute the records of the `genkat_aead` grid for `backend`.
///
/// Key and nonce are `00 01 .. 0f`. Plaintext length is the outer loop,
/// associated-data length the inner one. Both hold `00 01 ..` and `Count`
/// starts at 1.
pub fn grid<B: IsapBackend + ?Sized>(backend: &B, config: &GridConfig) -> Vec<KatVector> {
    let key: Key = sequential();
    let nonce: Nonce = sequential();
    let mut vectors = Vec::with_capacity((config.max_pt_len + 1) * (config.max_ad_len + 1));
    let mut count = 1;

    for pt_len in 0..=config.max_pt_len {
        let pt: Vec<u8> = (0..pt_len).map(|i| i as u8).collect();

        for ad_len in 0..=config.max_ad_len {
            let ad: Vec<u8> = (0..ad_len).map(|i| i as u8).collect();

            let (mut ct, tag) = backend.encrypt(&key, &nonce, &ad, &pt);
            ct.extend_from_slice(&tag);

            vectors.push(KatVector {
                count,
                key,
                nonce,
                pt: pt.clone(),
                ad,
                ct,
            });
            count += 1;
        }
    }

    tracing::debug!(
        backend = backend.name(),
        records = vectors.len(),
        "generated known-answer grid"
    );

    vectors
}

/// Render the `genkat_aead` grid for `backend` as text.
pub fn generate<B: IsapBackend + ?Sized>(backend: &B, config: &GridConfig) -> String {
    grid(backend, config)
        .iter()
        .map(ToString::to_string)
        .collect()
}
