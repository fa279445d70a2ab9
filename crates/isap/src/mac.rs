// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ISAP_MAC: suffix-keyed sponge over associated data and ciphertext.
//!
//! Hashing runs unkeyed. Only the 128-bit digest passes through re-keying,
//! and the resulting K_A replaces the digest before the final permutation.

use zeroize::Zeroizing;

use isap_core::{Key, NONCE_SIZE, Nonce, TAG_SIZE, Tag};

use crate::duplex::Duplex;
use crate::permutation::Permutation;
use crate::rekey::{self, RekeyMode};
use crate::variant::{IsapParams, IvDomain};

/// Compute the tag over `ad` and `ciphertext`.
pub(crate) fn tag<P: Permutation>(
    params: &IsapParams,
    key: &Key,
    nonce: &Nonce,
    ad: &[u8],
    ciphertext: &[u8],
) -> Tag {
    let mut duplex = Duplex::<P>::new(params.rate);

    duplex.load(0, nonce);
    duplex.load(NONCE_SIZE, &params.iv(IvDomain::Mac));
    duplex.permute(params.mac_rounds);

    duplex.absorb(ad, params.mac_rounds);
    duplex.separate_domain();
    duplex.absorb(ciphertext, params.mac_rounds);

    let mut y = Zeroizing::new([0u8; TAG_SIZE]);
    duplex.extract(0, &mut y[..]);

    let session = rekey::derive::<P>(params, key, RekeyMode::Mac, &y);
    duplex.load(0, session.as_bytes());
    duplex.permute(params.mac_rounds);

    let mut tag = [0u8; TAG_SIZE];
    duplex.extract(0, &mut tag);

    tag
}
