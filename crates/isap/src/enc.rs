// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ISAP_ENC: keystream encryption under a nonce-bound session key.
//!
//! Encryption and decryption are the same operation.

use isap_core::{Key, NONCE_SIZE, Nonce};

use crate::duplex::Duplex;
use crate::permutation::Permutation;
use crate::rekey::{self, RekeyMode};
use crate::variant::IsapParams;

/// XOR the ISAP keystream for (`key`, `nonce`) into `data` in place.
///
/// Empty `data` returns without deriving a session key.
pub(crate) fn crypt<P: Permutation>(params: &IsapParams, key: &Key, nonce: &Nonce, data: &mut [u8]) {
    if data.is_empty() {
        return;
    }

    let session = rekey::derive::<P>(params, key, RekeyMode::Enc, nonce);

    let mut duplex = Duplex::<P>::new(params.rate);
    duplex.load(0, session.as_bytes());
    duplex.load(P::STATE_SIZE - NONCE_SIZE, nonce);

    duplex.squeeze_xor(data, params.enc_rounds);
}
