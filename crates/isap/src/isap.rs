// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ISAP encrypt-then-MAC composition.

use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use isap_core::{IsapBackend, IsapError, Key, Nonce, Tag};

use crate::permutation::{AsconP, KeccakP400};
use crate::variant::{Family, IsapParams, Variant};
use crate::{enc, mac};

/// ISAP AEAD bound to one parameter set.
///
/// Stateless: every call builds and wipes its own permutation states, so one
/// instance can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Isap {
    params: &'static IsapParams,
}

impl Isap {
    /// Instance for `variant`.
    pub const fn new(variant: Variant) -> Self {
        Self {
            params: variant.params(),
        }
    }

    /// ISAP-A-128A, the primary recommendation.
    pub const fn isap_a_128a() -> Self {
        Self::new(Variant::IsapA128A)
    }

    /// ISAP-A-128
    pub const fn isap_a_128() -> Self {
        Self::new(Variant::IsapA128)
    }

    /// ISAP-K-128A
    pub const fn isap_k_128a() -> Self {
        Self::new(Variant::IsapK128A)
    }

    /// ISAP-K-128
    pub const fn isap_k_128() -> Self {
        Self::new(Variant::IsapK128)
    }

    /// Parameter set in use.
    pub const fn params(&self) -> &'static IsapParams {
        self.params
    }

    /// Encrypt `plaintext` and authenticate it together with `ad`.
    ///
    /// The nonce must never repeat under the same key.
    pub fn encrypt(&self, key: &Key, nonce: &Nonce, ad: &[u8], plaintext: &[u8]) -> (Vec<u8>, Tag) {
        let mut ciphertext = plaintext.to_vec();
        let tag = self.seal_in_place(key, nonce, ad, &mut ciphertext);

        (ciphertext, tag)
    }

    /// Recompute the tag over (`nonce`, `ad`, `ciphertext`), compare it with
    /// `tag` in constant time and decrypt.
    ///
    /// The plaintext is returned whatever the outcome of the comparison. It
    /// is unauthenticated unless the flag is `true`; use
    /// [`Isap::open_in_place`] to have it withheld instead.
    pub fn decrypt(
        &self,
        key: &Key,
        nonce: &Nonce,
        tag: &Tag,
        ad: &[u8],
        ciphertext: &[u8],
    ) -> (bool, Vec<u8>) {
        let verified = self.verify(key, nonce, tag, ad, ciphertext);

        let mut plaintext = ciphertext.to_vec();
        self.crypt(key, nonce, &mut plaintext);

        tracing::debug!(
            variant = self.params.name,
            ad_len = ad.len(),
            ct_len = ciphertext.len(),
            verified,
            "decrypt"
        );

        (verified, plaintext)
    }

    /// Encrypt `data` in place and return the tag.
    pub fn seal_in_place(&self, key: &Key, nonce: &Nonce, ad: &[u8], data: &mut [u8]) -> Tag {
        self.crypt(key, nonce, data);
        let tag = self.tag(key, nonce, ad, data);

        tracing::trace!(
            variant = self.params.name,
            ad_len = ad.len(),
            pt_len = data.len(),
            "seal"
        );

        tag
    }

    /// Verify `tag`, then decrypt `data` in place.
    ///
    /// On a mismatch `data` is zeroized and never decrypted.
    pub fn open_in_place(
        &self,
        key: &Key,
        nonce: &Nonce,
        ad: &[u8],
        data: &mut [u8],
        tag: &Tag,
    ) -> Result<(), IsapError> {
        if !self.verify(key, nonce, tag, ad, data) {
            data.zeroize();
            tracing::debug!(
                variant = self.params.name,
                ad_len = ad.len(),
                ct_len = data.len(),
                "open rejected"
            );
            return Err(IsapError::AuthenticationFailed);
        }

        self.crypt(key, nonce, data);

        Ok(())
    }

    fn verify(&self, key: &Key, nonce: &Nonce, tag: &Tag, ad: &[u8], ciphertext: &[u8]) -> bool {
        let expected = Zeroizing::new(self.tag(key, nonce, ad, ciphertext));

        bool::from(expected[..].ct_eq(&tag[..]))
    }

    fn crypt(&self, key: &Key, nonce: &Nonce, data: &mut [u8]) {
        match self.params.family {
            Family::Ascon => enc::crypt::<AsconP>(self.params, key, nonce, data),
            Family::Keccak => enc::crypt::<KeccakP400>(self.params, key, nonce, data),
        }
    }

    fn tag(&self, key: &Key, nonce: &Nonce, ad: &[u8], ciphertext: &[u8]) -> Tag {
        match self.params.family {
            Family::Ascon => mac::tag::<AsconP>(self.params, key, nonce, ad, ciphertext),
            Family::Keccak => mac::tag::<KeccakP400>(self.params, key, nonce, ad, ciphertext),
        }
    }
}

impl IsapBackend for Isap {
    fn name(&self) -> &'static str {
        self.params.name
    }

    fn encrypt(&self, key: &Key, nonce: &Nonce, ad: &[u8], plaintext: &[u8]) -> (Vec<u8>, Tag) {
        Isap::encrypt(self, key, nonce, ad, plaintext)
    }

    fn decrypt(
        &self,
        key: &Key,
        nonce: &Nonce,
        tag: &Tag,
        ad: &[u8],
        ciphertext: &[u8],
    ) -> (bool, Vec<u8>) {
        Isap::decrypt(self, key, nonce, tag, ad, ciphertext)
    }
}
