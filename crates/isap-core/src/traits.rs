// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ISAP trait definitions.

use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::error::IsapError;
use crate::types::{Key, Nonce, Tag};

/// Fixed-size ISAP backend.
///
/// A single implementation can serve every variant (ISAP-A-128A, ISAP-A-128,
/// ISAP-K-128A, ISAP-K-128) by selecting its parameters at construction.
/// Key, nonce and tag sizes are enforced by the types, so both operations
/// are total.
pub trait IsapBackend {
    /// Algorithm name as published, e.g. `"ISAP-A-128A"`.
    fn name(&self) -> &'static str;

    /// Encrypt `plaintext`, returning a ciphertext of the same length and the
    /// 16-byte tag over (nonce, associated data, ciphertext).
    fn encrypt(&self, key: &Key, nonce: &Nonce, ad: &[u8], plaintext: &[u8]) -> (Vec<u8>, Tag);

    /// Recompute the tag over `ciphertext` and decrypt it.
    ///
    /// Both the verification flag and the decrypted bytes are returned
    /// unconditionally. The plaintext is NOT suppressed when the flag is
    /// `false`: callers must discard it unless verification succeeded. Prefer
    /// [`IsapApi::api_open`] when that discipline cannot be guaranteed.
    fn decrypt(
        &self,
        key: &Key,
        nonce: &Nonce,
        tag: &Tag,
        ad: &[u8],
        ciphertext: &[u8],
    ) -> (bool, Vec<u8>);
}

/// Object-safe, slice-based ISAP API.
///
/// This is the boundary layer: it rejects key/nonce/tag buffers that are not
/// exactly 16 bytes before the fixed-size core is invoked. Blanket-implemented
/// for every [`IsapBackend`].
pub trait IsapApi {
    /// Algorithm name of the underlying backend.
    fn api_name(&self) -> &'static str;

    /// Size-checked [`IsapBackend::encrypt`].
    fn api_encrypt(
        &self,
        key: &[u8],
        nonce: &[u8],
        ad: &[u8],
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, Tag), IsapError>;

    /// Size-checked [`IsapBackend::decrypt`]. Same release semantics: the
    /// plaintext is returned even when the flag is `false`.
    fn api_decrypt(
        &self,
        key: &[u8],
        nonce: &[u8],
        tag: &[u8],
        ad: &[u8],
        ciphertext: &[u8],
    ) -> Result<(bool, Vec<u8>), IsapError>;

    /// Verify-then-release decryption of `ciphertext || tag`.
    ///
    /// On a tag mismatch the recovered bytes are zeroized and
    /// [`IsapError::AuthenticationFailed`] is returned.
    fn api_open(
        &self,
        key: &[u8],
        nonce: &[u8],
        ad: &[u8],
        ciphertext_with_tag: &[u8],
    ) -> Result<Vec<u8>, IsapError>;

    /// Key size in bytes.
    fn api_key_size(&self) -> usize;
    /// Nonce size in bytes.
    fn api_nonce_size(&self) -> usize;
    /// Tag size in bytes.
    fn api_tag_size(&self) -> usize;
}

fn key_from_slice(key: &[u8]) -> Result<&Key, IsapError> {
    key.try_into()
        .map_err(|_| IsapError::InvalidKeySize(key.len()))
}

fn nonce_from_slice(nonce: &[u8]) -> Result<&Nonce, IsapError> {
    nonce
        .try_into()
        .map_err(|_| IsapError::InvalidNonceSize(nonce.len()))
}

fn tag_from_slice(tag: &[u8]) -> Result<&Tag, IsapError> {
    tag.try_into()
        .map_err(|_| IsapError::InvalidTagSize(tag.len()))
}

impl<T: IsapBackend + ?Sized> IsapApi for T {
    fn api_name(&self) -> &'static str {
        self.name()
    }

    fn api_encrypt(
        &self,
        key: &[u8],
        nonce: &[u8],
        ad: &[u8],
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, Tag), IsapError> {
        let key = key_from_slice(key)?;
        let nonce = nonce_from_slice(nonce)?;

        Ok(self.encrypt(key, nonce, ad, plaintext))
    }

    fn api_decrypt(
        &self,
        key: &[u8],
        nonce: &[u8],
        tag: &[u8],
        ad: &[u8],
        ciphertext: &[u8],
    ) -> Result<(bool, Vec<u8>), IsapError> {
        let key = key_from_slice(key)?;
        let nonce = nonce_from_slice(nonce)?;
        let tag = tag_from_slice(tag)?;

        Ok(self.decrypt(key, nonce, tag, ad, ciphertext))
    }

    fn api_open(
        &self,
        key: &[u8],
        nonce: &[u8],
        ad: &[u8],
        ciphertext_with_tag: &[u8],
    ) -> Result<Vec<u8>, IsapError> {
        let key = key_from_slice(key)?;
        let nonce = nonce_from_slice(nonce)?;

        let ct_len = ciphertext_with_tag
            .len()
            .checked_sub(TAG_SIZE)
            .ok_or(IsapError::CiphertextTooShort)?;
        let (ciphertext, tag) = ciphertext_with_tag.split_at(ct_len);
        let tag = tag_from_slice(tag)?;

        let (verified, mut plaintext) = self.decrypt(key, nonce, tag, ad, ciphertext);

        if !verified {
            plaintext.zeroize();
            return Err(IsapError::AuthenticationFailed);
        }

        Ok(plaintext)
    }

    #[inline]
    fn api_key_size(&self) -> usize {
        KEY_SIZE
    }

    #[inline]
    fn api_nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    #[inline]
    fn api_tag_size(&self) -> usize {
        TAG_SIZE
    }
}
