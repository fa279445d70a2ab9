// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock ISAP backend for testing generic code (API boundary, KAT runners).
//!
//! The mock is NOT a cipher: it XORs the data with key and nonce bytes and
//! folds everything into a 16-byte checksum. It only honours the shape of the
//! contract (length preservation, tag over the ciphertext, unconditional
//! release of the decrypted bytes).

use alloc::vec::Vec;
use core::cell::Cell;

use crate::consts::TAG_SIZE;
use crate::traits::IsapBackend;
use crate::types::{Key, Nonce, Tag};

/// Mock failure behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsapMockBehaviour {
    /// No failure.
    None,
    /// Flip the first ciphertext bit produced by encrypt.
    CorruptCiphertext,
    /// Report every decryption as unverified.
    RejectAll,
}

/// Mock ISAP backend.
#[derive(Debug)]
pub struct IsapMock {
    behaviour: IsapMockBehaviour,
    encrypt_count: Cell<usize>,
    decrypt_count: Cell<usize>,
}

impl IsapMock {
    /// Create a mock with the given behaviour.
    pub fn new(behaviour: IsapMockBehaviour) -> Self {
        Self {
            behaviour,
            encrypt_count: Cell::new(0),
            decrypt_count: Cell::new(0),
        }
    }

    /// Number of `encrypt` calls so far.
    pub fn encrypt_count(&self) -> usize {
        self.encrypt_count.get()
    }

    /// Number of `decrypt` calls so far.
    pub fn decrypt_count(&self) -> usize {
        self.decrypt_count.get()
    }

    fn keystream(key: &Key, nonce: &Nonce, data: &[u8]) -> Vec<u8> {
        data.iter()
            .enumerate()
            .map(|(i, b)| b ^ key[i % key.len()] ^ nonce[i % nonce.len()])
            .collect()
    }

    fn checksum(key: &Key, nonce: &Nonce, ad: &[u8], ciphertext: &[u8]) -> Tag {
        let mut tag = [0u8; TAG_SIZE];

        for (i, b) in key.iter().chain(nonce).enumerate() {
            tag[i % TAG_SIZE] ^= b;
        }
        for (i, b) in ad.iter().enumerate() {
            tag[i % TAG_SIZE] = tag[i % TAG_SIZE].rotate_left(1) ^ b;
        }
        tag[0] ^= 0x01;
        for (i, b) in ciphertext.iter().enumerate() {
            tag[i % TAG_SIZE] = tag[i % TAG_SIZE].rotate_left(3) ^ b;
        }

        tag
    }
}

impl Default for IsapMock {
    fn default() -> Self {
        Self::new(IsapMockBehaviour::None)
    }
}

impl IsapBackend for IsapMock {
    fn name(&self) -> &'static str {
        "ISAP-MOCK"
    }

    fn encrypt(&self, key: &Key, nonce: &Nonce, ad: &[u8], plaintext: &[u8]) -> (Vec<u8>, Tag) {
        self.encrypt_count.set(self.encrypt_count.get() + 1);

        let mut ciphertext = Self::keystream(key, nonce, plaintext);
        let tag = Self::checksum(key, nonce, ad, &ciphertext);

        if self.behaviour == IsapMockBehaviour::CorruptCiphertext {
            if let Some(first) = ciphertext.first_mut() {
                *first ^= 0x01;
            }
        }

        (ciphertext, tag)
    }

    fn decrypt(
        &self,
        key: &Key,
        nonce: &Nonce,
        tag: &Tag,
        ad: &[u8],
        ciphertext: &[u8],
    ) -> (bool, Vec<u8>) {
        self.decrypt_count.set(self.decrypt_count.get() + 1);

        let expected = Self::checksum(key, nonce, ad, ciphertext);
        let verified =
            expected == *tag && self.behaviour != IsapMockBehaviour::RejectAll;

        (verified, Self::keystream(key, nonce, ciphertext))
    }
}
