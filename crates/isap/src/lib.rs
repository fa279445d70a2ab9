// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ISAP: a family of leakage-resilient authenticated encryption schemes.
//!
//! Four parameter sets over two permutations:
//!
//! | Variant      | Permutation     | Rate | s_H | s_B | s_E | s_K |
//! |--------------|-----------------|------|-----|-----|-----|-----|
//! | ISAP-A-128A  | Ascon-p         | 64   | 12  | 1   | 6   | 12  |
//! | ISAP-A-128   | Ascon-p         | 64   | 12  | 12  | 12  | 12  |
//! | ISAP-K-128A  | Keccak-p\[400\] | 144  | 16  | 1   | 8   | 8   |
//! | ISAP-K-128   | Keccak-p\[400\] | 144  | 20  | 12  | 12  | 12  |
//!
//! ```
//! use isap::Isap;
//!
//! let isap = Isap::isap_a_128a();
//! let key = [0u8; 16];
//! let nonce = [1u8; 16];
//!
//! let (ciphertext, tag) = isap.encrypt(&key, &nonce, b"header", b"payload");
//! let (verified, plaintext) = isap.decrypt(&key, &nonce, &tag, b"header", &ciphertext);
//!
//! assert!(verified);
//! assert_eq!(plaintext, b"payload");
//! ```
//!
//! [`Isap::decrypt`] returns the plaintext even when verification fails.
//! [`Isap::open_in_place`] and [`IsapApi::api_open`] withhold it.
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod duplex;
mod enc;
mod error;
mod isap;
mod mac;
pub mod permutation;
mod rekey;
mod variant;

pub use error::UnknownVariant;
pub use isap::Isap;
pub use isap_core::{
    IsapApi, IsapBackend, IsapError, KEY_SIZE, Key, NONCE_SIZE, Nonce, TAG_SIZE, Tag,
};
pub use variant::{
    Family, ISAP_A_128, ISAP_A_128A, ISAP_K_128, ISAP_K_128A, IsapParams, IvDomain, Variant,
};

macro_rules! variant_module {
    ($module:ident, $variant:ident, $name:literal) => {
        #[doc = concat!("Free-function interface to ", $name, ".")]
        pub mod $module {
            use alloc::vec::Vec;

            use isap_core::{Key, Nonce, Tag};

            use crate::{Isap, Variant};

            const ISAP: Isap = Isap::new(Variant::$variant);

            #[doc = concat!("Algorithm name, `\"", $name, "\"`.")]
            pub const NAME: &str = $name;

            #[doc = concat!($name, " encryption. See [`Isap::encrypt`].")]
            pub fn encrypt(key: &Key, nonce: &Nonce, ad: &[u8], plaintext: &[u8]) -> (Vec<u8>, Tag) {
                ISAP.encrypt(key, nonce, ad, plaintext)
            }

            #[doc = concat!($name, " decryption. See [`Isap::decrypt`]; the plaintext is returned even when the flag is `false`.")]
            pub fn decrypt(
                key: &Key,
                nonce: &Nonce,
                tag: &Tag,
                ad: &[u8],
                ciphertext: &[u8],
            ) -> (bool, Vec<u8>) {
                ISAP.decrypt(key, nonce, tag, ad, ciphertext)
            }
        }
    };
}

variant_module!(isap_a_128a, IsapA128A, "ISAP-A-128A");
variant_module!(isap_a_128, IsapA128, "ISAP-A-128");
variant_module!(isap_k_128a, IsapK128A, "ISAP-K-128A");
variant_module!(isap_k_128, IsapK128, "ISAP-K-128");
