// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core sizes, types, traits and error types shared by the ISAP AEAD family.
//!
//! The concrete construction lives in the `isap` crate. This crate only
//! describes the contract every ISAP backend offers, so that test runners
//! (see `isap-kat`) can be written once against any of the four variants.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod traits;
mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
pub use error::IsapError;
pub use traits::{IsapApi, IsapBackend};
pub use types::{Key, Nonce, Tag};
