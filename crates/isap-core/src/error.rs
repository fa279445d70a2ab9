// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Common ISAP error types.

use crate::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// Errors reported at the ISAP API boundary.
///
/// The construction itself is total over fixed-size inputs; every variant here
/// is either a size violation caught before the core runs, or a failed tag
/// check surfaced by the verify-then-release helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IsapError {
    /// Key buffer is not exactly [`KEY_SIZE`] bytes.
    #[error("invalid key size: expected {KEY_SIZE} bytes, got {0}")]
    InvalidKeySize(usize),

    /// Nonce buffer is not exactly [`NONCE_SIZE`] bytes.
    #[error("invalid nonce size: expected {NONCE_SIZE} bytes, got {0}")]
    InvalidNonceSize(usize),

    /// Tag buffer is not exactly [`TAG_SIZE`] bytes.
    #[error("invalid tag size: expected {TAG_SIZE} bytes, got {0}")]
    InvalidTagSize(usize),

    /// Combined ciphertext || tag buffer cannot hold a tag.
    #[error("ciphertext too short: expected at least {TAG_SIZE} bytes")]
    CiphertextTooShort,

    /// Recomputed tag differs from the supplied one.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,
}
