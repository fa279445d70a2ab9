// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Known-answer parsing or verification failure.
///
/// Parse errors carry the 1-based line number, verification errors the
/// `Count` of the offending record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KatError {
    #[error("line {line}: expected `{expected} = ...`")]
    MissingField { line: usize, expected: &'static str },

    #[error("line {line}: expected field `{expected}`, found `{found}`")]
    UnexpectedField {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: expected `name = value`")]
    MalformedLine { line: usize },

    #[error("line {line}: invalid hex in `{field}`")]
    InvalidHex { line: usize, field: &'static str },

    #[error("line {line}: invalid count")]
    InvalidCount { line: usize },

    #[error("line {line}: `{field}` must be {expected} bytes, got {found}")]
    InvalidLength {
        line: usize,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: `CT` shorter than the tag")]
    CiphertextTooShort { line: usize },

    #[error("record {count}: `CT` shorter than the tag")]
    TruncatedRecord { count: u32 },

    #[error("record {count}: ciphertext mismatch (expected {expected}, got {actual})")]
    CiphertextMismatch {
        count: u32,
        expected: String,
        actual: String,
    },

    #[error("record {count}: decryption rejected a valid tag")]
    DecryptionRejected { count: u32 },

    #[error("record {count}: decrypted plaintext differs")]
    PlaintextMismatch { count: u32 },
}
