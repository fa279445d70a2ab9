// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::IsapError;

#[test]
fn test_error_messages_name_expected_sizes() {
    assert_eq!(
        IsapError::InvalidKeySize(15).to_string(),
        "invalid key size: expected 16 bytes, got 15"
    );
    assert_eq!(
        IsapError::InvalidNonceSize(17).to_string(),
        "invalid nonce size: expected 16 bytes, got 17"
    );
    assert_eq!(
        IsapError::InvalidTagSize(0).to_string(),
        "invalid tag size: expected 16 bytes, got 0"
    );
    assert_eq!(
        IsapError::CiphertextTooShort.to_string(),
        "ciphertext too short: expected at least 16 bytes"
    );
    assert_eq!(
        IsapError::AuthenticationFailed.to_string(),
        "authentication failed: tag mismatch"
    );
}
