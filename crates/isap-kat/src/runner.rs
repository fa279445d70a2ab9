// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use isap_core::IsapBackend;

use crate::error::KatError;
use crate::parser::KatVector;

/// Check every record against `backend`, in both directions.
///
/// Encryption must reproduce `CT` exactly, and decryption of `CT` must
/// verify and return `PT`. Stops at the first failing record. Returns the
/// number of records checked.
pub fn run<B: IsapBackend + ?Sized>(backend: &B, vectors: &[KatVector]) -> Result<usize, KatError> {
    for vector in vectors {
        let count = vector.count;
        let (ciphertext, tag) = vector
            .split()
            .ok_or(KatError::TruncatedRecord { count })?;

        let (actual_ct, actual_tag) =
            backend.encrypt(&vector.key, &vector.nonce, &vector.ad, &vector.pt);

        if actual_ct != ciphertext || actual_tag != *tag {
            let mut actual = actual_ct;
            actual.extend_from_slice(&actual_tag);

            tracing::warn!(backend = backend.name(), count, "ciphertext mismatch");
            return Err(KatError::CiphertextMismatch {
                count,
                expected: hex::encode_upper(&vector.ct),
                actual: hex::encode_upper(actual),
            });
        }

        let (verified, plaintext) =
            backend.decrypt(&vector.key, &vector.nonce, tag, &vector.ad, ciphertext);

        if !verified {
            tracing::warn!(backend = backend.name(), count, "decryption rejected");
            return Err(KatError::DecryptionRejected { count });
        }
        if plaintext != vector.pt {
            return Err(KatError::PlaintextMismatch { count });
        }
    }

    tracing::debug!(
        backend = backend.name(),
        records = vectors.len(),
        "known-answer records verified"
    );

    Ok(vectors.len())
}
