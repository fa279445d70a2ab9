// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use isap_core::support::{IsapMock, IsapMockBehaviour};

use crate::{GridConfig, KatError, KatVector, grid, run};

const SMALL: GridConfig = GridConfig {
    max_pt_len: 3,
    max_ad_len: 2,
};

fn reference() -> Vec<KatVector> {
    grid(&IsapMock::default(), &SMALL)
}

#[test]
fn test_run_accepts_matching_backend() {
    let mock = IsapMock::default();
    let records = reference();

    assert_eq!(run(&mock, &records), Ok(12));
    assert_eq!(mock.encrypt_count(), 12);
    assert_eq!(mock.decrypt_count(), 12);
}

#[test]
fn test_run_empty_set() {
    assert_eq!(run(&IsapMock::default(), &[]), Ok(0));
}

#[test]
fn test_run_detects_corrupted_ciphertext() {
    let mock = IsapMock::new(IsapMockBehaviour::CorruptCiphertext);
    let records = reference();

    // Records with an empty plaintext pass, the first non-empty one fails.
    match run(&mock, &records) {
        Err(KatError::CiphertextMismatch { count, .. }) => assert_eq!(count, 4),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_run_detects_rejected_decryption() {
    let mock = IsapMock::new(IsapMockBehaviour::RejectAll);
    let records = reference();

    assert_eq!(
        run(&mock, &records),
        Err(KatError::DecryptionRejected { count: 1 })
    );
}

#[test]
fn test_run_detects_wrong_expected_tag() {
    let mut records = reference();
    let last = records[2].ct.len() - 1;
    records[2].ct[last] ^= 0x80;

    let result = run(&IsapMock::default(), &records);

    match result {
        Err(KatError::CiphertextMismatch {
            count,
            expected,
            actual,
        }) => {
            assert_eq!(count, 3);
            assert_ne!(expected, actual);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_run_rejects_truncated_record() {
    let mut records = reference();
    records[0].ct.truncate(15);

    assert_eq!(
        run(&IsapMock::default(), &records),
        Err(KatError::TruncatedRecord { count: 1 })
    );
}
