// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{KatError, parse, vectors};

const RECORD: &str = "\
Count = 7
Key = 000102030405060708090A0B0C0D0E0F
Nonce = 000102030405060708090A0B0C0D0E0F
PT = 0001
AD =
CT = AABBAABBAABBAABBAABBAABBAABBAABB0102
";

#[test]
fn test_parse_single_record() {
    let records = parse(RECORD).expect("Failed to parse(..)");

    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.count, 7);
    assert_eq!(record.key[15], 0x0f);
    assert_eq!(record.pt, vec![0x00, 0x01]);
    assert!(record.ad.is_empty());

    let (ciphertext, tag) = record.split().expect("Failed to split(..)");
    assert_eq!(ciphertext, &[0xaa, 0xbb]);
    assert_eq!(tag[0], 0xaa);
    assert_eq!(&tag[14..], &[0x01, 0x02]);
}

#[test]
fn test_parse_is_lenient_on_spacing_and_case() {
    let input = "Count=1\nKey=000102030405060708090a0b0c0d0e0f\n  Nonce =000102030405060708090a0b0c0d0e0f\nPT=\nAD =ff\nCT=00000000000000000000000000000000\n";
    let records = parse(input).expect("Failed to parse(..)");

    assert_eq!(records[0].ad, vec![0xff]);
    assert!(records[0].pt.is_empty());
}

#[test]
fn test_parse_multiple_records_with_extra_blank_lines() {
    let input = format!("\n{RECORD}\n\n{RECORD}");
    let records = parse(&input).expect("Failed to parse(..)");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0], records[1]);
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(parse(""), Ok(vec![]));
}

#[test]
fn test_parse_bundled_files() {
    for (name, file) in vectors::ALL {
        let records = parse(file).expect("Failed to parse bundled file");

        assert_eq!(records.len(), 1089, "{name}");
        assert_eq!(records[1088].count, 1089, "{name}");
        assert_eq!(records[1088].pt.len(), 32, "{name}");
        assert_eq!(records[1088].ct.len(), 48, "{name}");
    }
}

#[test]
fn test_for_name_is_case_insensitive() {
    assert_eq!(vectors::for_name("isap-k-128a"), Some(vectors::ISAP_K_128A));
    assert_eq!(vectors::for_name("ISAP-A-128"), Some(vectors::ISAP_A_128));
    assert_eq!(vectors::for_name("ISAP-X"), None);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_parse_rejects_out_of_order_field() {
    let input = RECORD.replace("PT = 0001\nAD =\n", "AD =\nPT = 0001\n");

    assert_eq!(
        parse(&input),
        Err(KatError::UnexpectedField {
            line: 4,
            expected: "PT",
            found: "AD".to_string(),
        })
    );
}

#[test]
fn test_parse_rejects_missing_field_mid_record() {
    let input = RECORD.replace("AD =\n", "\n");

    assert_eq!(
        parse(&input),
        Err(KatError::MissingField {
            line: 5,
            expected: "AD",
        })
    );
}

#[test]
fn test_parse_rejects_truncated_file() {
    let input = RECORD.replace("CT = AABBAABBAABBAABBAABBAABBAABBAABB0102\n", "");

    assert_eq!(
        parse(&input),
        Err(KatError::MissingField {
            line: 6,
            expected: "CT",
        })
    );
}

#[test]
fn test_parse_rejects_malformed_line() {
    let input = RECORD.replace("PT = 0001", "PT 0001");

    assert_eq!(parse(&input), Err(KatError::MalformedLine { line: 4 }));
}

#[test]
fn test_parse_rejects_invalid_hex() {
    let input = RECORD.replace("PT = 0001", "PT = 0G01");

    assert_eq!(
        parse(&input),
        Err(KatError::InvalidHex {
            line: 4,
            field: "PT",
        })
    );

    let odd = RECORD.replace("PT = 0001", "PT = 001");
    assert_eq!(
        parse(&odd),
        Err(KatError::InvalidHex {
            line: 4,
            field: "PT",
        })
    );
}

#[test]
fn test_parse_rejects_invalid_count() {
    let input = RECORD.replace("Count = 7", "Count = seven");

    assert_eq!(parse(&input), Err(KatError::InvalidCount { line: 1 }));
}

#[test]
fn test_parse_rejects_short_key() {
    let input = RECORD.replace(
        "Key = 000102030405060708090A0B0C0D0E0F",
        "Key = 000102030405060708090A0B0C0D0E",
    );

    assert_eq!(
        parse(&input),
        Err(KatError::InvalidLength {
            line: 2,
            field: "Key",
            expected: 16,
            found: 15,
        })
    );
}

#[test]
fn test_parse_rejects_ct_shorter_than_tag() {
    let input = RECORD.replace("AABBAABBAABBAABBAABBAABBAABBAABB0102", "AABB");

    assert_eq!(parse(&input), Err(KatError::CiphertextTooShort { line: 6 }));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        KatError::MissingField {
            line: 3,
            expected: "Nonce"
        }
        .to_string(),
        "line 3: expected `Nonce = ...`"
    );
    assert_eq!(
        KatError::PlaintextMismatch { count: 9 }.to_string(),
        "record 9: decrypted plaintext differs"
    );
}
