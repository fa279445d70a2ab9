// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use clap::Parser;
use isap::Variant;
use isap_kat::{GridConfig, KatError, vectors};

use crate::commands::{check, render};
use crate::{Args, Command};

// =============================================================================
// Argument parsing
// =============================================================================

#[test]
fn test_generate_defaults() {
    let args = Args::try_parse_from(["isap-genkat", "generate", "--variant", "isap_k_128a"])
        .expect("Failed to parse args");

    assert_eq!(args.log_level, "info");
    match args.command {
        Command::Generate {
            variant,
            out,
            max_pt_len,
            max_ad_len,
        } => {
            assert_eq!(variant, Variant::IsapK128A);
            assert!(out.is_none());
            assert_eq!((max_pt_len, max_ad_len), (32, 32));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_verify_args() {
    let args = Args::try_parse_from([
        "isap-genkat",
        "verify",
        "-v",
        "ISAP-A-128",
        "kat.txt",
        "--log-level",
        "debug",
    ])
    .expect("Failed to parse args");

    assert_eq!(args.log_level, "debug");
    match args.command {
        Command::Verify { variant, file } => {
            assert_eq!(variant, Variant::IsapA128);
            assert_eq!(file.to_str(), Some("kat.txt"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_unknown_variant_is_rejected() {
    assert!(Args::try_parse_from(["isap-genkat", "generate", "--variant", "isap-b-128"]).is_err());
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn test_render_matches_bundled_file() {
    let text = render(Variant::IsapK128, &GridConfig::default());

    assert_eq!(text, vectors::ISAP_K_128);
}

#[test]
fn test_render_then_check() {
    let config = GridConfig {
        max_pt_len: 5,
        max_ad_len: 3,
    };

    for variant in Variant::ALL {
        let text = render(variant, &config);
        assert_eq!(check(variant, &text), Ok(24));
    }
}

#[test]
fn test_check_with_wrong_variant_fails_first_record() {
    let text = render(Variant::IsapA128A, &GridConfig::default());

    match check(Variant::IsapA128, &text) {
        Err(KatError::CiphertextMismatch { count, .. }) => assert_eq!(count, 1),
        other => panic!("unexpected result: {other:?}"),
    }
}
