// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bundled known-answer files, one per variant, over the default grid.
//!
//! The files were produced by an independent ISAP v2.0 model checked against
//! SHA3-256 and the Ascon-Hash IV, not copied from the published LWC
//! `LWC_AEAD_KAT_128_128.txt` files. Matching them shows the implementation
//! agrees with that model. Run `isap-genkat verify` against the published
//! files to check conformance.

/// ISAP-A-128A answers over the default grid.
pub const ISAP_A_128A: &str = include_str!("../vectors/isap_a_128a.txt");

/// ISAP-A-128 answers over the default grid.
pub const ISAP_A_128: &str = include_str!("../vectors/isap_a_128.txt");

/// ISAP-K-128A answers over the default grid.
pub const ISAP_K_128A: &str = include_str!("../vectors/isap_k_128a.txt");

/// ISAP-K-128 answers over the default grid.
pub const ISAP_K_128: &str = include_str!("../vectors/isap_k_128.txt");

/// (algorithm name, file contents)
pub const ALL: [(&str, &str); 4] = [
    ("ISAP-A-128A", ISAP_A_128A),
    ("ISAP-A-128", ISAP_A_128),
    ("ISAP-K-128A", ISAP_K_128A),
    ("ISAP-K-128", ISAP_K_128),
];

/// Bundled file for the algorithm `name`, compared case-insensitively.
pub fn for_name(name: &str) -> Option<&'static str> {
    ALL.iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, file)| *file)
}
