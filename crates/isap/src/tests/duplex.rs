// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::duplex::Duplex;
use crate::permutation::{AsconP, KeccakP400, Permutation};

use super::{sequential, state_hex};

#[test]
fn test_absorb_empty_is_one_padded_block() {
    let mut duplex = Duplex::<AsconP>::new(8);
    duplex.absorb(&[], 12);

    assert_eq!(
        state_hex(duplex.state()),
        "669bf83531f930ab19d3b4801b895387c29a4d251a8fe948344f68b335d2682c54e0c3ef895c25b2"
    );

    let mut manual = AsconP::default();
    manual.xor_byte(0, 0x80);
    manual.permute(12);

    assert_eq!(state_hex(duplex.state()), state_hex(&manual));
}

#[test]
fn test_absorb_full_rate_adds_padding_block() {
    let mut duplex = Duplex::<KeccakP400>::new(18);
    duplex.absorb(&sequential(18), 16);

    assert_eq!(
        state_hex(duplex.state()),
        "0cd3cbbc2f74c92ea7ff34f9483bcd47ded4e02cbc3dcd65987068fe55fcbcd0b9ffdad09a91df669b54fc4edea82ed0d644"
    );

    let mut manual = KeccakP400::default();
    manual.xor_bytes(0, &sequential(18));
    manual.permute(16);
    manual.xor_byte(0, 0x80);
    manual.permute(16);

    assert_eq!(state_hex(duplex.state()), state_hex(&manual));
}

#[test]
fn test_absorb_partial_block_pads_in_place() {
    let mut duplex = Duplex::<AsconP>::new(8);
    duplex.absorb(&[0xaa, 0xbb, 0xcc], 6);

    let mut manual = AsconP::default();
    manual.xor_bytes(0, &[0xaa, 0xbb, 0xcc, 0x80]);
    manual.permute(6);

    assert_eq!(state_hex(duplex.state()), state_hex(&manual));
}

#[test]
fn test_separate_domain_flips_last_bit() {
    let mut duplex = Duplex::<KeccakP400>::new(18);
    duplex.separate_domain();

    assert_eq!(duplex.state().byte(49), 0x01);
    assert_eq!(duplex.state().lanes()[24], 0x0100);
}

#[test]
fn test_absorb_bit_sets_msb_of_first_byte() {
    let mut duplex = Duplex::<AsconP>::new(8);
    duplex.absorb_bit(1, 1);

    let mut manual = AsconP::from_words([0x8000_0000_0000_0000, 0, 0, 0, 0]);
    manual.permute(1);

    assert_eq!(duplex.state().words(), manual.words());
}

#[test]
fn test_squeeze_xor_is_involution() {
    let original = sequential(41);
    let mut data = original.clone();

    for _ in 0..2 {
        let mut duplex = Duplex::<AsconP>::new(8);
        duplex.load(0, &[0x5a; 40]);
        duplex.squeeze_xor(&mut data, 6);
    }

    assert_eq!(data, original);
}

#[test]
fn test_squeeze_xor_permutes_before_each_block() {
    let mut data = [0u8; 20];
    let mut duplex = Duplex::<KeccakP400>::new(18);
    duplex.squeeze_xor(&mut data, 8);

    let mut manual = KeccakP400::default();
    let mut expected = [0u8; 20];
    manual.permute(8);
    manual.extract_bytes(0, &mut expected[..18]);
    manual.permute(8);
    manual.extract_bytes(0, &mut expected[18..]);

    assert_eq!(data, expected);
}
