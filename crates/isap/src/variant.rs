// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Variant registry: the four published ISAP v2.0 parameter sets.
//!
//! Round counts follow Table 2.2 of the ISAP v2.0 submission.

use core::fmt;
use core::str::FromStr;

use isap_core::KEY_SIZE;

use crate::error::UnknownVariant;

/// Permutation family of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Ascon-p, 320-bit state (ISAP-A-*)
    Ascon,
    /// Keccak-p\[400\], 400-bit state (ISAP-K-*)
    Keccak,
}

impl Family {
    /// Permutation state width in bytes.
    pub const fn state_size(self) -> usize {
        match self {
            Family::Ascon => 40,
            Family::Keccak => 50,
        }
    }
}

/// IV domain byte, first byte of each initial value (ISAP v2.0, Table 2.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum IvDomain {
    /// IV_A, authentication sponge
    Mac = 0x01,
    /// IV_KA, re-keying for authentication
    RekeyMac = 0x02,
    /// IV_KE, re-keying for encryption
    RekeyEnc = 0x03,
}

/// Parameters of one ISAP variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsapParams {
    /// Published algorithm name.
    pub name: &'static str,
    /// Underlying permutation.
    pub family: Family,
    /// Rate r_H in bytes, shared by hashing and keystream generation.
    pub rate: usize,
    /// s_H: rounds per block while hashing AD and ciphertext.
    pub mac_rounds: usize,
    /// s_B: rounds after each absorbed bit during re-keying.
    pub rekey_bit_rounds: usize,
    /// s_E: rounds per keystream block.
    pub enc_rounds: usize,
    /// s_K: rounds around the bitwise absorption during re-keying.
    pub rekey_rounds: usize,
}

impl IsapParams {
    /// Initial value `domain || k || r_H || r_B || s_H || s_B || s_E || s_K`.
    pub const fn iv(&self, domain: IvDomain) -> [u8; 8] {
        [
            domain as u8,
            (KEY_SIZE * 8) as u8,
            (self.rate * 8) as u8,
            1,
            self.mac_rounds as u8,
            self.rekey_bit_rounds as u8,
            self.enc_rounds as u8,
            self.rekey_rounds as u8,
        ]
    }

    /// Permutation state width in bytes.
    pub const fn state_size(&self) -> usize {
        self.family.state_size()
    }
}

/// ISAP-A-128A: Ascon-p, accelerated profile.
pub const ISAP_A_128A: IsapParams = IsapParams {
    name: "ISAP-A-128A",
    family: Family::Ascon,
    rate: 8,
    mac_rounds: 12,
    rekey_bit_rounds: 1,
    enc_rounds: 6,
    rekey_rounds: 12,
};

/// ISAP-A-128: Ascon-p, conservative profile.
pub const ISAP_A_128: IsapParams = IsapParams {
    name: "ISAP-A-128",
    family: Family::Ascon,
    rate: 8,
    mac_rounds: 12,
    rekey_bit_rounds: 12,
    enc_rounds: 12,
    rekey_rounds: 12,
};

/// ISAP-K-128A: Keccak-p\[400\], accelerated profile.
pub const ISAP_K_128A: IsapParams = IsapParams {
    name: "ISAP-K-128A",
    family: Family::Keccak,
    rate: 18,
    mac_rounds: 16,
    rekey_bit_rounds: 1,
    enc_rounds: 8,
    rekey_rounds: 8,
};

/// ISAP-K-128: Keccak-p\[400\], conservative profile.
pub const ISAP_K_128: IsapParams = IsapParams {
    name: "ISAP-K-128",
    family: Family::Keccak,
    rate: 18,
    mac_rounds: 20,
    rekey_bit_rounds: 12,
    enc_rounds: 12,
    rekey_rounds: 12,
};

/// The four ISAP variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// ISAP-A-128A
    IsapA128A,
    /// ISAP-A-128
    IsapA128,
    /// ISAP-K-128A
    IsapK128A,
    /// ISAP-K-128
    IsapK128,
}

impl Variant {
    /// Every variant, primary recommendation first.
    pub const ALL: [Variant; 4] = [
        Variant::IsapA128A,
        Variant::IsapA128,
        Variant::IsapK128A,
        Variant::IsapK128,
    ];

    /// Parameter set of this variant.
    pub const fn params(self) -> &'static IsapParams {
        match self {
            Variant::IsapA128A => &ISAP_A_128A,
            Variant::IsapA128 => &ISAP_A_128,
            Variant::IsapK128A => &ISAP_K_128A,
            Variant::IsapK128 => &ISAP_K_128,
        }
    }

    /// Published algorithm name.
    pub const fn name(self) -> &'static str {
        self.params().name
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Accepts the published name in any case, with `-` or `_` separators
    /// (`ISAP-A-128A`, `isap_a_128a`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| {
                let name = variant.name();
                name.len() == s.len()
                    && name.bytes().zip(s.bytes()).all(|(expected, given)| {
                        let given = if given == b'_' { b'-' } else { given };
                        expected.eq_ignore_ascii_case(&given)
                    })
            })
            .ok_or(UnknownVariant)
    }
}
