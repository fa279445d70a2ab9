// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ISAP_RK: leakage-resilient re-keying.
//!
//! The master key is loaded once, then the 128-bit input `Y` is absorbed one
//! bit per permutation call.

use zeroize::{Zeroize, ZeroizeOnDrop};

use isap_core::{KEY_SIZE, Key};

use crate::duplex::Duplex;
use crate::permutation::Permutation;
use crate::variant::{IsapParams, IvDomain};

/// Number of bits absorbed from `Y`
const Y_BITS: usize = 128;

/// Largest session key: K_E for a 400-bit state (50 - 16 bytes)
pub(crate) const MAX_SESSION_KEY_SIZE: usize = 50 - KEY_SIZE;

/// Which session key is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RekeyMode {
    /// K_E, fills the state up to the nonce (`n - 128` bits).
    Enc,
    /// K_A, replaces the first 128 bits of the MAC state.
    Mac,
}

impl RekeyMode {
    fn iv_domain(self) -> IvDomain {
        match self {
            RekeyMode::Enc => IvDomain::RekeyEnc,
            RekeyMode::Mac => IvDomain::RekeyMac,
        }
    }

    /// Output length z in bytes for a state of `state_size` bytes.
    pub fn output_len(self, state_size: usize) -> usize {
        match self {
            RekeyMode::Enc => state_size - KEY_SIZE,
            RekeyMode::Mac => KEY_SIZE,
        }
    }
}

/// Derived session key, wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct SessionKey {
    bytes: [u8; MAX_SESSION_KEY_SIZE],
    len: usize,
}

impl SessionKey {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Derive a session key from the master `key` and the 16-byte input `y`.
///
/// `y` is the nonce for encryption and the truncated hash state for
/// authentication. Bits are absorbed most significant first.
pub(crate) fn derive<P: Permutation>(
    params: &IsapParams,
    key: &Key,
    mode: RekeyMode,
    y: &[u8; 16],
) -> SessionKey {
    debug_assert_eq!(P::STATE_SIZE, params.state_size());

    // Single-bit absorption; the rate only bounds the padded path, unused here
    let mut duplex = Duplex::<P>::new(1);

    duplex.load(0, key);
    duplex.load(KEY_SIZE, &params.iv(mode.iv_domain()));
    duplex.permute(params.rekey_rounds);

    for i in 0..Y_BITS - 1 {
        let bit = (y[i / 8] >> (7 - i % 8)) & 1;
        duplex.absorb_bit(bit, params.rekey_bit_rounds);
    }

    duplex.absorb_bit(y[15] & 1, params.rekey_rounds);

    let mut session = SessionKey {
        bytes: [0; MAX_SESSION_KEY_SIZE],
        len: mode.output_len(P::STATE_SIZE),
    };
    duplex.extract(0, &mut session.bytes[..session.len]);

    session
}
