// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// 128-bit master key.
pub type Key = [u8; KEY_SIZE];

/// 128-bit public message nonce. Must never repeat under the same key.
pub type Nonce = [u8; NONCE_SIZE];

/// 128-bit authentication tag.
pub type Tag = [u8; TAG_SIZE];
