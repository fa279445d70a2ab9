// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed parameter sizes of every ISAP variant.

/// Secret key size in bytes
pub const KEY_SIZE: usize = 16;

/// Public message nonce size in bytes
pub const NONCE_SIZE: usize = 16;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;
