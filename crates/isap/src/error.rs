// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Variant name did not match any published ISAP parameter set
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown ISAP variant (expected one of ISAP-A-128A, ISAP-A-128, ISAP-K-128A, ISAP-K-128)")]
pub struct UnknownVariant;
