// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer tests for ISAP backends.
//!
//! Reads and writes the `genkat_aead` text format used by the NIST
//! lightweight cryptography submissions:
//!
//! ```text
//! Count = 1
//! Key = 000102030405060708090A0B0C0D0E0F
//! Nonce = 000102030405060708090A0B0C0D0E0F
//! PT =
//! AD =
//! CT = 7B94EF35AE55AB272C9C44D6C1CF0102
//! ```
//!
//! `CT` is the ciphertext followed by the 16-byte tag. Records are separated
//! by a blank line.

#[cfg(test)]
mod tests;

mod error;
mod generator;
mod parser;
mod runner;
pub mod vectors;

pub use error::KatError;
pub use generator::{GridConfig, generate, grid};
pub use parser::{KatVector, parse};
pub use runner::run;
