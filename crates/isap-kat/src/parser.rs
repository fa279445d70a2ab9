// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use isap_core::{KEY_SIZE, Key, NONCE_SIZE, Nonce, TAG_SIZE, Tag};

use crate::error::KatError;

/// Field names in record order
const FIELDS: [&str; 6] = ["Count", "Key", "Nonce", "PT", "AD", "CT"];

/// One known-answer record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KatVector {
    pub count: u32,
    pub key: Key,
    pub nonce: Nonce,
    pub pt: Vec<u8>,
    pub ad: Vec<u8>,
    /// Ciphertext followed by the tag.
    pub ct: Vec<u8>,
}

impl KatVector {
    /// Split `ct` into ciphertext and tag. `None` if `ct` is shorter than a
    /// tag.
    pub fn split(&self) -> Option<(&[u8], &Tag)> {
        let ct_len = self.ct.len().checked_sub(TAG_SIZE)?;
        let (ciphertext, tag) = self.ct.split_at(ct_len);

        Some((ciphertext, tag.try_into().ok()?))
    }
}

impl fmt::Display for KatVector {
    /// Uppercase `genkat_aead` record, including the trailing blank line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count = {}", self.count)?;
        writeln!(f, "Key = {}", hex::encode_upper(self.key))?;
        writeln!(f, "Nonce = {}", hex::encode_upper(self.nonce))?;
        writeln!(f, "PT = {}", hex::encode_upper(&self.pt))?;
        writeln!(f, "AD = {}", hex::encode_upper(&self.ad))?;
        writeln!(f, "CT = {}", hex::encode_upper(&self.ct))?;
        writeln!(f)
    }
}

/// Parse a known-answer file.
///
/// Fields must appear in `Count, Key, Nonce, PT, AD, CT` order. Whitespace
/// around `=` is optional, hex is case-insensitive and may be empty.
pub fn parse(input: &str) -> Result<Vec<KatVector>, KatError> {
    let mut vectors = Vec::new();
    let mut record = KatVector::default();
    let mut field = 0;
    let mut last_line = 0;

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        last_line = line;

        let text = raw.trim();
        if text.is_empty() {
            if field != 0 {
                return Err(KatError::MissingField {
                    line,
                    expected: FIELDS[field],
                });
            }
            continue;
        }

        let (name, value) = text
            .split_once('=')
            .ok_or(KatError::MalformedLine { line })?;
        let (name, value) = (name.trim(), value.trim());

        let expected = FIELDS[field];
        if name != expected {
            return Err(KatError::UnexpectedField {
                line,
                expected,
                found: name.to_string(),
            });
        }

        match field {
            0 => {
                record.count = value
                    .parse()
                    .map_err(|_| KatError::InvalidCount { line })?;
            }
            1 => record.key = decode_fixed::<KEY_SIZE>(line, expected, value)?,
            2 => record.nonce = decode_fixed::<NONCE_SIZE>(line, expected, value)?,
            3 => record.pt = decode(line, expected, value)?,
            4 => record.ad = decode(line, expected, value)?,
            _ => {
                record.ct = decode(line, expected, value)?;
                if record.ct.len() < TAG_SIZE {
                    return Err(KatError::CiphertextTooShort { line });
                }
                vectors.push(core::mem::take(&mut record));
            }
        }

        field = (field + 1) % FIELDS.len();
    }

    if field != 0 {
        return Err(KatError::MissingField {
            line: last_line + 1,
            expected: FIELDS[field],
        });
    }

    Ok(vectors)
}

fn decode(line: usize, field: &'static str, value: &str) -> Result<Vec<u8>, KatError> {
    hex::decode(value).map_err(|_| KatError::InvalidHex { line, field })
}

fn decode_fixed<const N: usize>(
    line: usize,
    field: &'static str,
    value: &str,
) -> Result<[u8; N], KatError> {
    let bytes = decode(line, field, value)?;
    let found = bytes.len();

    bytes.try_into().map_err(|_| KatError::InvalidLength {
        line,
        field,
        expected: N,
        found,
    })
}
