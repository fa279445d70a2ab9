// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use isap::{Isap, Variant};
use isap_kat::{GridConfig, KatError};

/// Known-answer text for `variant` over `config`.
pub(crate) fn render(variant: Variant, config: &GridConfig) -> String {
    isap_kat::generate(&Isap::new(variant), config)
}

/// Parse `text` and check every record against `variant`.
pub(crate) fn check(variant: Variant, text: &str) -> Result<usize, KatError> {
    let records = isap_kat::parse(text)?;
    isap_kat::run(&Isap::new(variant), &records)
}

pub(crate) fn generate(
    variant: Variant,
    config: &GridConfig,
    out: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    tracing::info!(
        %variant,
        max_pt_len = config.max_pt_len,
        max_ad_len = config.max_ad_len,
        "generating known-answer file"
    );

    let text = render(variant, config);

    match out {
        Some(path) => {
            fs::write(path, &text)?;
            tracing::info!(path = %path.display(), bytes = text.len(), "written");
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }

    Ok(())
}

pub(crate) fn verify(variant: Variant, file: &Path) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(file)?;

    match check(variant, &text) {
        Ok(records) => {
            tracing::info!(%variant, records, path = %file.display(), "all records match");
            Ok(())
        }
        Err(err) => {
            tracing::error!(%variant, path = %file.display(), "{err}");
            Err(err.into())
        }
    }
}
