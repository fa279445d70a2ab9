// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ISAP known-answer file tool.
//!
//! # Usage
//!
//! ```bash
//! # Write the genkat_aead grid for ISAP-A-128A to stdout
//! isap-genkat generate --variant isap-a-128a
//!
//! # Smaller grid, into a file
//! isap-genkat generate --variant ISAP-K-128 --max-pt-len 8 --max-ad-len 8 --out k128.txt
//!
//! # Check a file against the implementation
//! isap-genkat verify --variant isap-k-128a LWC_AEAD_KAT_128_128.txt
//! ```

#[cfg(test)]
mod tests;

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use isap::Variant;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// ISAP known-answer tests
#[derive(Parser, Debug)]
#[command(name = "isap-genkat")]
#[command(about = "Generate and verify ISAP known-answer test files")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the known-answer grid for a variant
    Generate {
        /// ISAP-A-128A, ISAP-A-128, ISAP-K-128A or ISAP-K-128
        #[arg(short, long)]
        variant: Variant,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Largest plaintext length
        #[arg(long, default_value = "32")]
        max_pt_len: usize,

        /// Largest associated-data length
        #[arg(long, default_value = "32")]
        max_ad_len: usize,
    },

    /// Check every record of a known-answer file
    Verify {
        /// ISAP-A-128A, ISAP-A-128, ISAP-K-128A or ISAP-K-128
        #[arg(short, long)]
        variant: Variant,

        /// Known-answer file
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match args.command {
        Command::Generate {
            variant,
            out,
            max_pt_len,
            max_ad_len,
        } => commands::generate(
            variant,
            &isap_kat::GridConfig {
                max_pt_len,
                max_ad_len,
            },
            out.as_deref(),
        ),
        Command::Verify { variant, file } => commands::verify(variant, &file),
    }
}
