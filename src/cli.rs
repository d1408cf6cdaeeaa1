use clap::{Parser, Subcommand};

use crate::domain::Threshold;

/// Validates that threshold is at least 2
///
/// The library accepts a threshold of 1, but from the command line it would
/// just print copies of the secret.
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if value < 2 {
        return Err(format!("Threshold must be at least 2 (got {value})"));
    }
    Threshold::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "polyshare")]
#[command(about = "Split secrets into Shamir shares over GF(256) and combine them back")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret read from stdin into shares
    Split {
        /// Number of shares to create (at most 254)
        #[arg(short, long)]
        shares: u8,

        /// Threshold: minimum number of shares needed to reconstruct (must be >= 2)
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Threshold,

        /// Emit shares as JSON objects instead of text
        #[arg(long)]
        json: bool,
    },
    /// Combine shares read from stdin to reconstruct the secret
    Combine {
        /// Print the secret as hex even when it is valid UTF-8
        #[arg(long)]
        hex: bool,
    },
    /// Check a share against the secret recovered from shares read from stdin
    Verify {
        /// The share to check
        #[arg(long)]
        share: String,
    },
}
