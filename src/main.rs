use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use polyshare::cli::{Cli, Commands};
use polyshare::commands::{
    self, ShareFormat, combine_shares, display_secret, split_secret, verify_share,
};
use polyshare::domain::{ShareCount, SplitConfig};

/// Read a secret securely from stdin (hidden input when TTY available)
///
/// Piped input is taken whole as raw bytes, so multi-line and binary secrets
/// are split exactly.
fn read_secret() -> Result<Zeroizing<Vec<u8>>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter secret:");
        let secret = rpassword::read_password().context("Failed to read secret from stdin")?;
        Ok(Zeroizing::new(secret.into_bytes()))
    } else {
        commands::read_secret(io::stdin().lock())
    }
}

/// Read shares securely from stdin (hidden input when TTY available)
/// Shares are entered one per line, followed by an empty line to finish
fn read_shares() -> Result<Vec<String>> {
    let mut shares = Vec::new();

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter shares (one per line, empty line to finish):");

        loop {
            let share = rpassword::read_password().context("Failed to read share from stdin")?;

            if share.trim().is_empty() {
                break;
            }

            shares.push(share.trim().to_string());
        }
    } else {
        let stdin = io::stdin();
        let handle = stdin.lock();

        for line in handle.lines() {
            let line = line.context("Failed to read line from stdin")?;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                break;
            }

            shares.push(trimmed.to_string());
        }
    }

    if shares.is_empty() {
        anyhow::bail!("No shares provided");
    }

    Ok(shares)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Split {
            shares,
            threshold,
            json,
        } => {
            let secret = read_secret()?;

            let share_count = ShareCount::new(shares)?;
            let config = SplitConfig::new(threshold, share_count)?;
            let format = if json {
                ShareFormat::Json
            } else {
                ShareFormat::Text
            };

            for share in split_secret(&secret, config, format)? {
                writeln!(stdout, "{share}")?;
            }
        }
        Commands::Combine { hex } => {
            let shares = read_shares()?;
            let secret = combine_shares(&shares)?;
            if !hex && !commands::is_text(&secret) {
                eprintln!("Secret is not valid UTF-8, printing it as hex");
            }
            writeln!(stdout, "{}", display_secret(&secret, hex).as_str())?;
        }
        Commands::Verify { share } => {
            let known = read_shares()?;
            if verify_share(&known, &share)? {
                writeln!(stdout, "valid")?;
            } else {
                writeln!(stdout, "invalid")?;
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
