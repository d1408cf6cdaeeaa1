use std::io::Read;

use anyhow::{Context, Result, anyhow, bail};
use log::debug;
use zeroize::Zeroizing;

use crate::codec::{self, ShareText};
use crate::domain::{SplitConfig, Threshold};
use crate::session::{Session, Share};

/// Encoding used when emitting shares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareFormat {
    #[default]
    Text,
    Json,
}

/// Split a secret into encoded shares at x = 1..=share count
///
/// # Errors
/// Returns an error if share computation or encoding fails
pub fn split_secret(
    secret: &[u8],
    config: SplitConfig,
    format: ShareFormat,
) -> Result<Vec<ShareText>> {
    let threshold = config.threshold();
    let session = Session::with_secret(threshold, secret);

    let mut encoded = Vec::with_capacity(usize::from(*config.share_count()));
    for index in config.share_count().indices() {
        let share = session
            .compute(*index)
            .with_context(|| format!("Failed to compute share at x = {}", *index))?;
        let text = match format {
            ShareFormat::Text => codec::create_share(&share, threshold)?,
            ShareFormat::Json => codec::to_json(&share, threshold)?,
        };
        encoded.push(text);
    }

    debug!(
        "Split {} bytes into {} shares with threshold {}",
        secret.len(),
        encoded.len(),
        threshold
    );
    Ok(encoded)
}

/// Parse encoded shares, checking they all declare the same threshold
fn parse_shares(share_strings: &[String]) -> Result<(Threshold, Vec<Share>)> {
    if share_strings.is_empty() {
        bail!("No shares provided");
    }

    let mut shares = Vec::with_capacity(share_strings.len());
    let mut threshold_from_shares = None;

    for (idx, share_str) in share_strings.iter().enumerate() {
        let (threshold, share) = codec::parse_any(share_str)
            .with_context(|| format!("Failed to parse share #{}", idx + 1))?;

        match threshold_from_shares {
            None => {
                threshold_from_shares = Some(threshold);
            }
            Some(t) if t != threshold => {
                bail!(
                    "Share #{} has inconsistent threshold: expected {}, got {}",
                    idx + 1,
                    *t,
                    *threshold
                );
            }
            _ => {}
        }

        shares.push(share);
    }

    let threshold = threshold_from_shares.ok_or_else(|| anyhow!("No valid shares found"))?;
    Ok((threshold, shares))
}

/// Recover a session from encoded shares
fn recover_session(share_strings: &[String]) -> Result<Session> {
    let (threshold, shares) = parse_shares(share_strings)?;
    let mut session = Session::decoder(threshold);
    session
        .recover(&shares)
        .context("Failed to recover secret")?;
    Ok(session)
}

/// Combine encoded shares to reconstruct the original secret
///
/// # Errors
/// Returns an error if share decoding fails, thresholds disagree, or recovery fails
pub fn combine_shares(share_strings: &[String]) -> Result<Zeroizing<Vec<u8>>> {
    let session = recover_session(share_strings)?;
    let secret = session
        .secret()
        .ok_or_else(|| anyhow!("Recovered session holds no secret"))?;
    Ok(Zeroizing::new(secret.to_vec()))
}

/// Check a candidate share against the secret recovered from `known`
///
/// # Errors
/// Returns an error if recovery fails, the candidate cannot be parsed, or it
/// declares a different threshold or length
pub fn verify_share(known: &[String], candidate: &str) -> Result<bool> {
    let session = recover_session(known)?;

    let (threshold, share) =
        codec::parse_any(candidate).context("Failed to parse candidate share")?;
    if threshold != session.threshold() {
        bail!(
            "Candidate share has inconsistent threshold: expected {}, got {}",
            session.threshold(),
            threshold
        );
    }

    session
        .is_valid(&share)
        .context("Failed to validate candidate share")
}

/// Read a secret from a byte stream
///
/// The whole stream is the secret, so multi-line and binary secrets survive.
/// At most one trailing line ending (`\n` or `\r\n`) is dropped.
///
/// # Errors
/// Returns an error if reading fails
pub fn read_secret<R: Read>(mut reader: R) -> Result<Zeroizing<Vec<u8>>> {
    let mut secret = Zeroizing::new(Vec::new());
    reader
        .read_to_end(&mut secret)
        .context("Failed to read secret")?;

    if secret.last() == Some(&b'\n') {
        secret.pop();
        if secret.last() == Some(&b'\r') {
            secret.pop();
        }
    }
    Ok(secret)
}

/// True if `secret` can be shown as text without loss
#[must_use]
pub fn is_text(secret: &[u8]) -> bool {
    std::str::from_utf8(secret).is_ok()
}

/// Render a recovered secret for display
///
/// UTF-8 secrets are shown as text unless `as_hex` is set; anything else is
/// always hex. Callers should tell the user when a non-text secret falls back
/// to hex, since the two renderings can coincide.
#[must_use]
pub fn display_secret(secret: &[u8], as_hex: bool) -> Zeroizing<String> {
    Zeroizing::new(match std::str::from_utf8(secret) {
        Ok(text) if !as_hex => text.to_string(),
        _ => hex::encode(secret),
    })
}
