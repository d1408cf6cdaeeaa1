//! Text and JSON encodings for shares
//!
//! The core works on raw bytes; this module gives shares a portable form for
//! the command line. Two encodings are supported:
//!
//! - Text: `polyshare-<threshold>-<x>-<hex f(x)>`, one share per line
//! - JSON: `{"threshold":<t>,"x":<x>,"fx":"<hex f(x)>"}`
//!
//! Both embed the threshold so a set of shares can be combined without any
//! other input. Neither carries a checksum: a damaged share is only detected
//! when redundant shares are combined.
//!
//! # Examples
//!
//! ```rust
//! use polyshare::codec::{create_share, parse_share};
//! use polyshare::domain::Threshold;
//! use polyshare::Share;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let share = Share { x: 3, fx: vec![0xDE, 0xAD, 0xBE, 0xEF] };
//! let threshold = Threshold::new(2)?;
//!
//! let text = create_share(&share, threshold)?;
//! assert_eq!(text.as_str(), "polyshare-2-3-deadbeef");
//!
//! let (parsed_threshold, parsed_share) = parse_share(text.as_str())?;
//! assert_eq!(threshold, parsed_threshold);
//! assert_eq!(share, parsed_share);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::{ShareIndex, Threshold};
use crate::session::Share;

/// Prefix identifying the polyshare text format
pub const PREFIX: &str = "polyshare";

/// An encoded share, text or JSON
///
/// Wraps the string in `Zeroizing` to ensure secure memory cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareText(Zeroizing<String>);

impl ShareText {
    fn new(s: String) -> Self {
        Self(Zeroizing::new(s))
    }

    /// Gets the encoded share as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShareText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

/// JSON shape of an encoded share
#[derive(Serialize, Deserialize)]
struct ShareRecord {
    threshold: u8,
    x: u8,
    #[serde(with = "hex")]
    fx: Vec<u8>,
}

/// Encodes a share in the text format
///
/// # Errors
/// Returns an error if the share's x-coordinate is 0 or 255
pub fn create_share(share: &Share, threshold: Threshold) -> Result<ShareText> {
    let index = ShareIndex::new(share.x)?;
    Ok(ShareText::new(format!(
        "{PREFIX}-{}-{}-{}",
        *threshold,
        *index,
        hex::encode(&share.fx)
    )))
}

/// Encodes a share as a single-line JSON object
///
/// # Errors
/// Returns an error if the share's x-coordinate is 0 or 255, or serialization fails
pub fn to_json(share: &Share, threshold: Threshold) -> Result<ShareText> {
    ShareIndex::new(share.x)?;
    let record = ShareRecord {
        threshold: *threshold,
        x: share.x,
        fx: share.fx.clone(),
    };
    let json = serde_json::to_string(&record).context("Failed to serialize share")?;
    Ok(ShareText::new(json))
}

/// Parses a share in the text format
///
/// # Errors
/// Returns an error if the prefix is wrong, a field is missing or out of
/// range, or the payload is not valid hex
pub fn parse_share(text: &str) -> Result<(Threshold, Share)> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        bail!("Empty share");
    }

    let mut fields = text.splitn(4, '-');
    let prefix = fields.next().unwrap_or_default();
    if prefix != PREFIX {
        bail!("Invalid share prefix: expected '{PREFIX}', got '{prefix}'");
    }

    let (Some(threshold), Some(x), Some(payload)) = (fields.next(), fields.next(), fields.next())
    else {
        bail!("Share too short: expected {PREFIX}-<threshold>-<x>-<hex>");
    };

    let threshold: u8 = threshold
        .parse()
        .with_context(|| format!("Invalid threshold field '{threshold}'"))?;
    let x: u8 = x
        .parse()
        .with_context(|| format!("Invalid share index field '{x}'"))?;
    let fx = hex::decode(payload).context("Share payload is not valid hex")?;

    Ok((
        Threshold::new(threshold)?,
        Share {
            x: *ShareIndex::new(x)?,
            fx,
        },
    ))
}

/// Parses a share in either the text or the JSON format
///
/// # Errors
/// Returns an error if the share is malformed in the detected format
pub fn parse_any(text: &str) -> Result<(Threshold, Share)> {
    let trimmed = text.trim();
    if !trimmed.starts_with('{') {
        return parse_share(trimmed);
    }

    let record: ShareRecord = serde_json::from_str(trimmed).context("Invalid JSON share")?;
    Ok((
        Threshold::new(record.threshold)?,
        Share {
            x: *ShareIndex::new(record.x)?,
            fx: record.fx,
        },
    ))
}
