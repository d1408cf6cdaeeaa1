//! Parameters of a split: how many shares, and how many recover the secret

use anyhow::{Result, bail};

use super::{ShareCount, Threshold};

/// Threshold and share count for one split
///
/// A split always hands out the x-coordinates `1..=share_count` (see
/// [`ShareCount::indices`]), so `share_count` alone fixes which shares exist.
/// The threshold may not exceed it: fewer distinct shares than the threshold
/// can never recover the secret.
#[derive(Debug, Clone, Copy)]
pub struct SplitConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl SplitConfig {
    /// Pairs a threshold with a share count
    ///
    /// `threshold == share_count` is allowed and leaves no redundancy: every
    /// share is then needed and tampering cannot be detected on combine.
    ///
    /// # Errors
    /// Returns an error if the threshold is larger than the share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polyshare::domain::{SplitConfig, Threshold, ShareCount};
    ///
    /// let config = SplitConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 5);
    ///
    /// let xs: Vec<u8> = config.share_count().indices().map(|x| *x).collect();
    /// assert_eq!(xs, [1, 2, 3, 4, 5]);
    ///
    /// let result = SplitConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold > *share_count {
            bail!(
                "Threshold {} is larger than the {} shares being created",
                *threshold,
                *share_count
            );
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Distinct shares needed to recover
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Shares created, at x = 1..=count
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}
