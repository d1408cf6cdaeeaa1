//! `ShareCount` newtype for Shamir Secret Sharing

use anyhow::{Result, bail};

use super::ShareIndex;

/// Number of shares to create (1..=254)
///
/// Shares are handed out at x = 1..=count, so the count can never exceed the
/// number of valid [`ShareIndex`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 1;

    /// Maximum valid share count (254)
    pub const MAX: u8 = ShareIndex::MAX;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if count is 0 or 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polyshare::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// let max_count = ShareCount::new(ShareCount::MAX).unwrap();
    /// assert_eq!(*max_count, 254);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(255).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            bail!("Share count must be at least 1");
        }
        if value > Self::MAX {
            bail!("Share count maximum is 254: x = 0 and x = 255 are not valid share indices");
        }
        Ok(Self(value))
    }

    /// The share indices x = 1..=count
    pub fn indices(self) -> impl Iterator<Item = ShareIndex> {
        ShareIndex::all().take(self.0.into())
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
