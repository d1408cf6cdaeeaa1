//! `ShareIndex` newtype for Shamir Secret Sharing

use crate::error::{Result, ShareError};

/// Share x-coordinate (1..=254)
///
/// Index 0 is forbidden because evaluating a polynomial there yields the
/// secret byte itself. Index 255 is reserved as the upper boundary of the
/// field and is rejected everywhere shares are computed, checked or combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u8);

impl ShareIndex {
    /// Minimum valid share index
    pub const MIN: u8 = 1;

    /// Maximum valid share index (254)
    pub const MAX: u8 = 254;

    /// Creates a new share index
    ///
    /// # Errors
    /// Returns [`ShareError::InvalidShareIndex`] if index is 0 or 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polyshare::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(1).unwrap();
    /// assert_eq!(*index, 1);
    ///
    /// let max_index = ShareIndex::new(ShareIndex::MAX).unwrap();
    /// assert_eq!(*max_index, 254);
    ///
    /// assert!(ShareIndex::new(0).is_err());
    /// assert!(ShareIndex::new(255).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ShareError::InvalidShareIndex(value));
        }
        Ok(Self(value))
    }

    /// Iterates over every valid index in increasing order
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
