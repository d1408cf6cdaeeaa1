//! Threshold newtype for Shamir Secret Sharing

use crate::error::{Result, ShareError};

/// Threshold for Shamir Secret Sharing (1..=255)
///
/// The minimum number of distinct shares needed to reconstruct a secret.
/// Each per-byte polynomial has `threshold` coefficients.
///
/// A threshold of 1 is accepted: every share then carries the secret in the
/// clear. Callers wanting real splitting should ask for at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Minimum valid threshold
    pub const MIN: u8 = 1;

    /// Creates a new threshold
    ///
    /// # Errors
    /// Returns [`ShareError::InvalidThreshold`] if the value is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polyshare::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(ShareError::InvalidThreshold(value.into()));
        }
        Ok(Self(value))
    }

    /// Threshold as a count, for comparisons against slice lengths
    #[inline]
    #[must_use]
    pub fn get(self) -> usize {
        self.0.into()
    }
}

impl TryFrom<usize> for Threshold {
    type Error = ShareError;

    /// Converts a wide integer, rejecting anything outside 1..=255
    fn try_from(value: usize) -> Result<Self> {
        let narrow = u8::try_from(value).map_err(|_| ShareError::InvalidThreshold(value))?;
        Self::new(narrow)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
