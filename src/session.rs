//! Secret sharing session
//!
//! A [`Session`] holds the threshold, the secret and one polynomial per secret
//! byte. It starts either as an encoder (secret supplied, coefficients drawn
//! at once) or as a decoder (empty until [`Session::recover`] succeeds). Both
//! end up able to compute and check shares.

use log::{debug, warn};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::{ShareIndex, Threshold};
use crate::error::{Result, ShareError};
use crate::lagrange;
use crate::polynomial::Polynomial;

/// One evaluation point of every per-byte polynomial
///
/// `fx[i]` is the polynomial for secret byte `i` evaluated at `x`. Shares carry
/// no checksum or tag: a corrupted share is only caught when redundant shares
/// are combined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// x-coordinate (1..=254)
    pub x: u8,
    /// f(x) for each secret byte
    #[serde(with = "hex")]
    pub fx: Vec<u8>,
}

/// Shamir secret sharing over byte strings
pub struct Session {
    threshold: Threshold,
    secret: Option<Zeroizing<Vec<u8>>>,
    coefficients: Option<Vec<Polynomial>>,
}

impl Session {
    /// Creates a session from a raw threshold, as an encoder when `secret` is given
    ///
    /// Randomness comes from the operating system. Use [`Session::encoder`] to
    /// supply another generator.
    ///
    /// # Errors
    /// Returns [`ShareError::InvalidThreshold`] if threshold is outside 1..=255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polyshare::Session;
    ///
    /// let encoder = Session::new(2, Some(b"sec")).unwrap();
    /// let a = encoder.compute(1).unwrap();
    /// let b = encoder.compute(2).unwrap();
    ///
    /// let mut decoder = Session::new(2, None).unwrap();
    /// assert_eq!(decoder.recover(&[a, b]).unwrap(), b"sec");
    ///
    /// assert!(Session::new(0, None).is_err());
    /// assert!(Session::new(256, None).is_err());
    /// ```
    pub fn new(threshold: usize, secret: Option<&[u8]>) -> Result<Self> {
        let threshold = Threshold::try_from(threshold)?;
        Ok(match secret {
            Some(secret) => Self::with_secret(threshold, secret),
            None => Self::decoder(threshold),
        })
    }

    /// Creates an empty session waiting for [`Session::recover`]
    #[must_use]
    pub fn decoder(threshold: Threshold) -> Self {
        Self {
            threshold,
            secret: None,
            coefficients: None,
        }
    }

    /// Creates an encoder using OS randomness for the polynomial coefficients
    #[must_use]
    pub fn with_secret(threshold: Threshold, secret: &[u8]) -> Self {
        Self::encoder(threshold, secret, &mut OsRng)
    }

    /// Creates an encoder, drawing `threshold - 1` random coefficients per
    /// secret byte from `rng`
    pub fn encoder<R>(threshold: Threshold, secret: &[u8], rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let coefficients: Vec<Polynomial> = secret
            .iter()
            .map(|&byte| Polynomial::random(byte, threshold, &mut *rng))
            .collect();

        debug!(
            "Encoder session created: threshold {}, {} secret bytes",
            threshold,
            secret.len()
        );

        Self {
            threshold,
            secret: Some(Zeroizing::new(secret.to_vec())),
            coefficients: Some(coefficients),
        }
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// The secret, once supplied or recovered
    #[must_use]
    pub fn secret(&self) -> Option<&[u8]> {
        self.secret.as_deref().map(Vec::as_slice)
    }

    /// Per-byte polynomials, once supplied or recovered
    #[must_use]
    pub fn coefficients(&self) -> Option<&[Polynomial]> {
        self.coefficients.as_deref()
    }

    /// True when the session can compute and validate shares
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Computes the share at `x`
    ///
    /// # Errors
    /// - [`ShareError::NotInitialized`] before a secret is known
    /// - [`ShareError::InvalidShareIndex`] if `x` is 0 or 255
    pub fn compute(&self, x: u8) -> Result<Share> {
        let coefficients = self
            .coefficients
            .as_ref()
            .ok_or(ShareError::NotInitialized)?;
        let index = ShareIndex::new(x)?;

        let mut fx = Vec::with_capacity(coefficients.len());
        fx.extend(coefficients.iter().map(|p| p.evaluate(index)));

        Ok(Share { x, fx })
    }

    /// Checks a share against the known polynomials
    ///
    /// Returns `Ok(true)` only if every byte matches a freshly computed share.
    ///
    /// # Errors
    /// - [`ShareError::NotInitialized`] before a secret is known
    /// - [`ShareError::LengthMismatch`] if the share length differs from the secret length
    /// - [`ShareError::InvalidShareIndex`] if `share.x` is 0 or 255
    pub fn is_valid(&self, share: &Share) -> Result<bool> {
        let coefficients = self
            .coefficients
            .as_ref()
            .ok_or(ShareError::NotInitialized)?;
        if share.fx.len() != coefficients.len() {
            return Err(ShareError::LengthMismatch {
                expected: coefficients.len(),
                actual: share.fx.len(),
            });
        }

        let expected = self.compute(share.x)?;
        Ok(expected.fx == share.fx)
    }

    /// Recovers the secret and every coefficient from `shares`
    ///
    /// Shares repeating an x-coordinate are dropped, keeping the first
    /// occurrence. With more unique shares than the threshold, every byte
    /// position must pass the degree-consistency check. Nothing is stored
    /// unless all positions succeed.
    ///
    /// # Errors
    /// - [`ShareError::InvalidShareIndex`] if any share has x = 0 or 255
    /// - [`ShareError::InsufficientShares`] with fewer unique shares than the threshold
    /// - [`ShareError::AlreadyDecoded`] if the session already holds a secret
    /// - [`ShareError::MalformedShares`] if shares differ in length
    /// - [`ShareError::InconsistentShares`] if redundant shares disagree
    pub fn recover(&mut self, shares: &[Share]) -> Result<&[u8]> {
        for share in shares {
            ShareIndex::new(share.x)?;
        }

        let mut seen = [false; 256];
        let unique: Vec<&Share> = shares
            .iter()
            .filter(|share| !std::mem::replace(&mut seen[usize::from(share.x)], true))
            .collect();
        if unique.len() < shares.len() {
            debug!(
                "Dropped {} shares with repeated x-coordinates",
                shares.len() - unique.len()
            );
        }

        if unique.len() < self.threshold.get() {
            return Err(ShareError::InsufficientShares {
                threshold: *self.threshold,
                unique: unique.len(),
            });
        }
        if self.secret.is_some() {
            return Err(ShareError::AlreadyDecoded);
        }

        let secret_len = unique[0].fx.len();
        if let Some(odd) = unique.iter().find(|share| share.fx.len() != secret_len) {
            return Err(ShareError::MalformedShares {
                expected: secret_len,
                actual: odd.fx.len(),
            });
        }

        let xs: Vec<u8> = unique.iter().map(|share| share.x).collect();
        let basis = lagrange::Basis::new(&xs)?;

        let mut ys = Zeroizing::new(Vec::with_capacity(unique.len()));
        let mut coefficients = Vec::with_capacity(secret_len);
        for position in 0..secret_len {
            ys.clear();
            ys.extend(unique.iter().map(|share| share.fx[position]));

            let polynomial = basis.interpolate(&ys)?;
            if let Err(err) = lagrange::check_degree(&polynomial, self.threshold) {
                warn!(
                    "Byte {position} of {} unique shares fails the degree check",
                    unique.len()
                );
                return Err(err);
            }
            coefficients.push(polynomial);
        }

        let secret: Vec<u8> = coefficients
            .iter()
            .map(|p| p.constant_term().unwrap_or_default())
            .collect();

        debug!(
            "Recovered {} secret bytes from {} unique shares",
            secret.len(),
            unique.len()
        );

        self.coefficients = Some(coefficients);
        Ok(self.secret.insert(Zeroizing::new(secret)).as_slice())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("threshold", &*self.threshold)
            .field("secret_len", &self.secret.as_ref().map(|s| s.len()))
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
