//! Threshold secret sharing over byte strings
//!
//! Each byte of a secret is hidden as the constant term of its own random
//! polynomial over GF(256); a share is every polynomial evaluated at one
//! x-coordinate. Any `threshold` distinct shares rebuild the polynomials by
//! Lagrange interpolation, fewer reveal nothing.
//!
//! Shares carry no authentication. When more shares than the threshold are
//! combined, the surplus must interpolate to zero higher-order coefficients,
//! which catches corrupted or mismatched shares. With exactly `threshold`
//! shares a corrupted share decodes silently to a wrong secret.
//!
//! ```rust
//! use polyshare::Session;
//! use polyshare::domain::Threshold;
//!
//! # fn main() -> Result<(), polyshare::ShareError> {
//! let threshold = Threshold::new(2)?;
//! let encoder = Session::with_secret(threshold, b"attack at dawn");
//! let shares: Vec<_> = (1..=3).map(|x| encoder.compute(x)).collect::<Result<_, _>>()?;
//!
//! let mut decoder = Session::decoder(threshold);
//! assert_eq!(decoder.recover(&shares[1..])?, b"attack at dawn");
//! assert!(decoder.is_valid(&shares[0])?);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod gf256;
pub mod lagrange;
pub mod polynomial;
pub mod session;

pub use error::ShareError;
pub use polynomial::Polynomial;
pub use session::{Session, Share};
