//! Lagrange interpolation over GF(256)
//!
//! Reconstructs the full coefficient vector of the interpolating polynomial,
//! not only its value at 0. Having every coefficient is what makes the
//! degree-consistency check possible, and it lets a decoded session compute
//! fresh shares afterwards.

use crate::domain::Threshold;
use crate::error::{Result, ShareError};
use crate::gf256;
use crate::polynomial::Polynomial;

/// Lagrange basis polynomials for a fixed set of x-coordinates
///
/// For each x_i the basis polynomial is the product, over every j != i, of
/// `(x - x_j) / (x_i - x_j)`, i.e. of the degree-1 polynomials
/// `[x_j / (x_i - x_j), 1 / (x_i - x_j)]`. Negation is the identity in
/// characteristic 2, so no sign handling is needed.
///
/// The basis depends only on the x-coordinates, so one `Basis` serves every
/// byte position of a share set: each interpolation is then a weighted sum of
/// the basis polynomials.
#[derive(Debug, Clone)]
pub struct Basis {
    polynomials: Vec<Polynomial>,
}

impl Basis {
    /// Builds the basis polynomials for pairwise distinct `xs`
    ///
    /// # Errors
    /// Returns [`ShareError::DivisionByZero`] if two x-coordinates are equal
    pub fn new(xs: &[u8]) -> Result<Self> {
        let mut polynomials = Vec::with_capacity(xs.len());

        for (i, &x_i) in xs.iter().enumerate() {
            let mut coefficients = Vec::with_capacity(xs.len());
            coefficients.push(1u8);

            for (j, &x_j) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                let denominator = gf256::sub(x_i, x_j);
                let constant = gf256::div(x_j, denominator)?;
                let linear = gf256::div(1, denominator)?;
                multiply_linear(&mut coefficients, constant, linear);
            }

            polynomials.push(Polynomial::new(coefficients));
        }

        Ok(Self { polynomials })
    }

    /// Number of x-coordinates, and of coefficients in every interpolation
    #[must_use]
    pub fn len(&self) -> usize {
        self.polynomials.len()
    }

    /// True when built from no x-coordinates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polynomials.is_empty()
    }

    /// Interpolates the polynomial taking `ys[i]` at the i-th x-coordinate
    ///
    /// # Errors
    /// Returns [`ShareError::LengthMismatch`] if `ys` does not have one value
    /// per x-coordinate
    pub fn interpolate(&self, ys: &[u8]) -> Result<Polynomial> {
        if ys.len() != self.len() {
            return Err(ShareError::LengthMismatch {
                expected: self.len(),
                actual: ys.len(),
            });
        }

        let mut coefficients = vec![0u8; self.len()];
        for (basis, &y) in self.polynomials.iter().zip(ys) {
            if y == 0 {
                continue;
            }
            for (acc, &b) in coefficients.iter_mut().zip(basis.coefficients()) {
                *acc = gf256::add(*acc, gf256::mul(b, y));
            }
        }

        Ok(Polynomial::new(coefficients))
    }
}

/// Multiplies `coefficients` in place by `constant + linear * x`
fn multiply_linear(coefficients: &mut Vec<u8>, constant: u8, linear: u8) {
    coefficients.push(0);
    for k in (0..coefficients.len()).rev() {
        let lower = if k == 0 { 0 } else { coefficients[k - 1] };
        coefficients[k] = gf256::add(
            gf256::mul(coefficients[k], constant),
            gf256::mul(lower, linear),
        );
    }
}

/// Interpolates the minimal-degree polynomial through `points`
///
/// `points` are `(x, f(x))` pairs with pairwise distinct x. The result has one
/// coefficient per point. Interpolating many value sets over the same
/// x-coordinates is cheaper through a shared [`Basis`].
///
/// # Errors
/// Returns [`ShareError::DivisionByZero`] if two points share an x-coordinate
pub fn interpolate(points: &[(u8, u8)]) -> Result<Polynomial> {
    let (xs, ys): (Vec<u8>, Vec<u8>) = points.iter().copied().unzip();
    Basis::new(&xs)?.interpolate(&ys)
}

/// Checks that redundant points agree on a polynomial of degree < threshold
///
/// With more than `threshold` points, a genuine degree `threshold - 1`
/// polynomial forces every coefficient from `threshold` upward to vanish.
/// With exactly `threshold` points there is no redundancy and nothing to check.
///
/// # Errors
/// Returns [`ShareError::InconsistentShares`] when a higher-order coefficient
/// is non-zero
pub fn check_degree(polynomial: &Polynomial, threshold: Threshold) -> Result<()> {
    if polynomial.len() > threshold.get() && !polynomial.vanishes_from(threshold.get()) {
        return Err(ShareError::InconsistentShares);
    }
    Ok(())
}
