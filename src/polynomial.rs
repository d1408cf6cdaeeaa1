//! Polynomials over GF(256)
//!
//! A [`Polynomial`] is a coefficient vector in increasing-degree order, so
//! `coefficients()[0]` is the constant term. One polynomial exists per secret
//! byte, with the secret byte as its constant term.

use std::ops::{Add, Mul};

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::{ShareIndex, Threshold};
use crate::gf256;

/// Coefficient vector over GF(256), index = degree
///
/// Coefficients are secret material and are wiped when dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Polynomial {
    coefficients: Vec<u8>,
}

impl Polynomial {
    /// Wraps a coefficient vector (constant term first)
    #[must_use]
    pub fn new(coefficients: Vec<u8>) -> Self {
        Self { coefficients }
    }

    /// Degree-zero polynomial
    #[must_use]
    pub fn constant(value: u8) -> Self {
        Self::new(vec![value])
    }

    /// Builds `constant + c1*x + ... + c_{t-1}*x^{t-1}` with random `c1..c_{t-1}`
    ///
    /// Draws exactly `threshold - 1` bytes from `rng`.
    pub fn random<R>(constant: u8, threshold: Threshold, rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut coefficients = vec![0u8; threshold.get()];
        coefficients[0] = constant;
        rng.fill_bytes(&mut coefficients[1..]);
        Self { coefficients }
    }

    #[must_use]
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The constant term, i.e. the secret byte this polynomial hides
    #[must_use]
    pub fn constant_term(&self) -> Option<u8> {
        self.coefficients.first().copied()
    }

    /// True when every coefficient of degree >= `degree` is zero
    #[must_use]
    pub fn vanishes_from(&self, degree: usize) -> bool {
        self.coefficients
            .get(degree..)
            .is_none_or(|high| high.iter().all(|&c| c == 0))
    }

    /// Evaluates the polynomial at `x`
    ///
    /// Keeps a running power `x^i` instead of Horner's reversed walk so the
    /// coefficients are consumed in storage order. `x` is a [`ShareIndex`],
    /// so evaluation at 0 (which would reveal the constant term) cannot be
    /// requested.
    #[must_use]
    pub fn evaluate(&self, x: ShareIndex) -> u8 {
        let x = *x;
        let mut accumulator = 0u8;
        let mut x_i = 1u8;
        for &c in &self.coefficients {
            accumulator = gf256::add(accumulator, gf256::mul(c, x_i));
            x_i = gf256::mul(x_i, x);
        }
        accumulator
    }

    /// Multiplies every coefficient by a field element
    #[must_use]
    pub fn scale(&self, factor: u8) -> Self {
        Self::new(
            self.coefficients
                .iter()
                .map(|&c| gf256::mul(c, factor))
                .collect(),
        )
    }
}

impl From<Vec<u8>> for Polynomial {
    fn from(coefficients: Vec<u8>) -> Self {
        Self::new(coefficients)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    /// Pads the shorter operand with zero coefficients, then adds term-wise
    fn add(self, rhs: Self) -> Polynomial {
        let (long, short) = if self.len() >= rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let mut sum = long.coefficients.clone();
        for (acc, &c) in sum.iter_mut().zip(&short.coefficients) {
            *acc = gf256::add(*acc, c);
        }
        Polynomial::new(sum)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    /// Convolution: `result[k]` is the sum over `i + j = k` of `a[i] * b[j]`
    fn mul(self, rhs: Self) -> Polynomial {
        if self.is_empty() || rhs.is_empty() {
            return Polynomial::default();
        }

        let mut product = vec![0u8; self.len() + rhs.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coefficients.iter().enumerate() {
                product[i + j] = gf256::add(product[i + j], gf256::mul(a, b));
            }
        }
        Polynomial::new(product)
    }
}
