//! Galois Field GF(256) arithmetic
//!
//! Elements are bytes. Multiplication is taken modulo the irreducible polynomial
//! x^8 + x^4 + x^3 + x^2 + 1 (0x11D) with generator 2, through log/antilog
//! tables built at compile time.
//!
//! Shares are only portable between deployments using the same field
//! definition, so the reduction polynomial must never change.

use crate::error::{Result, ShareError};

/// Reduction polynomial x^8 + x^4 + x^3 + x^2 + 1
pub const REDUCTION_POLY: u16 = 0x11D;

/// Log and antilog tables
///
/// `exp` is doubled in length so `exp[log a + log b]` never needs a modulo.
struct Tables {
    log: [u8; 256],
    exp: [u8; 510],
}

impl Tables {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "value is reduced below 0x100 and i stays below 255"
    )]
    const fn build() -> Self {
        let mut log = [0u8; 256];
        let mut exp = [0u8; 510];

        let mut value: u16 = 1;
        let mut i = 0;
        while i < 255 {
            exp[i] = value as u8;
            exp[i + 255] = value as u8;
            log[value as usize] = i as u8;

            value <<= 1;
            if value & 0x100 != 0 {
                value ^= REDUCTION_POLY;
            }
            i += 1;
        }

        Self { log, exp }
    }
}

static TABLES: Tables = Tables::build();

/// Add two elements (XOR)
#[inline]
#[must_use]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtract two elements (same as add in characteristic 2)
#[inline]
#[must_use]
pub fn sub(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiply two elements
#[inline]
#[must_use]
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let log_a = TABLES.log[a as usize] as usize;
    let log_b = TABLES.log[b as usize] as usize;
    TABLES.exp[log_a + log_b]
}

/// Multiplicative inverse
///
/// # Errors
/// Returns [`ShareError::DivisionByZero`] for `a == 0`
#[inline]
pub fn inverse(a: u8) -> Result<u8> {
    if a == 0 {
        return Err(ShareError::DivisionByZero);
    }
    Ok(TABLES.exp[255 - TABLES.log[a as usize] as usize])
}

/// Divide `a` by `b`
///
/// # Errors
/// Returns [`ShareError::DivisionByZero`] for `b == 0`
#[inline]
pub fn div(a: u8, b: u8) -> Result<u8> {
    Ok(mul(a, inverse(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bitwise shift-and-add multiplication, independent of the tables
    fn slow_mul(mut a: u8, mut b: u8) -> u8 {
        let mut product = 0u8;
        while b != 0 {
            if b & 1 != 0 {
                product ^= a;
            }
            let carry = a & 0x80 != 0;
            a <<= 1;
            if carry {
                a ^= (REDUCTION_POLY & 0xFF) as u8;
            }
            b >>= 1;
        }
        product
    }

    #[test]
    fn test_add_is_xor() {
        assert_eq!(add(0x53, 0xCA), 0x99);
        assert_eq!(add(0, 0x53), 0x53);
        assert_eq!(add(0x53, 0x53), 0);
        assert_eq!(sub(0x99, 0xCA), 0x53);
    }

    #[test]
    fn test_mul_small_values() {
        assert_eq!(mul(0, 0x53), 0);
        assert_eq!(mul(0x53, 0), 0);
        assert_eq!(mul(1, 0x53), 0x53);
        assert_eq!(mul(2, 2), 4);
        // 0x80 * 2 = 0x100, reduced by 0x11D
        assert_eq!(mul(0x80, 2), 0x1D);
    }

    #[test]
    fn test_mul_matches_bitwise_reference() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(mul(a, b), slow_mul(a, b), "a={a} b={b}");
            }
        }
    }

    #[test]
    fn test_tables_cover_every_nonzero_element() {
        let mut seen = [false; 256];
        for &value in &TABLES.exp[..255] {
            assert!(!seen[value as usize], "generator repeats {value}");
            seen[value as usize] = true;
        }
        assert!(!seen[0]);
    }

    #[test]
    fn test_inverse_of_every_nonzero_element() {
        for a in 1..=255u8 {
            let inv = inverse(a).unwrap();
            assert_eq!(mul(a, inv), 1, "Failed for a={a}");
        }
        assert_eq!(inverse(1).unwrap(), 1);
    }

    #[test]
    fn test_inverse_of_zero_fails() {
        assert_eq!(inverse(0), Err(ShareError::DivisionByZero));
    }

    #[test]
    fn test_div() {
        assert_eq!(div(0x53, 0x53).unwrap(), 1);
        assert_eq!(div(0, 0x53).unwrap(), 0);
        let a = 0x53u8;
        let b = 0xCAu8;
        assert_eq!(mul(div(a, b).unwrap(), b), a);
        assert_eq!(div(7, 0), Err(ShareError::DivisionByZero));
    }

    #[test]
    fn test_distributive_law() {
        for a in [0u8, 1, 3, 0x53, 0xFF] {
            for b in [0u8, 2, 0x1D, 0xCA] {
                for c in [1u8, 9, 0x80, 0xFE] {
                    assert_eq!(mul(a, add(b, c)), add(mul(a, b), mul(a, c)));
                }
            }
        }
    }
}
