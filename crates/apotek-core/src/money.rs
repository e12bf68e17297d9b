//! # Money Module
//!
//! Provides the `Rupiah` type for handling monetary values safely.
//!
//! ## Integer Money
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  All prices in the system are whole Indonesian rupiah stored as     │
//! │  i64. There is no fractional unit in circulation, so the smallest   │
//! │  currency unit IS the major unit:                                   │
//! │                                                                     │
//! │    Rupiah::from_idr(45_200)  →  displayed as "Rp 45,200"            │
//! │                                                                     │
//! │  Floating point never enters the arithmetic; only the display       │
//! │  layer formats the integer with thousands grouping.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use apotek_core::money::Rupiah;
//!
//! let price = Rupiah::from_idr(5_000);
//! let total = price * 3;
//! assert_eq!(total.idr(), 15_000);
//! assert_eq!(total.to_string(), "Rp 15,000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Rupiah Type
// =============================================================================

/// A monetary value in whole Indonesian rupiah.
///
/// Signed so that differences (e.g. value deltas between loads) stay
/// representable; stored prices themselves are always non-negative.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupiah(i64);

impl Rupiah {
    /// Creates a Rupiah value from a whole-rupiah amount.
    #[inline]
    pub const fn from_idr(idr: i64) -> Self {
        Rupiah(idr)
    }

    /// Returns the amount in whole rupiah.
    #[inline]
    pub const fn idr(&self) -> i64 {
        self.0
    }

    /// Zero rupiah.
    #[inline]
    pub const fn zero() -> Self {
        Rupiah(0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add for Rupiah {
    type Output = Rupiah;

    fn add(self, rhs: Rupiah) -> Rupiah {
        Rupiah(self.0 + rhs.0)
    }
}

impl AddAssign for Rupiah {
    fn add_assign(&mut self, rhs: Rupiah) {
        self.0 += rhs.0;
    }
}

impl Sub for Rupiah {
    type Output = Rupiah;

    fn sub(self, rhs: Rupiah) -> Rupiah {
        Rupiah(self.0 - rhs.0)
    }
}

impl SubAssign for Rupiah {
    fn sub_assign(&mut self, rhs: Rupiah) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Rupiah {
    type Output = Rupiah;

    fn mul(self, rhs: i64) -> Rupiah {
        Rupiah(self.0 * rhs)
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Rupiah>>(iter: I) -> Rupiah {
        iter.fold(Rupiah::zero(), Add::add)
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Rupiah {
    /// Formats as `Rp 1,234,567` with thousands grouping; negative values
    /// carry a leading minus sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        let offset = digits.len() % 3;
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{sign}Rp {grouped}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Rupiah::from_idr(5_000);
        let b = Rupiah::from_idr(1_500);
        assert_eq!((a + b).idr(), 6_500);
        assert_eq!((a - b).idr(), 3_500);
        assert_eq!((a * 4).idr(), 20_000);

        let mut c = a;
        c += b;
        assert_eq!(c.idr(), 6_500);
        c -= b;
        assert_eq!(c.idr(), 5_000);
    }

    #[test]
    fn test_sum() {
        let total: Rupiah = [1_000, 2_000, 3_000]
            .into_iter()
            .map(Rupiah::from_idr)
            .sum();
        assert_eq!(total.idr(), 6_000);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Rupiah::from_idr(0).to_string(), "Rp 0");
        assert_eq!(Rupiah::from_idr(999).to_string(), "Rp 999");
        assert_eq!(Rupiah::from_idr(1_000).to_string(), "Rp 1,000");
        assert_eq!(Rupiah::from_idr(45_200).to_string(), "Rp 45,200");
        assert_eq!(Rupiah::from_idr(45_200_000).to_string(), "Rp 45,200,000");
        assert_eq!(Rupiah::from_idr(-500).to_string(), "-Rp 500");
        assert_eq!(Rupiah::from_idr(-1_234_567).to_string(), "-Rp 1,234,567");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Rupiah::from_idr(5_000)).unwrap();
        assert_eq!(json, "5000");
        let parsed: Rupiah = serde_json::from_str("5000").unwrap();
        assert_eq!(parsed, Rupiah::from_idr(5_000));
    }
}
