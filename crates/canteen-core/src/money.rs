//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHERE FRACTIONS ARE ALLOWED                                            │
//! │                                                                         │
//! │  Prices, individual totals, shared totals, grand total:                │
//! │    whole paise (i64)  → sums are exact, both grand-total               │
//! │    formulations agree to the paisa                                     │
//! │                                                                         │
//! │  Shared cost per participant:                                          │
//! │    ₹10 / 3 people = 3.333... (f64, NOT rounded)                        │
//! │    Rounding is a display concern, never an engine concern              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use canteen_core::money::Money;
//!
//! let puri = Money::from_major(8);           // ₹8.00
//! let line = puri.multiply_quantity(2);      // ₹16.00
//! assert_eq!(line.minor(), 1600);
//!
//! // Splitting is the one place a fraction appears
//! assert_eq!(Money::from_major(15).split_evenly(3), 5.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

use crate::MINOR_UNITS_PER_MAJOR;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// Serialized as the bare integer, so a persisted `unitPrice` of `850` is
/// ₹8.50.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (paise).
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole major units (rupees).
    ///
    /// ## Example
    /// ```rust
    /// use canteen_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(9).minor(), 900);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_UNITS_PER_MAJOR)
    }

    /// Creates a Money value from major and minor parts.
    ///
    /// `from_major_minor(8, 50)` is ₹8.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * MINOR_UNITS_PER_MAJOR - minor)
        } else {
            Money(major * MINOR_UNITS_PER_MAJOR + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole major-unit portion.
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / MINOR_UNITS_PER_MAJOR
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_UNITS_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns the amount in major units as a real number.
    ///
    /// ```rust
    /// use canteen_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(850).as_major(), 8.5);
    /// ```
    #[inline]
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / MINOR_UNITS_PER_MAJOR as f64
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// Takes a `u64` so per-item sums across the roster fit without
    /// capping. Saturates instead of overflowing.
    #[inline]
    pub const fn multiply_quantity(&self, qty: u64) -> Self {
        let qty = if qty > i64::MAX as u64 { i64::MAX } else { qty as i64 };
        Money(self.0.saturating_mul(qty))
    }

    /// Splits the amount equally among `parts` payers.
    ///
    /// Returns the exact quotient in major units. No rounding is applied.
    /// With zero payers the share is `0.0`: nobody is charged.
    ///
    /// ## Example
    /// ```rust
    /// use canteen_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(15).split_evenly(3), 5.0);
    /// assert!((Money::from_major(10).split_evenly(3) - 10.0 / 3.0).abs() < 1e-12);
    /// assert_eq!(Money::from_major(9).split_evenly(0), 0.0);
    /// ```
    pub fn split_evenly(&self, parts: usize) -> f64 {
        if parts == 0 {
            return 0.0;
        }
        self.0 as f64 / (MINOR_UNITS_PER_MAJOR as f64 * parts as f64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering. The CLI formats with its configured symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}₹{}.{:02}",
            sign,
            self.major_part().abs(),
            self.minor_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
