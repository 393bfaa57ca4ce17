// ============================================================================
// Tick Arithmetic
// Integer price and quantity types for order matching
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

/// A price expressed as a whole number of ticks (the instrument's smallest
/// price increment).
///
/// Prices are non-negative by construction and totally ordered, so they can
/// be compared directly in the book's comparator. No floating point is
/// involved anywhere.
///
/// # Example
/// ```
/// use matchbook::numeric::Price;
///
/// let bid = Price::from_ticks(100)?;
/// let ask = Price::from_ticks(101)?;
/// assert!(bid < ask);
/// # Ok::<(), matchbook::numeric::NumericError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Price(i64);

impl Price {
    /// Zero ticks. Not a valid order price; see the engine's precondition
    /// checks.
    pub const ZERO: Self = Self(0);

    /// Create a price from a tick count.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the tick count is negative.
    #[inline]
    pub fn from_ticks(ticks: i64) -> NumericResult<Self> {
        if ticks < 0 {
            return Err(NumericError::InvalidInput);
        }
        Ok(Self(ticks))
    }

    /// Get the tick count.
    #[inline]
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Check if the price is strictly positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quantity expressed as a whole number of instrument units.
///
/// Quantities are non-negative by construction. All arithmetic is checked
/// and returns a [`NumericResult`]; nothing in this module panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Zero units.
    pub const ZERO: Self = Self(0);

    /// Create a quantity from a unit count.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the unit count is negative.
    #[inline]
    pub fn from_units(units: i64) -> NumericResult<Self> {
        if units < 0 {
            return Err(NumericError::InvalidInput);
        }
        Ok(Self(units))
    }

    /// Get the unit count.
    #[inline]
    pub const fn units(self) -> i64 {
        self.0
    }

    /// Check if the quantity is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if the quantity is strictly positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the result exceeds `i64::MAX`.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Underflow` if the result would be negative.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 > self.0 {
            return Err(NumericError::Underflow);
        }
        Ok(Self(self.0 - rhs.0))
    }

    /// Subtraction saturating at zero.
    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self((self.0 - rhs.0).max(0))
    }

    /// The smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
