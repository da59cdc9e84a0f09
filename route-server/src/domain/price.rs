//! Ticket prices.

use std::fmt;
use std::ops::Add;

use serde::Serialize;

/// Error returned when a price is negative or not a finite number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {reason}")]
pub struct InvalidPrice {
    reason: &'static str,
}

/// A non-negative, finite ticket price.
///
/// Prices are accumulated along a route and reported back, but never used
/// to choose between routes.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// The price of an empty route.
    pub const ZERO: Price = Price(0.0);

    /// Create a price, rejecting NaN, infinities and negative values.
    pub fn new(value: f64) -> Result<Self, InvalidPrice> {
        if !value.is_finite() {
            return Err(InvalidPrice {
                reason: "must be a finite number",
            });
        }
        if value < 0.0 {
            return Err(InvalidPrice {
                reason: "must not be negative",
            });
        }
        // Normalise -0.0 so that it prints and compares like zero.
        Ok(Price(value + 0.0))
    }

    /// Returns the price as a plain number.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Add for Price {
    type Output = Price;

    /// Saturates at `f64::MAX` so the sum stays finite.
    fn add(self, rhs: Price) -> Price {
        Price((self.0 + rhs.0).min(f64::MAX))
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
