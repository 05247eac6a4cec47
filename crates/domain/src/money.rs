//! Money and the nightly tariff used to quote a stay.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::stay::StayPeriod;

/// Price per night applied when no other rate is configured.
pub const DEFAULT_NIGHTLY_RATE: f64 = 1500.0;

/// A non-negative amount of the hotel's currency.
///
/// The currency symbol is a display concern and is not stored here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNightlyRate`] for negative or
    /// non-finite amounts.
    pub fn new(amount: f64) -> Result<Self, ValidationError> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(Self(amount))
        } else {
            Err(ValidationError::InvalidNightlyRate(amount))
        }
    }

    /// Wrap an amount read back from the store without re-validating it.
    #[must_use]
    pub fn from_stored(amount: f64) -> Self {
        Self(amount)
    }

    #[must_use]
    pub fn amount(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Pricing rule: a flat rate per night, no discounts, no rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    nightly_rate: Money,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            nightly_rate: Money(DEFAULT_NIGHTLY_RATE),
        }
    }
}

impl Tariff {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNightlyRate`] when the rate is
    /// negative or not finite.
    pub fn new(nightly_rate: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            nightly_rate: Money::new(nightly_rate)?,
        })
    }

    #[must_use]
    pub fn nightly_rate(&self) -> Money {
        self.nightly_rate
    }

    /// `nightly_rate * nights`.
    #[must_use]
    pub fn quote(&self, stay: &StayPeriod) -> Money {
        Money(self.nightly_rate.0 * f64::from(stay.nights()))
    }
}
