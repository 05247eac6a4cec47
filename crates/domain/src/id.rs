//! Typed identifiers: the store-assigned reservation key and the room number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Surrogate key of a [`Reservation`](crate::reservation::Reservation),
/// assigned by the store on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wrap a key handed out by the store.
    #[must_use]
    pub fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Access the inner key.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A physical room, identified by a positive number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// Validate a raw room number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRoom`] when `value` is zero,
    /// negative, or too large to be a room number.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match u32::try_from(value) {
            Ok(room) if room > 0 => Ok(Self(room)),
            _ => Err(ValidationError::InvalidRoom(value)),
        }
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Parse text typed into a form field.
impl FromStr for RoomNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ValidationError::RoomNotNumeric(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<i64> for RoomNumber {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomNumber> for i64 {
    fn from(room: RoomNumber) -> Self {
        i64::from(room.0)
    }
}
