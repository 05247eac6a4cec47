//! Reservation: one booking of a room over a stay period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FrontDeskError, ValidationError};
use crate::id::{ReservationId, RoomNumber};
use crate::money::Money;
use crate::stay::StayPeriod;
use crate::time::Timestamp;

/// A persisted reservation. Immutable once booked; only deletion removes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest_name: String,
    pub room: RoomNumber,
    #[serde(flatten)]
    pub stay: StayPeriod,
    pub price: Money,
    pub special_requests: String,
    pub created_at: Timestamp,
}

impl Reservation {
    #[must_use]
    pub fn check_in(&self) -> NaiveDate {
        self.stay.check_in()
    }

    #[must_use]
    pub fn check_out(&self) -> NaiveDate {
        self.stay.check_out()
    }
}

/// Validated booking data, ready to be priced and stored.
///
/// Has no id, price, or timestamp yet; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub guest_name: String,
    pub room: RoomNumber,
    pub stay: StayPeriod,
    pub special_requests: String,
}

/// Raw booking input as collected from the clerk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub guest_name: String,
    pub room: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub special_requests: String,
}

impl BookingRequest {
    /// Create a builder for constructing a [`BookingRequest`].
    #[must_use]
    pub fn builder() -> BookingRequestBuilder {
        BookingRequestBuilder::default()
    }

    /// Check the input and produce a [`NewReservation`].
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::Validation`] when the guest name is empty,
    /// the room is not a positive number, or check-out is not after check-in.
    pub fn validate(self) -> Result<NewReservation, FrontDeskError> {
        let guest_name = self.guest_name.trim();
        if guest_name.is_empty() {
            return Err(ValidationError::EmptyGuestName.into());
        }
        let room = RoomNumber::new(self.room)?;
        let stay = StayPeriod::new(self.check_in, self.check_out)?;

        Ok(NewReservation {
            guest_name: guest_name.to_string(),
            room,
            stay,
            special_requests: self.special_requests,
        })
    }
}

/// Step-by-step builder for [`BookingRequest`].
#[derive(Debug, Default)]
pub struct BookingRequestBuilder {
    guest_name: Option<String>,
    room: Option<i64>,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    special_requests: Option<String>,
}

impl BookingRequestBuilder {
    #[must_use]
    pub fn guest_name(mut self, guest_name: impl Into<String>) -> Self {
        self.guest_name = Some(guest_name.into());
        self
    }

    #[must_use]
    pub fn room(mut self, room: i64) -> Self {
        self.room = Some(room);
        self
    }

    #[must_use]
    pub fn check_in(mut self, check_in: NaiveDate) -> Self {
        self.check_in = Some(check_in);
        self
    }

    #[must_use]
    pub fn check_out(mut self, check_out: NaiveDate) -> Self {
        self.check_out = Some(check_out);
        self
    }

    #[must_use]
    pub fn special_requests(mut self, special_requests: impl Into<String>) -> Self {
        self.special_requests = Some(special_requests.into());
        self
    }

    /// Consume the builder. Missing fields fall back to values that fail
    /// validation (empty name, room 0, a zero-night stay).
    #[must_use]
    pub fn build(self) -> BookingRequest {
        let check_in = self.check_in.unwrap_or_default();
        BookingRequest {
            guest_name: self.guest_name.unwrap_or_default(),
            room: self.room.unwrap_or_default(),
            check_in,
            check_out: self.check_out.unwrap_or(check_in),
            special_requests: self.special_requests.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn valid_request() -> BookingRequestBuilder {
        BookingRequest::builder()
            .guest_name("Alice")
            .room(5)
            .check_in(date(1))
            .check_out(date(5))
    }

    #[test]
    fn should_validate_complete_request() {
        let new = valid_request()
            .special_requests("late arrival")
            .build()
            .validate()
            .unwrap();
        assert_eq!(new.guest_name, "Alice");
        assert_eq!(new.room.get(), 5);
        assert_eq!(new.stay.nights(), 4);
        assert_eq!(new.special_requests, "late arrival");
    }

    #[test]
    fn should_reject_empty_guest_name() {
        let result = valid_request().guest_name("").build().validate();
        assert!(matches!(
            result,
            Err(FrontDeskError::Validation(ValidationError::EmptyGuestName))
        ));
    }

    #[test]
    fn should_reject_blank_guest_name() {
        let result = valid_request().guest_name("   ").build().validate();
        assert!(matches!(
            result,
            Err(FrontDeskError::Validation(ValidationError::EmptyGuestName))
        ));
    }

    #[test]
    fn should_store_guest_name_without_surrounding_whitespace() {
        let new = valid_request()
            .guest_name("  Alice \t")
            .build()
            .validate()
            .unwrap();
        assert_eq!(new.guest_name, "Alice");
    }

    #[test]
    fn should_reject_negative_room() {
        let result = valid_request().room(-3).build().validate();
        assert!(matches!(
            result,
            Err(FrontDeskError::Validation(ValidationError::InvalidRoom(-3)))
        ));
    }

    #[test]
    fn should_reject_inverted_dates() {
        let result = valid_request()
            .check_in(date(5))
            .check_out(date(1))
            .build()
            .validate();
        assert!(matches!(
            result,
            Err(FrontDeskError::Validation(
                ValidationError::InvalidStayPeriod { .. }
            ))
        ));
    }

    #[test]
    fn should_fail_validation_when_builder_left_empty() {
        assert!(BookingRequest::builder().build().validate().is_err());
    }

    #[test]
    fn should_flatten_stay_when_serializing_reservation() {
        let reservation = Reservation {
            id: ReservationId::from_raw(1),
            guest_name: "Alice".to_string(),
            room: RoomNumber::new(5).unwrap(),
            stay: StayPeriod::new(date(1), date(5)).unwrap(),
            price: Money::new(6000.0).unwrap(),
            special_requests: String::new(),
            created_at: chrono::DateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["check_in"], "2024-01-01");
        assert_eq!(json["check_out"], "2024-01-05");
        assert_eq!(json["room"], 5);
        assert_eq!(json["price"], 6000.0);

        let parsed: Reservation = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, reservation);
    }
}
