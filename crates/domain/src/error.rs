//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FrontDeskError`] via `From`, so the form layer only has to match on
//! three cases: the input was wrong, the room is taken, or the store failed.

use chrono::NaiveDate;

use crate::id::RoomNumber;

/// Top-level error returned by every booking operation.
#[derive(Debug, thiserror::Error)]
pub enum FrontDeskError {
    /// The caller supplied invalid input. Nothing was written.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The requested stay conflicts with an existing reservation.
    #[error(transparent)]
    RoomUnavailable(#[from] RoomUnavailableError),

    /// The store could not complete the operation.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Rejected input, raised before the store is touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("guest name must not be empty")]
    EmptyGuestName,

    #[error("room must be a positive number, got {0}")]
    InvalidRoom(i64),

    #[error("room must be a number, got {0:?}")]
    RoomNotNumeric(String),

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("check-out ({check_out}) must be after check-in ({check_in})")]
    InvalidStayPeriod {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("nightly rate must be a finite, non-negative amount, got {0}")]
    InvalidNightlyRate(f64),
}

/// The room already has a reservation overlapping the requested stay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("room {room} is not available from {check_in} to {check_out}")]
pub struct RoomUnavailableError {
    pub room: RoomNumber,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_the_room_when_unavailable() {
        let err = RoomUnavailableError {
            room: RoomNumber::new(12).unwrap(),
            check_in: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "room 12 is not available from 2024-01-01 to 2024-01-05"
        );
    }

    #[test]
    fn should_wrap_validation_error_via_from() {
        let err: FrontDeskError = ValidationError::EmptyGuestName.into();
        assert!(matches!(
            err,
            FrontDeskError::Validation(ValidationError::EmptyGuestName)
        ));
        assert_eq!(
            err.to_string(),
            "validation error: guest name must not be empty"
        );
    }

    #[test]
    fn should_display_invalid_stay_period() {
        let err = ValidationError::InvalidStayPeriod {
            check_in: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "check-out (2024-01-05) must be after check-in (2024-01-05)"
        );
    }
}
