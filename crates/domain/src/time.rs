//! Time, timestamp, and calendar-date helpers.

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::error::ValidationError;

/// UTC timestamp used for `created_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Return the day after `date`, saturating at the last representable date.
#[must_use]
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

/// Parse an ISO `YYYY-MM-DD` date as produced by `<input type="date">`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when the text is not a valid date.
pub fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}
