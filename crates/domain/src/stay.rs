//! Stay period: the `[check_in, check_out)` interval a room is occupied.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A half-open date interval: the guest arrives on `check_in` and leaves on
/// `check_out`, so the room is free again on the check-out date.
///
/// Always satisfies `check_out > check_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStayPeriod")]
pub struct StayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

#[derive(Deserialize)]
struct RawStayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl TryFrom<RawStayPeriod> for StayPeriod {
    type Error = ValidationError;

    fn try_from(raw: RawStayPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.check_in, raw.check_out)
    }
}

impl StayPeriod {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStayPeriod`] unless `check_out`
    /// is strictly after `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, ValidationError> {
        if check_out <= check_in {
            return Err(ValidationError::InvalidStayPeriod {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    #[must_use]
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    #[must_use]
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights, always at least one.
    #[must_use]
    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        // NaiveDate spans fewer than u32::MAX days
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// `[a, b)` and `[c, d)` overlap iff `a < d && c < b`.
    ///
    /// A stay ending on the day another one starts does not overlap it.
    #[must_use]
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn stay(from: (u32, u32), to: (u32, u32)) -> StayPeriod {
        StayPeriod::new(date(from.0, from.1), date(to.0, to.1)).unwrap()
    }

    #[test]
    fn should_count_nights() {
        assert_eq!(stay((1, 1), (1, 5)).nights(), 4);
        assert_eq!(stay((1, 31), (2, 1)).nights(), 1);
    }

    #[test]
    fn should_reject_same_day_checkout() {
        let result = StayPeriod::new(date(1, 5), date(1, 5));
        assert!(matches!(
            result,
            Err(ValidationError::InvalidStayPeriod { .. })
        ));
    }

    #[test]
    fn should_reject_checkout_before_checkin() {
        assert!(StayPeriod::new(date(1, 5), date(1, 1)).is_err());
    }

    #[test]
    fn should_detect_overlap_symmetrically() {
        let cases = [
            (stay((1, 1), (1, 5)), stay((1, 3), (1, 7)), true),
            (stay((1, 1), (1, 5)), stay((1, 2), (1, 3)), true),
            (stay((1, 1), (1, 5)), stay((1, 1), (1, 5)), true),
            (stay((1, 1), (1, 5)), stay((1, 5), (1, 7)), false),
            (stay((1, 1), (1, 5)), stay((1, 6), (1, 9)), false),
        ];
        for (first, second, expected) in cases {
            assert_eq!(first.overlaps(&second), expected, "{first:?} vs {second:?}");
            assert_eq!(second.overlaps(&first), expected, "{second:?} vs {first:?}");
        }
    }

    #[test]
    fn should_allow_back_to_back_stays() {
        let first = stay((1, 1), (1, 5));
        let next = stay((1, 5), (1, 7));
        assert!(!first.overlaps(&next));
    }

    #[test]
    fn should_refuse_inverted_period_when_deserializing() {
        let json = r#"{"check_in":"2024-01-05","check_out":"2024-01-01"}"#;
        assert!(serde_json::from_str::<StayPeriod>(json).is_err());

        let json = r#"{"check_in":"2024-01-01","check_out":"2024-01-05"}"#;
        let parsed: StayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.nights(), 4);
    }
}
