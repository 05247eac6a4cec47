//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use frontdesk_domain::error::{FrontDeskError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Status code and user-facing message for a service error.
///
/// Storage failures are logged here and replaced by a generic message.
pub(crate) fn describe(err: &FrontDeskError) -> (StatusCode, String) {
    match err {
        FrontDeskError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        FrontDeskError::RoomUnavailable(err) => (
            StatusCode::CONFLICT,
            format!("Room {} is not available for the selected dates.", err.room),
        ),
        FrontDeskError::Storage(source) => {
            tracing::error!(error = %source, "storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The booking store could not complete the request; nothing was changed."
                    .to_string(),
            )
        }
    }
}

/// Maps [`FrontDeskError`] and unreadable request bodies to a JSON
/// response with appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    Service(FrontDeskError),
    /// The request body was not a well-formed JSON document of the expected shape.
    Body(JsonRejection),
}

impl From<FrontDeskError> for ApiError {
    fn from(err: FrontDeskError) -> Self {
        Self::Service(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Service(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Service(err) => describe(&err),
            Self::Body(rejection) => (rejection.status(), rejection.body_text()),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use frontdesk_domain::error::RoomUnavailableError;
    use frontdesk_domain::id::RoomNumber;

    #[test]
    fn should_map_validation_to_bad_request() {
        let (status, message) = describe(&ValidationError::EmptyGuestName.into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "guest name must not be empty");
    }

    #[test]
    fn should_map_unavailable_room_to_conflict_naming_the_room() {
        let err = RoomUnavailableError {
            room: RoomNumber::new(12).unwrap(),
            check_in: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        };
        let (status, message) = describe(&err.into());
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(message, "Room 12 is not available for the selected dates.");
    }

    #[test]
    fn should_hide_storage_details() {
        let err = FrontDeskError::Storage(Box::new(std::io::Error::other("disk on fire")));
        let (status, message) = describe(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message.contains("disk"));
    }
}
