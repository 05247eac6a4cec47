//! Dashboard pages for booking, listing, searching, and cancelling.

use askama::Template;
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use frontdesk_app::ports::ReservationRepository;
use frontdesk_domain::error::ValidationError;
use frontdesk_domain::money::Money;
use frontdesk_domain::reservation::{BookingRequest, Reservation};
use frontdesk_domain::time::{next_day, parse_date, today};

use super::{DashboardError, Notice, NoticeKind, render};
use crate::state::AppState;

/// Booking form fields exactly as typed by the clerk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub name: String,
    pub room: String,
    pub check_in: String,
    pub check_out: String,
    pub special_requests: String,
}

impl BookingForm {
    /// Empty form with today and tomorrow preselected.
    fn blank() -> Self {
        let check_in = today();
        Self {
            check_in: check_in.to_string(),
            check_out: next_day(check_in).to_string(),
            ..Self::default()
        }
    }

    /// Parse the text fields into a [`BookingRequest`].
    ///
    /// Range checks (positive room, check-out after check-in) are left to
    /// the service so they are enforced for every caller.
    fn to_request(&self) -> Result<BookingRequest, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyGuestName);
        }
        let room_text = self.room.trim();
        let room: i64 = room_text
            .parse()
            .map_err(|_| ValidationError::RoomNotNumeric(room_text.to_string()))?;

        Ok(BookingRequest::builder()
            .guest_name(name)
            .room(room)
            .check_in(parse_date(&self.check_in)?)
            .check_out(parse_date(&self.check_out)?)
            .special_requests(self.special_requests.trim_end())
            .build())
    }
}

/// Main desk page: booking form plus every booking.
#[derive(Template)]
#[template(path = "bookings.html")]
pub struct BookingsTemplate {
    currency: String,
    nightly_rate: Money,
    form: BookingForm,
    notice: Option<Notice>,
    /// `None` when the list could not be read back from the store.
    reservations: Option<Vec<Reservation>>,
}

impl IntoResponse for BookingsTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// Search results page.
#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    currency: String,
    guest: String,
    searched: bool,
    reservations: Vec<Reservation>,
}

impl IntoResponse for SearchTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

fn desk<R>(
    state: &AppState<R>,
    form: BookingForm,
    notice: Option<Notice>,
    reservations: Option<Vec<Reservation>>,
) -> BookingsTemplate
where
    R: ReservationRepository + Send + Sync + 'static,
{
    BookingsTemplate {
        currency: state.display.currency_symbol.clone(),
        nightly_rate: state.booking_service.tariff().nightly_rate(),
        form,
        notice,
        reservations,
    }
}

/// Desk shown after a write attempt.
///
/// A failed reload keeps the outcome notice and only drops the list.
async fn desk_after_write<R>(
    state: &AppState<R>,
    form: BookingForm,
    notice: Notice,
) -> BookingsTemplate
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let reservations = match state.booking_service.list_all().await {
        Ok(reservations) => Some(reservations),
        Err(err) => {
            tracing::error!(error = %err, "could not reload bookings after a write");
            None
        }
    };
    desk(state, form, Some(notice), reservations)
}

/// `GET /`: booking form and list of all bookings.
pub async fn index<R>(State(state): State<AppState<R>>) -> Result<BookingsTemplate, DashboardError>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let reservations = state.booking_service.list_all().await?;
    Ok(desk(&state, BookingForm::blank(), None, Some(reservations)))
}

/// `POST /bookings`: book a room, then show the desk with the outcome.
///
/// On failure the form keeps what the clerk typed.
pub async fn book<R>(
    State(state): State<AppState<R>>,
    Form(form): Form<BookingForm>,
) -> (StatusCode, BookingsTemplate)
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let outcome = match form.to_request() {
        Ok(request) => state.booking_service.book(request).await,
        Err(err) => Err(err.into()),
    };

    let (status, notice, form) = match outcome {
        Ok(reservation) => {
            let notice = Notice::new(
                NoticeKind::Success,
                "Booking Successful",
                vec![
                    format!(
                        "Room {} booked successfully for {}",
                        reservation.room, reservation.guest_name
                    ),
                    format!(
                        "Total Price: {}{}",
                        state.display.currency_symbol, reservation.price
                    ),
                ],
            );
            (StatusCode::OK, notice, BookingForm::blank())
        }
        Err(err) => {
            let (status, notice) = Notice::from_error(&err);
            (status, notice, form)
        }
    };

    let page = desk_after_write(&state, form, notice).await;
    (status, page)
}

/// Query string of the search page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub guest: String,
}

/// `GET /search?guest=NAME`: bookings for one guest (exact name).
pub async fn search<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<SearchQuery>,
) -> Result<SearchTemplate, DashboardError>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let guest = query.guest.trim().to_string();
    let searched = !guest.is_empty();
    let reservations = if searched {
        state.booking_service.find_by_guest(&guest).await?
    } else {
        Vec::new()
    };

    Ok(SearchTemplate {
        currency: state.display.currency_symbol.clone(),
        guest,
        searched,
        reservations,
    })
}

/// Cancel form field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CancelForm {
    pub guest: String,
}

/// `POST /cancel`: cancel every booking for a guest.
pub async fn cancel<R>(
    State(state): State<AppState<R>>,
    Form(form): Form<CancelForm>,
) -> (StatusCode, BookingsTemplate)
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let guest = form.guest.trim();

    let (status, notice) = match state.booking_service.cancel_by_guest(guest).await {
        Ok(0) => (
            StatusCode::OK,
            Notice::new(
                NoticeKind::Info,
                "Nothing to cancel",
                vec![format!("No bookings found for {guest}.")],
            ),
        ),
        Ok(deleted) => (
            StatusCode::OK,
            Notice::new(
                NoticeKind::Success,
                "Booking Canceled",
                vec![
                    format!("Booking(s) for {guest} canceled."),
                    format!("{deleted} reservation(s) removed."),
                ],
            ),
        ),
        Err(err) => Notice::from_error(&err),
    };

    let page = desk_after_write(&state, BookingForm::blank(), notice).await;
    (status, page)
}
