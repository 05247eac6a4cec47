//! Dashboard page showing one room's occupancy.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use frontdesk_app::ports::ReservationRepository;
use frontdesk_domain::error::FrontDeskError;
use frontdesk_domain::id::RoomNumber;
use frontdesk_domain::reservation::Reservation;

use super::{DashboardError, render};
use crate::state::AppState;

/// Room occupancy page template.
#[derive(Template)]
#[template(path = "room.html")]
pub struct RoomTemplate {
    currency: String,
    room: RoomNumber,
    reservations: Vec<Reservation>,
}

impl IntoResponse for RoomTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// `GET /rooms/:room`: every reservation for a room, by check-in date.
pub async fn detail<R>(
    State(state): State<AppState<R>>,
    Path(room): Path<String>,
) -> Result<RoomTemplate, DashboardError>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let room: RoomNumber = room.parse().map_err(FrontDeskError::from)?;
    let reservations = state.booking_service.list_for_room(room).await?;

    Ok(RoomTemplate {
        currency: state.display.currency_symbol.clone(),
        room,
        reservations,
    })
}
