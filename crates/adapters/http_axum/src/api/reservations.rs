//! JSON REST handlers for reservations.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use frontdesk_app::ports::ReservationRepository;
use frontdesk_domain::id::RoomNumber;
use frontdesk_domain::reservation::{BookingRequest, Reservation};

use crate::error::ApiError;
use crate::state::AppState;

/// Optional guest filter for list and cancel.
#[derive(Debug, Default, Deserialize)]
pub struct GuestQuery {
    pub guest: Option<String>,
}

/// Body returned after a cancellation.
#[derive(Debug, Serialize)]
pub struct CancelBody {
    pub deleted: u64,
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Reservation>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Reservation>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the cancel endpoint.
pub enum CancelResponse {
    Ok(Json<CancelBody>),
}

impl IntoResponse for CancelResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/reservations[?guest=NAME]`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<GuestQuery>,
) -> Result<ListResponse, ApiError>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let reservations = match query.guest {
        Some(guest) => state.booking_service.find_by_guest(&guest).await?,
        None => state.booking_service.list_all().await?,
    };
    Ok(ListResponse::Ok(Json(reservations)))
}

/// `GET /api/rooms/:room/reservations`
pub async fn list_for_room<R>(
    State(state): State<AppState<R>>,
    Path(room): Path<String>,
) -> Result<ListResponse, ApiError>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let room: RoomNumber = room.parse()?;
    let reservations = state.booking_service.list_for_room(room).await?;
    Ok(ListResponse::Ok(Json(reservations)))
}

/// `POST /api/reservations`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let created = state.booking_service.book(req).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/reservations?guest=NAME`
pub async fn cancel<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<GuestQuery>,
) -> Result<CancelResponse, ApiError>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let guest = query.guest.unwrap_or_default();
    let deleted = state.booking_service.cancel_by_guest(&guest).await?;
    Ok(CancelResponse::Ok(Json(CancelBody { deleted })))
}
