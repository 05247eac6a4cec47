//! JSON handlers for availability checks and price quotes.

use axum::Json;
use axum::extract::{Query, State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use frontdesk_app::ports::ReservationRepository;
use frontdesk_domain::id::RoomNumber;
use frontdesk_domain::money::Money;
use frontdesk_domain::stay::StayPeriod;
use frontdesk_domain::time::parse_date;

use crate::error::ApiError;
use crate::state::AppState;

/// Raw query parameters; parsed here so bad input gets the API's error body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StayQuery {
    pub room: String,
    pub check_in: String,
    pub check_out: String,
}

impl StayQuery {
    fn stay(&self) -> Result<StayPeriod, ApiError> {
        let check_in = parse_date(&self.check_in)?;
        let check_out = parse_date(&self.check_out)?;
        Ok(StayPeriod::new(check_in, check_out)?)
    }
}

#[derive(Debug, Serialize)]
pub struct AvailabilityBody {
    pub room: RoomNumber,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct QuoteBody {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub nightly_rate: Money,
    pub price: Money,
}

/// `GET /api/availability?room=R&check_in=YYYY-MM-DD&check_out=YYYY-MM-DD`
pub async fn check<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<StayQuery>,
) -> Result<Json<AvailabilityBody>, ApiError>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let room: RoomNumber = query.room.parse()?;
    let stay = query.stay()?;
    let available = state.booking_service.is_available(room, stay).await?;

    Ok(Json(AvailabilityBody {
        room,
        check_in: stay.check_in(),
        check_out: stay.check_out(),
        available,
    }))
}

/// `GET /api/quote?check_in=YYYY-MM-DD&check_out=YYYY-MM-DD`
pub async fn quote<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<StayQuery>,
) -> Result<Json<QuoteBody>, ApiError>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    let stay = query.stay()?;

    Ok(Json(QuoteBody {
        check_in: stay.check_in(),
        check_out: stay.check_out(),
        nights: stay.nights(),
        nightly_rate: state.booking_service.tariff().nightly_rate(),
        price: state.booking_service.quote_price(&stay),
    }))
}
