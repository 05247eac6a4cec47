//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod availability;
#[allow(clippy::missing_errors_doc)]
pub mod reservations;

use axum::Router;
use axum::routing::get;

use frontdesk_app::ports::ReservationRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    Router::new()
        // Reservations
        .route(
            "/reservations",
            get(reservations::list::<R>)
                .post(reservations::create::<R>)
                .delete(reservations::cancel::<R>),
        )
        .route(
            "/rooms/{room}/reservations",
            get(reservations::list_for_room::<R>),
        )
        // Availability & pricing
        .route("/availability", get(availability::check::<R>))
        .route("/quote", get(availability::quote::<R>))
}
