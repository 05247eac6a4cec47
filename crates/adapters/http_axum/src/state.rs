//! Shared application state for axum handlers.

use std::sync::Arc;

use frontdesk_app::ports::ReservationRepository;
use frontdesk_app::services::booking_service::BookingService;

/// Presentation settings that never reach the booking service.
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Symbol printed in front of every price.
    pub currency_symbol: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
        }
    }
}

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Booking use-cases.
    pub booking_service: Arc<BookingService<R>>,
    /// Currency symbol and other display settings.
    pub display: Arc<DisplayOptions>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            booking_service: Arc::clone(&self.booking_service),
            display: Arc::clone(&self.display),
        }
    }
}

impl<R> AppState<R>
where
    R: ReservationRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(booking_service: BookingService<R>, display: DisplayOptions) -> Self {
        Self::from_arcs(Arc::new(booking_service), Arc::new(display))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is shared with something other than the
    /// HTTP layer.
    pub fn from_arcs(
        booking_service: Arc<BookingService<R>>,
        display: Arc<DisplayOptions>,
    ) -> Self {
        Self {
            booking_service,
            display,
        }
    }
}
