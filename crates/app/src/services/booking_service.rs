//! Booking service: the use-cases a front desk clerk drives.

use tokio::sync::Mutex;

use frontdesk_domain::error::{FrontDeskError, RoomUnavailableError, ValidationError};
use frontdesk_domain::id::RoomNumber;
use frontdesk_domain::money::{Money, Tariff};
use frontdesk_domain::reservation::{BookingRequest, Reservation};
use frontdesk_domain::stay::StayPeriod;

use crate::ports::ReservationRepository;

/// Application service for booking, looking up, and cancelling reservations.
///
/// `book` holds `booking_lock` from the availability check until the row is
/// inserted, so two overlapping requests for the same room can never both
/// succeed, even when the service is shared across tasks.
pub struct BookingService<R> {
    repo: R,
    tariff: Tariff,
    booking_lock: Mutex<()>,
}

impl<R: ReservationRepository> BookingService<R> {
    /// Create a new service backed by the given repository, charging the
    /// default nightly rate.
    pub fn new(repo: R) -> Self {
        Self::with_tariff(repo, Tariff::default())
    }

    /// Create a new service with an explicit tariff.
    pub fn with_tariff(repo: R, tariff: Tariff) -> Self {
        Self {
            repo,
            tariff,
            booking_lock: Mutex::new(()),
        }
    }

    /// The tariff used by [`Self::quote_price`].
    pub fn tariff(&self) -> Tariff {
        self.tariff
    }

    /// Price of a stay: nightly rate times number of nights.
    pub fn quote_price(&self, stay: &StayPeriod) -> Money {
        self.tariff.quote(stay)
    }

    /// Whether `room` has no reservation overlapping `stay`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn is_available(
        &self,
        room: RoomNumber,
        stay: StayPeriod,
    ) -> Result<bool, FrontDeskError> {
        let conflicts = self.repo.find_overlapping(room, stay).await?;
        Ok(conflicts.is_empty())
    }

    /// Validate, check availability, price, and store a new reservation.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::Validation`] for bad input,
    /// [`FrontDeskError::RoomUnavailable`] when the stay overlaps an existing
    /// reservation for the room, or a storage error from the repository.
    /// Nothing is written in any of these cases.
    pub async fn book(&self, request: BookingRequest) -> Result<Reservation, FrontDeskError> {
        let new = request.validate()?;

        let _guard = self.booking_lock.lock().await;

        if !self.is_available(new.room, new.stay).await? {
            tracing::debug!(
                room = %new.room,
                check_in = %new.stay.check_in(),
                check_out = %new.stay.check_out(),
                "room unavailable"
            );
            return Err(RoomUnavailableError {
                room: new.room,
                check_in: new.stay.check_in(),
                check_out: new.stay.check_out(),
            }
            .into());
        }

        let price = self.quote_price(&new.stay);
        let reservation = self.repo.create(new, price).await?;

        tracing::info!(
            reservation_id = %reservation.id,
            room = %reservation.room,
            guest = %reservation.guest_name,
            price = %reservation.price,
            "reservation booked"
        );
        Ok(reservation)
    }

    /// All reservations for exactly `guest_name` (case-sensitive, ignoring
    /// surrounding whitespace).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_by_guest(&self, guest_name: &str) -> Result<Vec<Reservation>, FrontDeskError> {
        self.repo.find_by_guest(guest_name.trim()).await
    }

    /// Delete every reservation for `guest_name`, returning how many were
    /// removed. Zero is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::Validation`] when `guest_name` is empty,
    /// or a storage error from the repository.
    pub async fn cancel_by_guest(&self, guest_name: &str) -> Result<u64, FrontDeskError> {
        let guest_name = guest_name.trim();
        if guest_name.is_empty() {
            return Err(ValidationError::EmptyGuestName.into());
        }
        let deleted = self.repo.delete_by_guest(guest_name).await?;
        tracing::info!(guest = %guest_name, deleted, "reservations cancelled");
        Ok(deleted)
    }

    /// Every reservation, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_all(&self) -> Result<Vec<Reservation>, FrontDeskError> {
        self.repo.get_all().await
    }

    /// Every reservation for `room`, ordered by check-in.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_for_room(&self, room: RoomNumber) -> Result<Vec<Reservation>, FrontDeskError> {
        self.repo.find_by_room(room).await
    }
}
