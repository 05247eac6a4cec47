//! Storage port: repository trait for reservation persistence.

use std::future::Future;

use frontdesk_domain::error::FrontDeskError;
use frontdesk_domain::id::RoomNumber;
use frontdesk_domain::money::Money;
use frontdesk_domain::reservation::{NewReservation, Reservation};
use frontdesk_domain::stay::StayPeriod;

/// Repository owning every [`Reservation`] row.
///
/// Insert and delete must each be a single atomic store operation: a failed
/// call leaves the store unchanged.
pub trait ReservationRepository {
    /// Insert a new row; the store assigns `id` and `created_at`.
    fn create(
        &self,
        reservation: NewReservation,
        price: Money,
    ) -> impl Future<Output = Result<Reservation, FrontDeskError>> + Send;

    /// Reservations for `room` whose stay overlaps `stay` (half-open test).
    fn find_overlapping(
        &self,
        room: RoomNumber,
        stay: StayPeriod,
    ) -> impl Future<Output = Result<Vec<Reservation>, FrontDeskError>> + Send;

    /// Reservations whose guest name equals `guest_name` exactly, ordered by id.
    fn find_by_guest(
        &self,
        guest_name: &str,
    ) -> impl Future<Output = Result<Vec<Reservation>, FrontDeskError>> + Send;

    /// Reservations for `room`, ordered by check-in date.
    fn find_by_room(
        &self,
        room: RoomNumber,
    ) -> impl Future<Output = Result<Vec<Reservation>, FrontDeskError>> + Send;

    /// Delete every reservation for `guest_name`, returning how many went.
    fn delete_by_guest(
        &self,
        guest_name: &str,
    ) -> impl Future<Output = Result<u64, FrontDeskError>> + Send;

    /// Every reservation, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Reservation>, FrontDeskError>> + Send;
}
