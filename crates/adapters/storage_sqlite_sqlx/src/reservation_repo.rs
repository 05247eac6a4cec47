//! `SQLite` implementation of [`ReservationRepository`] over the `hotel` table.

use std::future::Future;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use frontdesk_app::ports::ReservationRepository;
use frontdesk_domain::error::FrontDeskError;
use frontdesk_domain::id::{ReservationId, RoomNumber};
use frontdesk_domain::money::Money;
use frontdesk_domain::reservation::{NewReservation, Reservation};
use frontdesk_domain::stay::StayPeriod;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Reservation`].
struct Wrapper(Reservation);

impl Wrapper {
    fn unwrap_all(rows: Vec<Self>) -> Vec<Reservation> {
        rows.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let guest_name: String = row.try_get("name")?;
        let room: i64 = row.try_get("room")?;
        let check_in: NaiveDate = row.try_get("checkin")?;
        let check_out: NaiveDate = row.try_get("checkout")?;
        let price: f64 = row.try_get("price")?;
        let special_requests: String = row.try_get("special_requests")?;
        let created_at: DateTime<Utc> = row.try_get("timestamp")?;

        let room = RoomNumber::new(room).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let stay =
            StayPeriod::new(check_in, check_out).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Reservation {
            id: ReservationId::from_raw(id),
            guest_name,
            room,
            stay,
            price: Money::from_stored(price),
            special_requests,
            created_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO hotel (name, room, checkin, checkout, price, special_requests)
    VALUES (?, ?, ?, ?, ?, ?)
    RETURNING *
";

// half-open: a stay checking out on the day another checks in is no conflict
const SELECT_OVERLAPPING: &str = r"
    SELECT * FROM hotel
    WHERE room = ? AND checkin < ? AND checkout > ?
    ORDER BY checkin
";

const SELECT_BY_NAME: &str = "SELECT * FROM hotel WHERE name = ? ORDER BY id";
const SELECT_BY_ROOM: &str = "SELECT * FROM hotel WHERE room = ? ORDER BY checkin, id";
const SELECT_ALL: &str = "SELECT * FROM hotel ORDER BY id";
const DELETE_BY_NAME: &str = "DELETE FROM hotel WHERE name = ?";

/// `SQLite`-backed reservation repository.
pub struct SqliteReservationRepository {
    pool: SqlitePool,
}

impl SqliteReservationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReservationRepository for SqliteReservationRepository {
    fn create(
        &self,
        reservation: NewReservation,
        price: Money,
    ) -> impl Future<Output = Result<Reservation, FrontDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(reservation.guest_name)
                .bind(i64::from(reservation.room))
                .bind(reservation.stay.check_in())
                .bind(reservation.stay.check_out())
                .bind(price.amount())
                .bind(reservation.special_requests)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn find_overlapping(
        &self,
        room: RoomNumber,
        stay: StayPeriod,
    ) -> impl Future<Output = Result<Vec<Reservation>, FrontDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_OVERLAPPING)
                .bind(i64::from(room))
                .bind(stay.check_out())
                .bind(stay.check_in())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::unwrap_all(rows))
        }
    }

    fn find_by_guest(
        &self,
        guest_name: &str,
    ) -> impl Future<Output = Result<Vec<Reservation>, FrontDeskError>> + Send {
        let pool = self.pool.clone();
        let guest_name = guest_name.to_string();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
                .bind(guest_name)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::unwrap_all(rows))
        }
    }

    fn find_by_room(
        &self,
        room: RoomNumber,
    ) -> impl Future<Output = Result<Vec<Reservation>, FrontDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_ROOM)
                .bind(i64::from(room))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::unwrap_all(rows))
        }
    }

    fn delete_by_guest(
        &self,
        guest_name: &str,
    ) -> impl Future<Output = Result<u64, FrontDeskError>> + Send {
        let pool = self.pool.clone();
        let guest_name = guest_name.to_string();
        async move {
            let result = sqlx::query(DELETE_BY_NAME)
                .bind(guest_name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Reservation>, FrontDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::unwrap_all(rows))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Config, Database};

    async fn setup() -> (Database, SqliteReservationRepository) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let repo = SqliteReservationRepository::new(db.pool().clone());
        (db, repo)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn stay(from: u32, to: u32) -> StayPeriod {
        StayPeriod::new(date(from), date(to)).unwrap()
    }

    fn room(number: i64) -> RoomNumber {
        RoomNumber::new(number).unwrap()
    }

    fn new_reservation(guest: &str, room_number: i64, from: u32, to: u32) -> NewReservation {
        NewReservation {
            guest_name: guest.to_string(),
            room: room(room_number),
            stay: stay(from, to),
            special_requests: String::new(),
        }
    }

    fn price(amount: f64) -> Money {
        Money::new(amount).unwrap()
    }

    #[tokio::test]
    async fn should_assign_id_and_timestamp_on_create() {
        let (_db, repo) = setup().await;
        let before = Utc::now() - chrono::Duration::seconds(2);

        let first = repo
            .create(new_reservation("Alice", 5, 1, 5), price(6000.0))
            .await
            .unwrap();
        let second = repo
            .create(new_reservation("Bob", 6, 1, 5), price(6000.0))
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert!(first.created_at >= before);
        assert_eq!(first.price, price(6000.0));
    }

    #[tokio::test]
    async fn should_roundtrip_every_field() {
        let (_db, repo) = setup().await;
        let mut new = new_reservation("Alice", 5, 1, 5);
        new.special_requests = "sea view, late check-in".to_string();

        let created = repo.create(new, price(6000.0)).await.unwrap();
        let found = repo.find_by_guest("Alice").await.unwrap();

        assert_eq!(found, vec![created.clone()]);
        assert_eq!(found[0].stay, stay(1, 5));
        assert_eq!(found[0].special_requests, "sea view, late check-in");
    }

    #[tokio::test]
    async fn should_find_overlapping_reservations_only_for_same_room() {
        let (_db, repo) = setup().await;
        repo.create(new_reservation("Alice", 5, 1, 5), price(6000.0))
            .await
            .unwrap();
        repo.create(new_reservation("Bob", 6, 1, 5), price(6000.0))
            .await
            .unwrap();

        let conflicts = repo.find_overlapping(room(5), stay(3, 8)).await.unwrap();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].guest_name, "Alice");

        assert!(repo.find_overlapping(room(7), stay(1, 5)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_treat_checkout_day_as_free() {
        let (_db, repo) = setup().await;
        repo.create(new_reservation("Alice", 5, 1, 5), price(6000.0))
            .await
            .unwrap();

        assert!(repo.find_overlapping(room(5), stay(5, 7)).await.unwrap().is_empty());
        assert_eq!(repo.find_overlapping(room(5), stay(4, 7)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_compare_dates_across_month_and_year_boundaries() {
        let (_db, repo) = setup().await;
        let new = NewReservation {
            guest_name: "Alice".to_string(),
            room: room(5),
            stay: StayPeriod::new(
                NaiveDate::from_ymd_opt(2023, 12, 30).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            )
            .unwrap(),
            special_requests: String::new(),
        };
        repo.create(new, price(4500.0)).await.unwrap();

        assert_eq!(repo.find_overlapping(room(5), stay(1, 3)).await.unwrap().len(), 1);
        assert!(repo.find_overlapping(room(5), stay(2, 3)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_match_guest_name_case_sensitively() {
        let (_db, repo) = setup().await;
        repo.create(new_reservation("Alice", 5, 1, 5), price(6000.0))
            .await
            .unwrap();

        assert!(repo.find_by_guest("alice").await.unwrap().is_empty());
        assert_eq!(repo.find_by_guest("Alice").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_list_room_by_check_in() {
        let (_db, repo) = setup().await;
        repo.create(new_reservation("Late", 5, 20, 22), price(3000.0))
            .await
            .unwrap();
        repo.create(new_reservation("Early", 5, 1, 3), price(3000.0))
            .await
            .unwrap();
        repo.create(new_reservation("Other", 6, 1, 3), price(3000.0))
            .await
            .unwrap();

        let names: Vec<String> = repo
            .find_by_room(room(5))
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.guest_name)
            .collect();
        assert_eq!(names, ["Early", "Late"]);
    }

    #[tokio::test]
    async fn should_delete_every_row_for_guest_and_report_count() {
        let (_db, repo) = setup().await;
        repo.create(new_reservation("Alice", 5, 1, 5), price(6000.0))
            .await
            .unwrap();
        repo.create(new_reservation("Alice", 6, 1, 5), price(6000.0))
            .await
            .unwrap();
        repo.create(new_reservation("Bob", 7, 1, 5), price(6000.0))
            .await
            .unwrap();

        assert_eq!(repo.delete_by_guest("Alice").await.unwrap(), 2);
        assert_eq!(repo.delete_by_guest("Alice").await.unwrap(), 0);

        let remaining = repo.get_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].guest_name, "Bob");
    }

    #[tokio::test]
    async fn should_list_all_in_insertion_order() {
        let (_db, repo) = setup().await;
        for (guest, room_number) in [("Carol", 3), ("Alice", 1), ("Bob", 2)] {
            repo.create(new_reservation(guest, room_number, 1, 2), price(1500.0))
                .await
                .unwrap();
        }

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.guest_name)
            .collect();
        assert_eq!(names, ["Carol", "Alice", "Bob"]);
    }

    #[tokio::test]
    async fn should_read_rows_written_by_plain_sql() {
        let (db, repo) = setup().await;
        sqlx::query(
            "INSERT INTO hotel (name, room, checkin, checkout, price) VALUES ('Dave', 9, '2024-03-01', '2024-03-04', 4500)",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let found = repo.find_by_guest("Dave").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].room, room(9));
        assert_eq!(found[0].stay.nights(), 3);
        assert_eq!(found[0].price.amount(), 4500.0);
        assert_eq!(found[0].special_requests, "");
    }
}
