//! The booking store boundary.
//!
//! The `BookingStore` trait is the narrow seam to the remote reservations
//! table: exactly the two operations the flow needs. `ServerFnStore` is the
//! implementation the browser runs against; `InMemoryBookingStore` backs
//! the flow tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared_types::{Booking, NewBooking};
use thiserror::Error;

/// Failure reported by a store backend. The text is diagnostic detail, not
/// user-facing copy.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

#[async_trait]
pub trait BookingStore {
    /// All reservations held against one property.
    async fn list_bookings(&self, property_id: i32) -> Result<Vec<Booking>, StoreError>;

    /// Persist a new reservation row. No generated fields are consumed.
    async fn create_booking(&self, booking: NewBooking) -> Result<(), StoreError>;
}

/// Store used by the hydrated client: delegates both operations to the
/// server functions, which run them against Postgres.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnStore;

#[async_trait]
impl BookingStore for ServerFnStore {
    async fn list_bookings(&self, property_id: i32) -> Result<Vec<Booking>, StoreError> {
        crate::server::fetch_property_bookings(property_id)
            .await
            .map_err(|e| StoreError(e.to_string()))
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<(), StoreError> {
        crate::server::create_booking(booking)
            .await
            .map_err(|e| StoreError(e.to_string()))
    }
}

/// In-memory store with failure toggles for reads and writes.
///
/// Clones share the same rows, so a test can hold one handle while the
/// flow owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingStore {
    rows: Arc<Mutex<Vec<NewBooking>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, rows: Vec<NewBooking>) {
        self.rows
            .lock()
            .expect("booking rows poisoned")
            .extend(rows);
    }

    /// Snapshot of every persisted row, across all properties.
    pub fn rows(&self) -> Vec<NewBooking> {
        self.rows.lock().expect("booking rows poisoned").clone()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn list_bookings(&self, property_id: i32) -> Result<Vec<Booking>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError("simulated read failure".to_string()));
        }
        let rows = self.rows.lock().expect("booking rows poisoned");
        Ok(rows
            .iter()
            .filter(|row| row.property_id == property_id)
            .map(|row| Booking {
                start_date: row.start_date,
                end_date: row.end_date,
            })
            .collect())
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError("simulated write failure".to_string()));
        }
        self.rows
            .lock()
            .expect("booking rows poisoned")
            .push(booking);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(property_id: i32, start: NaiveDate, end: NaiveDate) -> NewBooking {
        NewBooking {
            property_id,
            user_id: "00000000-0000-0000-0000-000000000000".to_string(),
            start_date: start,
            end_date: end,
        }
    }

    #[tokio::test]
    async fn list_only_returns_rows_for_the_queried_property() {
        let store = InMemoryBookingStore::new();
        store.seed(vec![
            row(1, date(2024, 1, 10), date(2024, 1, 12)),
            row(2, date(2024, 1, 10), date(2024, 1, 12)),
        ]);

        let bookings = store.list_bookings(1).await.unwrap();
        assert_eq!(
            bookings,
            vec![Booking {
                start_date: date(2024, 1, 10),
                end_date: date(2024, 1, 12),
            }]
        );
    }

    #[tokio::test]
    async fn created_rows_show_up_in_subsequent_lists() {
        let store = InMemoryBookingStore::new();
        store
            .create_booking(row(7, date(2024, 3, 1), date(2024, 3, 4)))
            .await
            .unwrap();

        let bookings = store.list_bookings(7).await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].start_date, date(2024, 3, 1));
    }

    #[tokio::test]
    async fn failure_toggles_make_operations_error() {
        let store = InMemoryBookingStore::new();
        store.set_fail_reads(true);
        assert!(store.list_bookings(1).await.is_err());

        store.set_fail_reads(false);
        store.set_fail_writes(true);
        assert!(store
            .create_booking(row(1, date(2024, 3, 1), date(2024, 3, 2)))
            .await
            .is_err());
        assert!(store.rows().is_empty());
    }
}
