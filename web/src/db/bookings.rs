#[cfg(feature = "ssr")]
use async_trait::async_trait;
#[cfg(feature = "ssr")]
use shared_types::{Booking, NewBooking};
#[cfg(feature = "ssr")]
use sqlx::Row;

#[cfg(feature = "ssr")]
use super::pool::get_pool;
#[cfg(feature = "ssr")]
use crate::booking::store::{BookingStore, StoreError};

/// Booking store backed by the shared Postgres pool.
///
/// The `bookings` table carries no overlap constraint (see schema.sql);
/// double-booking prevention stays in the client flow.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PgBookingStore;

#[cfg(feature = "ssr")]
#[async_trait]
impl BookingStore for PgBookingStore {
    async fn list_bookings(&self, property_id: i32) -> Result<Vec<Booking>, StoreError> {
        let rows = sqlx::query(
            "SELECT start_date, end_date FROM bookings WHERE property_id = $1",
        )
        .bind(property_id)
        .fetch_all(get_pool())
        .await
        .map_err(|e| StoreError(format!("Database error: {}", e)))?;

        rows.into_iter()
            .map(|row| {
                Ok(Booking {
                    start_date: row.try_get("start_date")?,
                    end_date: row.try_get("end_date")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| StoreError(format!("Database error: {}", e)))
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO bookings (property_id, user_id, start_date, end_date)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(booking.property_id)
        .bind(&booking.user_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .execute(get_pool())
        .await
        .map_err(|e| StoreError(format!("Database error: {}", e)))?;

        Ok(())
    }
}
