use leptos::prelude::*;
use leptos::server;
use shared_types::{Booking, NewBooking};

#[server]
pub async fn fetch_property_bookings(property_id: i32) -> Result<Vec<Booking>, ServerFnError> {
    use crate::booking::store::BookingStore;
    use crate::db::bookings::PgBookingStore;

    PgBookingStore
        .list_bookings(property_id)
        .await
        .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))
}

#[server]
pub async fn create_booking(booking: NewBooking) -> Result<(), ServerFnError> {
    use crate::booking::store::BookingStore;
    use crate::db::bookings::PgBookingStore;

    tracing::info!(
        property_id = booking.property_id,
        start_date = %booking.start_date,
        end_date = %booking.end_date,
        "persisting booking"
    );

    PgBookingStore
        .create_booking(booking)
        .await
        .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))
}
