use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Host {
    pub name: String,
    pub rating: f64,
    pub response_time: String,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Property {
    pub id: i32,
    pub title: String,
    pub location: String,
    pub price: i64,
    pub rating: f64,
    pub image: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub host: Host,
}

/// A reservation as read back from the booking store: the inclusive
/// calendar-day interval held against a property. The store query projects
/// only the date columns.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A reservation row as written to the booking store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub property_id: i32,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
