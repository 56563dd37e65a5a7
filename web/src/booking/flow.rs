use chrono::NaiveDate;
use leptos::logging;
use shared_types::{Booking, NewBooking};

use super::error::BookingError;
use super::price;
use super::range::DateRange;
use super::store::BookingStore;

/// Detail-view booking controller.
///
/// One explicit state object for the selection, the known reservations,
/// the in-flight flag, and the last error; mutated only through the
/// operations below. The view owns one inside a signal and routes every
/// interaction through it.
#[derive(Debug, Clone)]
pub struct BookingFlow<S> {
    store: S,
    property_id: i32,
    user_id: String,
    today: NaiveDate,
    range: DateRange,
    bookings: Vec<Booking>,
    is_submitting: bool,
    error: Option<BookingError>,
}

impl<S> BookingFlow<S> {
    pub fn new(store: S, property_id: i32, user_id: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            store,
            property_id,
            user_id: user_id.into(),
            today,
            range: DateRange::default(),
            bookings: Vec::new(),
            is_submitting: false,
            error: None,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error(&self) -> Option<&BookingError> {
        self.error.as_ref()
    }

    /// Route one calendar-day click through the range selector.
    pub fn pick_date(&mut self, day: NaiveDate) -> bool {
        self.range.pick(day, self.today, &self.bookings)
    }

    pub fn clear_range(&mut self) {
        self.range.clear();
    }

    pub fn nights(&self) -> i64 {
        price::nights(&self.range)
    }

    pub fn total(&self, nightly_price: i64) -> i64 {
        price::total(self.nights(), nightly_price)
    }
}

impl<S: BookingStore> BookingFlow<S> {
    /// Load the property's reservations so the calendar can block them out.
    pub async fn load_bookings(&mut self) {
        match self.store.list_bookings(self.property_id).await {
            Ok(rows) => self.bookings = rows,
            Err(e) => {
                logging::error!(
                    "failed to load bookings for property {}: {e}",
                    self.property_id
                );
                self.error = Some(BookingError::Unavailable(e.to_string()));
            }
        }
    }

    /// First half of submission: validate and raise the in-flight flag.
    ///
    /// Returns false without touching the store when the selection is
    /// incomplete or a submission is already running. Split from
    /// [`BookingFlow::finish_submit`] so a reactive caller can publish the
    /// flag before awaiting the write.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        if !self.range.is_complete() {
            self.error = Some(BookingError::MissingRange);
            return false;
        }
        self.error = None;
        self.is_submitting = true;
        true
    }

    /// Second half of submission: write the reservation, then refresh the
    /// reservation list before settling so the calendar already blocks the
    /// new range. On a write failure the selection is kept for a manual
    /// retry; nothing is treated as booked.
    pub async fn finish_submit(&mut self) {
        if !self.is_submitting {
            return;
        }
        let (Some(start), Some(end)) = (self.range.start, self.range.end) else {
            self.is_submitting = false;
            return;
        };

        let record = NewBooking {
            property_id: self.property_id,
            user_id: self.user_id.clone(),
            start_date: start,
            end_date: end,
        };

        match self.store.create_booking(record).await {
            Err(e) => {
                logging::error!(
                    "booking write failed for property {}: {e}",
                    self.property_id
                );
                self.error = Some(BookingError::Persistence(e.to_string()));
            }
            Ok(()) => {
                self.load_bookings().await;
                self.range.clear();
            }
        }
        self.is_submitting = false;
    }

    /// Validate and persist the current selection end to end.
    pub async fn submit(&mut self) {
        if self.begin_submit() {
            self.finish_submit().await;
        }
    }
}
