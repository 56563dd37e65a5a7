use chrono::NaiveDate;
use shared_types::Booking;

use super::availability::{is_blocked, span_is_open};

/// The user's in-progress check-in/check-out selection.
///
/// Transient and client-only: cleared after a successful submission and
/// dropped when the user navigates away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// True if `day` lies inside the selected span. A partial selection
    /// matches only its start day.
    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= day && day <= end,
            (Some(start), None) => day == start,
            _ => false,
        }
    }

    /// Feed one calendar-day click into the selection.
    ///
    /// Returns false and leaves the selection untouched when the candidate
    /// is before `today`, blocked, or would complete a range that includes
    /// a blocked day anywhere in its span. A candidate at or before the
    /// current start restarts the selection, so a completed range always
    /// has `start < end`.
    pub fn pick(&mut self, candidate: NaiveDate, today: NaiveDate, bookings: &[Booking]) -> bool {
        if candidate < today || is_blocked(candidate, bookings) {
            return false;
        }
        match (self.start, self.end) {
            (Some(start), None) if candidate > start => {
                if !span_is_open(start, candidate, bookings) {
                    return false;
                }
                self.end = Some(candidate);
                true
            }
            _ => {
                self.start = Some(candidate);
                self.end = None;
                true
            }
        }
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(start: NaiveDate, end: NaiveDate) -> Booking {
        Booking {
            start_date: start,
            end_date: end,
        }
    }

    const TODAY: (i32, u32, u32) = (2024, 1, 1);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn first_pick_starts_the_selection() {
        let mut range = DateRange::default();
        assert!(range.pick(date(2024, 1, 10), today(), &[]));
        assert_eq!(range.start, Some(date(2024, 1, 10)));
        assert_eq!(range.end, None);
    }

    #[test]
    fn second_later_pick_completes_the_selection() {
        let mut range = DateRange::default();
        range.pick(date(2024, 1, 10), today(), &[]);
        assert!(range.pick(date(2024, 1, 13), today(), &[]));
        assert_eq!(range.start, Some(date(2024, 1, 10)));
        assert_eq!(range.end, Some(date(2024, 1, 13)));
    }

    #[test]
    fn days_before_today_are_never_selectable() {
        let mut range = DateRange::default();
        assert!(!range.pick(date(2023, 12, 31), today(), &[]));
        assert_eq!(range, DateRange::default());
    }

    #[test]
    fn blocked_days_are_never_selectable() {
        let blocked = [booking(date(2024, 1, 10), date(2024, 1, 12))];
        let mut range = DateRange::default();
        assert!(!range.pick(date(2024, 1, 11), today(), &blocked));
        assert_eq!(range, DateRange::default());
    }

    #[test]
    fn range_straddling_a_blocked_day_is_rejected_whole() {
        // Both endpoints are free; the 12th in between is reserved.
        let blocked = [booking(date(2024, 1, 12), date(2024, 1, 12))];
        let mut range = DateRange::default();
        range.pick(date(2024, 1, 10), today(), &blocked);
        assert!(!range.pick(date(2024, 1, 14), today(), &blocked));
        // Rejection leaves the partial selection unchanged.
        assert_eq!(range.start, Some(date(2024, 1, 10)));
        assert_eq!(range.end, None);
    }

    #[test]
    fn picking_at_or_before_the_start_restarts_the_selection() {
        let mut range = DateRange::default();
        range.pick(date(2024, 1, 10), today(), &[]);
        assert!(range.pick(date(2024, 1, 10), today(), &[]));
        assert_eq!(range.end, None);
        assert!(range.pick(date(2024, 1, 5), today(), &[]));
        assert_eq!(range.start, Some(date(2024, 1, 5)));
        assert_eq!(range.end, None);
    }

    #[test]
    fn picking_after_a_complete_range_starts_over() {
        let mut range = DateRange::default();
        range.pick(date(2024, 1, 10), today(), &[]);
        range.pick(date(2024, 1, 13), today(), &[]);
        assert!(range.pick(date(2024, 1, 20), today(), &[]));
        assert_eq!(range.start, Some(date(2024, 1, 20)));
        assert_eq!(range.end, None);
    }

    #[test]
    fn clear_resets_both_endpoints() {
        let mut range = DateRange::default();
        range.pick(date(2024, 1, 10), today(), &[]);
        range.pick(date(2024, 1, 13), today(), &[]);
        range.clear();
        assert_eq!(range, DateRange::default());
    }

    #[test]
    fn contains_covers_the_whole_selected_span() {
        let mut range = DateRange::default();
        range.pick(date(2024, 1, 10), today(), &[]);
        assert!(range.contains(date(2024, 1, 10)));
        assert!(!range.contains(date(2024, 1, 11)));
        range.pick(date(2024, 1, 13), today(), &[]);
        assert!(range.contains(date(2024, 1, 11)));
        assert!(range.contains(date(2024, 1, 13)));
        assert!(!range.contains(date(2024, 1, 14)));
    }
}
