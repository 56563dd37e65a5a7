use chrono::NaiveDate;
use shared_types::Booking;

/// True if `day` falls inside the inclusive interval of any reservation.
///
/// Both interval boundaries count as blocked, which is also what the
/// calendar renders struck-through.
pub fn is_blocked(day: NaiveDate, bookings: &[Booking]) -> bool {
    bookings
        .iter()
        .any(|booking| booking.start_date <= day && day <= booking.end_date)
}

/// True if every day in the inclusive span `[start, end]` is unblocked.
///
/// The range selector uses this to reject selections whose endpoints are
/// free but which straddle a reserved day in the middle.
pub fn span_is_open(start: NaiveDate, end: NaiveDate, bookings: &[Booking]) -> bool {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .all(|day| !is_blocked(day, bookings))
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

    #[test]
    fn blocks_every_day_of_the_interval_boundaries_included() {
        let b = booking(date(2024, 3, 10), date(2024, 3, 12));
        assert!(!is_blocked(date(2024, 3, 9), &[b]));
        assert!(is_blocked(date(2024, 3, 10), &[b]));
        assert!(is_blocked(date(2024, 3, 11), &[b]));
        assert!(is_blocked(date(2024, 3, 12), &[b]));
        assert!(!is_blocked(date(2024, 3, 13), &[b]));
    }

    #[test]
    fn single_day_reservation_blocks_exactly_that_day() {
        let b = booking(date(2024, 7, 4), date(2024, 7, 4));
        assert!(!is_blocked(date(2024, 7, 3), &[b]));
        assert!(is_blocked(date(2024, 7, 4), &[b]));
        assert!(!is_blocked(date(2024, 7, 5), &[b]));
    }

    #[test]
    fn nothing_is_blocked_without_reservations() {
        assert!(!is_blocked(date(2024, 1, 1), &[]));
        assert!(span_is_open(date(2024, 1, 1), date(2024, 1, 31), &[]));
    }

    #[test]
    fn any_of_several_reservations_can_block() {
        let bookings = [
            booking(date(2024, 5, 1), date(2024, 5, 3)),
            booking(date(2024, 5, 20), date(2024, 5, 22)),
        ];
        assert!(is_blocked(date(2024, 5, 2), &bookings));
        assert!(is_blocked(date(2024, 5, 21), &bookings));
        assert!(!is_blocked(date(2024, 5, 10), &bookings));
    }

    #[test]
    fn span_is_open_catches_a_blocked_middle_day() {
        let b = booking(date(2024, 5, 3), date(2024, 5, 3));
        assert!(span_is_open(date(2024, 5, 1), date(2024, 5, 2), &[b]));
        assert!(!span_is_open(date(2024, 5, 1), date(2024, 5, 5), &[b]));
        assert!(span_is_open(date(2024, 5, 4), date(2024, 5, 8), &[b]));
    }
}
