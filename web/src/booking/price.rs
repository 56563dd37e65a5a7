use super::range::DateRange;

/// Number of nights covered by a selection: the integer day count between
/// check-in and check-out, check-out day excluded (a one-night stay has
/// `end = start + 1`). Incomplete selections price as zero nights.
pub fn nights(range: &DateRange) -> i64 {
    match (range.start, range.end) {
        (Some(start), Some(end)) => end.signed_duration_since(start).num_days(),
        _ => 0,
    }
}

/// Whole-unit total for a stay. No rounding or fractional-cent handling.
pub fn total(nights: i64, nightly_price: i64) -> i64 {
    nights * nightly_price
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn three_nights_from_jan_first_to_jan_fourth() {
        let range = DateRange {
            start: Some(date(2024, 1, 1)),
            end: Some(date(2024, 1, 4)),
        };
        assert_eq!(nights(&range), 3);
        assert_eq!(total(3, 100), 300);
    }

    #[test]
    fn one_night_stay_checks_out_the_next_day() {
        let range = DateRange {
            start: Some(date(2024, 2, 10)),
            end: Some(date(2024, 2, 11)),
        };
        assert_eq!(nights(&range), 1);
    }

    #[test]
    fn missing_endpoints_cost_nothing() {
        assert_eq!(nights(&DateRange::default()), 0);
        let open_ended = DateRange {
            start: Some(date(2024, 1, 1)),
            end: None,
        };
        assert_eq!(nights(&open_ended), 0);
        assert_eq!(total(0, 450), 0);
    }
}
