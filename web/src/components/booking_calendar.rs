use chrono::{Datelike, Months, NaiveDate};
use leptos::prelude::*;
use shared_types::Booking;
use thaw::*;

use crate::booking::availability::is_blocked;
use crate::booking::DateRange;

/// How many months past the current one the calendar can page to.
const MAX_MONTH_OFFSET: u32 = 11;

/// Month-grid calendar for picking a check-in/check-out range.
///
/// Reserved days render struck-through and disabled, days before `today`
/// are disabled, and clicks on open days are handed to `on_pick`. The
/// selection itself lives in the booking flow; this component only draws
/// it.
#[component]
pub fn BookingCalendar(
    range: Signal<DateRange>,
    bookings: Signal<Vec<Booking>>,
    today: NaiveDate,
    on_pick: impl Fn(NaiveDate) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let month_offset = RwSignal::new(0u32);

    let month_origin = move || first_of_month(today) + Months::new(month_offset.get());

    view! {
        <div class="booking-calendar">
            <div class="booking-calendar__header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| month_offset.update(|v| *v = v.saturating_sub(1))
                    disabled=Signal::derive(move || month_offset.get() == 0)
                >
                    "\u{2190}"
                </Button>

                <div class="booking-calendar__month-label">
                    {move || month_origin().format("%B %Y").to_string()}
                </div>

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| month_offset.update(|v| *v += 1)
                    disabled=Signal::derive(move || month_offset.get() >= MAX_MONTH_OFFSET)
                >
                    "\u{2192}"
                </Button>
            </div>

            <div class="booking-calendar__weekdays">
                <div class="booking-calendar__weekday">"Sun"</div>
                <div class="booking-calendar__weekday">"Mon"</div>
                <div class="booking-calendar__weekday">"Tue"</div>
                <div class="booking-calendar__weekday">"Wed"</div>
                <div class="booking-calendar__weekday">"Thu"</div>
                <div class="booking-calendar__weekday">"Fri"</div>
                <div class="booking-calendar__weekday">"Sat"</div>
            </div>

            <div class="booking-calendar__days">
                {move || {
                    let selection = range.get();
                    let reserved = bookings.get();

                    calendar_cells(month_origin())
                        .into_iter()
                        .map(|cell| match cell {
                            Some(day) => {
                                let blocked = is_blocked(day, &reserved);
                                let past = day < today;
                                let selected = selection.start == Some(day)
                                    || selection.end == Some(day);
                                let inside = selection.contains(day);

                                view! {
                                    <button
                                        class="booking-calendar__day"
                                        class:booked=blocked
                                        class:past=past
                                        class:selected=selected
                                        class:inside=inside
                                        disabled=blocked || past
                                        on:click=move |_| {
                                            if !blocked && !past {
                                                on_pick(day);
                                            }
                                        }
                                    >
                                        {day.day()}
                                    </button>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <div class="booking-calendar__day booking-calendar__day--empty"></div>
                                }
                                    .into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="booking-calendar__footer">
                {move || {
                    let selection = range.get();
                    match (selection.start, selection.end) {
                        (Some(start), Some(end)) => format!("Selected: {} to {}", start, end),
                        (Some(start), None) => {
                            format!("Check-in: {}. Select a check-out date.", start)
                        }
                        _ => "Select your dates".to_string(),
                    }
                }}
            </div>
        </div>
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Leading blanks for the weekday offset, then one cell per day of the
/// month.
fn calendar_cells(origin: NaiveDate) -> Vec<Option<NaiveDate>> {
    let leading = origin.weekday().num_days_from_sunday() as usize;
    let next_month = origin + Months::new(1);

    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
    cells.extend(origin.iter_days().take_while(|d| *d < next_month).map(Some));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn cells_line_up_with_the_weekday_of_the_first() {
        // March 2024 starts on a Friday.
        let cells = calendar_cells(date(2024, 3, 1));
        assert_eq!(cells.iter().take_while(|c| c.is_none()).count(), 5);
        assert_eq!(cells.len(), 5 + 31);
        assert_eq!(cells[5], Some(date(2024, 3, 1)));
        assert_eq!(cells.last().copied().flatten(), Some(date(2024, 3, 31)));
    }

    #[test]
    fn leap_february_gets_twenty_nine_days() {
        let cells = calendar_cells(date(2024, 2, 1));
        let days = cells.iter().filter(|c| c.is_some()).count();
        assert_eq!(days, 29);
    }

    #[test]
    fn month_paging_stays_on_the_first() {
        let origin = first_of_month(date(2024, 1, 20)) + Months::new(2);
        assert_eq!(origin, date(2024, 3, 1));
    }
}
