use chrono::{Datelike, Days, Months, NaiveDate};

use crate::errors::InvalidScheduleError;
use crate::schedule::{Anchor, Cadence, Frequency};

/// The due date following `current` under `cadence`.
///
/// Month based frequencies re-apply the anchor day on every step, clamped to
/// the length of the target month: a schedule on the 31st goes
/// Jan 31 -> Feb 29 -> Mar 31 rather than drifting to the 29th.
pub fn next_due_date(cadence: &Cadence, current: &NaiveDate) -> Result<NaiveDate, InvalidScheduleError> {
    let interval = cadence.interval;
    let next = match cadence.frequency {
        Frequency::Daily => current.checked_add_days(Days::new(interval as u64)),
        Frequency::Weekly => current.checked_add_days(Days::new(interval as u64 * 7)),
        Frequency::Monthly => add_months(current, interval, &cadence.anchor),
        Frequency::Quarterly => interval
            .checked_mul(3)
            .and_then(|months| add_months(current, months, &cadence.anchor)),
        Frequency::Yearly => interval
            .checked_mul(12)
            .and_then(|months| add_months(current, months, &cadence.anchor)),
    };
    next.ok_or(InvalidScheduleError::DateOutOfRange(*current))
}

fn add_months(current: &NaiveDate, months: u32, anchor: &Anchor) -> Option<NaiveDate> {
    let moved = current.checked_add_months(Months::new(months))?;
    match anchor {
        Anchor::DayOfMonth(day) => moved.with_day((*day).min(last_day_of_month(&moved)?)),
        Anchor::None | Anchor::Weekday(_) => Some(moved),
    }
}

fn last_day_of_month(date: &NaiveDate) -> Option<u32> {
    let first_of_next_month = date.with_day(1)?.checked_add_months(Months::new(1))?;
    Some(first_of_next_month.pred_opt()?.day())
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use derive_builder::Builder;

    use super::next_due_date;
    use crate::errors::InvalidScheduleError;
    use crate::schedule::{Cadence, Frequency};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[derive(Builder)]
    #[builder(pattern = "immutable", build_fn(skip), name = "Test")]
    struct Tes {
        cadence: Cadence,
        current: NaiveDate,
        expected_next: NaiveDate,
    }

    impl Test {
        fn execute(self) {
            let result = next_due_date(&self.cadence.unwrap(), &self.current.unwrap()).unwrap();
            assert_eq!(result, self.expected_next.unwrap())
        }
    }

    fn every(frequency: Frequency, interval: i64) -> Test {
        let cadence = match frequency {
            Frequency::Daily => Cadence::new(frequency, interval, None, None),
            Frequency::Weekly => Cadence::new(frequency, interval, Some(1), None),
            _ => unreachable!("use on_day for month based frequencies"),
        };
        Test::default().cadence(cadence.unwrap())
    }

    fn on_day(frequency: Frequency, interval: i64, day_of_month: i64) -> Test {
        Test::default().cadence(Cadence::new(frequency, interval, None, Some(day_of_month)).unwrap())
    }

    #[test]
    fn daily__one_day() {
        every(Frequency::Daily, 1)
            .current(date(2024, 2, 28))
            .expected_next(date(2024, 2, 29))
            .execute();
    }

    #[test]
    fn daily__interval_crosses_year() {
        every(Frequency::Daily, 5)
            .current(date(2023, 12, 30))
            .expected_next(date(2024, 1, 4))
            .execute();
    }

    #[test]
    fn weekly__one_week() {
        every(Frequency::Weekly, 1)
            .current(date(2024, 1, 1))
            .expected_next(date(2024, 1, 8))
            .execute();
    }

    #[test]
    fn weekly__two_weeks() {
        every(Frequency::Weekly, 2)
            .current(date(2024, 1, 1))
            .expected_next(date(2024, 1, 15))
            .execute();
    }

    #[test]
    fn monthly__mid_month() {
        on_day(Frequency::Monthly, 1, 15)
            .current(date(2024, 1, 15))
            .expected_next(date(2024, 2, 15))
            .execute();
    }

    #[test]
    fn monthly__forces_anchor_day() {
        on_day(Frequency::Monthly, 1, 20)
            .current(date(2024, 1, 3))
            .expected_next(date(2024, 2, 20))
            .execute();
    }

    #[test]
    fn monthly__31st__clamped_in_leap_february() {
        on_day(Frequency::Monthly, 1, 31)
            .current(date(2024, 1, 31))
            .expected_next(date(2024, 2, 29))
            .execute();
    }

    #[test]
    fn monthly__31st__clamped_in_february() {
        on_day(Frequency::Monthly, 1, 31)
            .current(date(2023, 1, 31))
            .expected_next(date(2023, 2, 28))
            .execute();
    }

    #[test]
    fn monthly__31st__back_to_31st_after_short_month() {
        on_day(Frequency::Monthly, 1, 31)
            .current(date(2024, 2, 29))
            .expected_next(date(2024, 3, 31))
            .execute();
    }

    #[test]
    fn monthly__30th__clamped_in_30_day_month_only_when_needed() {
        on_day(Frequency::Monthly, 1, 30)
            .current(date(2024, 3, 30))
            .expected_next(date(2024, 4, 30))
            .execute();
    }

    #[test]
    fn monthly__interval_crosses_year() {
        on_day(Frequency::Monthly, 2, 10)
            .current(date(2023, 11, 10))
            .expected_next(date(2024, 1, 10))
            .execute();
    }

    #[test]
    fn quarterly__three_months() {
        on_day(Frequency::Quarterly, 1, 1)
            .current(date(2024, 1, 1))
            .expected_next(date(2024, 4, 1))
            .execute();
    }

    #[test]
    fn quarterly__31st__clamped() {
        on_day(Frequency::Quarterly, 1, 31)
            .current(date(2024, 1, 31))
            .expected_next(date(2024, 4, 30))
            .execute();
    }

    #[test]
    fn quarterly__two_quarters() {
        on_day(Frequency::Quarterly, 2, 15)
            .current(date(2024, 8, 15))
            .expected_next(date(2025, 2, 15))
            .execute();
    }

    #[test]
    fn yearly__one_year() {
        on_day(Frequency::Yearly, 1, 15)
            .current(date(2024, 6, 15))
            .expected_next(date(2025, 6, 15))
            .execute();
    }

    #[test]
    fn yearly__leap_day__clamped() {
        on_day(Frequency::Yearly, 1, 29)
            .current(date(2024, 2, 29))
            .expected_next(date(2025, 2, 28))
            .execute();
    }

    #[test]
    fn yearly__leap_day__back_on_next_leap_year() {
        on_day(Frequency::Yearly, 4, 29)
            .current(date(2024, 2, 29))
            .expected_next(date(2028, 2, 29))
            .execute();
    }

    #[test]
    fn out_of_range() {
        let cadence = Cadence::new(Frequency::Daily, 1, None, None).unwrap();
        assert_eq!(
            next_due_date(&cadence, &NaiveDate::MAX),
            Err(InvalidScheduleError::DateOutOfRange(NaiveDate::MAX))
        );
    }
}
