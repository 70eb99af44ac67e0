use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OccurrenceStatus {
    Overdue,
    Due,
    Upcoming,
}

impl OccurrenceStatus {
    /// Due and overdue occurrences can be paid right away.
    pub fn is_payable(&self) -> bool {
        match self {
            OccurrenceStatus::Overdue | OccurrenceStatus::Due => true,
            OccurrenceStatus::Upcoming => false,
        }
    }
}

/// Whole calendar days from `today` until `due_date`, negative when past.
pub fn days_until(due_date: &NaiveDate, today: &NaiveDate) -> i64 {
    (*due_date - *today).num_days()
}

/// Anything after today is upcoming, however far out.
pub fn classify(due_date: &NaiveDate, today: &NaiveDate) -> OccurrenceStatus {
    match days_until(due_date, today).cmp(&0) {
        Ordering::Less => OccurrenceStatus::Overdue,
        Ordering::Equal => OccurrenceStatus::Due,
        Ordering::Greater => OccurrenceStatus::Upcoming,
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use derive_builder::Builder;

    use super::{classify, OccurrenceStatus};

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[derive(Builder)]
    #[builder(pattern = "immutable", build_fn(skip), name = "Test")]
    struct Tes {
        due_date: NaiveDate,
        expected_status: OccurrenceStatus,
    }

    impl Test {
        fn execute(self) {
            let today = date(1, 10);
            let result = classify(&self.due_date.unwrap(), &today);
            assert_eq!(result, self.expected_status.unwrap())
        }
    }

    fn overdue() -> Test {
        Test::default().expected_status(OccurrenceStatus::Overdue)
    }

    fn due() -> Test {
        Test::default().expected_status(OccurrenceStatus::Due)
    }

    fn upcoming() -> Test {
        Test::default().expected_status(OccurrenceStatus::Upcoming)
    }

    #[test]
    fn overdue__yesterday() {
        overdue().due_date(date(1, 9)).execute();
    }

    #[test]
    fn overdue__last_year() {
        overdue()
            .due_date(NaiveDate::from_ymd_opt(2023, 12, 25).unwrap())
            .execute();
    }

    #[test]
    fn due__today() {
        due().due_date(date(1, 10)).execute();
    }

    #[test]
    fn upcoming__tomorrow() {
        upcoming().due_date(date(1, 11)).execute();
    }

    #[test]
    fn upcoming__end_of_week_window() {
        upcoming().due_date(date(1, 17)).execute();
    }

    #[test]
    fn upcoming__beyond_week_window() {
        upcoming().due_date(date(1, 18)).execute();
    }

    #[test]
    fn upcoming__months_away() {
        upcoming().due_date(date(6, 1)).execute();
    }

    #[test]
    fn is_payable() {
        assert!(OccurrenceStatus::Overdue.is_payable());
        assert!(OccurrenceStatus::Due.is_payable());
        assert!(!OccurrenceStatus::Upcoming.is_payable());
    }
}
