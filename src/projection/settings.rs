use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::vault::VaultReadable;

/// How far ahead of today occurrences are projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    Days(u32),
    Months(u32),
}

impl Default for Horizon {
    fn default() -> Self {
        Horizon::Months(3)
    }
}

impl Horizon {
    /// Last date inside the horizon, inclusive.
    pub fn end_from(&self, today: &NaiveDate) -> NaiveDate {
        let end = match self {
            Horizon::Days(days) => today.checked_add_days(Days::new(*days as u64)),
            Horizon::Months(months) => today.checked_add_months(Months::new(*months)),
        };
        end.unwrap_or(NaiveDate::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    pub horizon: Horizon,
    /// Bounds the output whatever the schedule says.
    pub max_per_schedule: usize,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        ProjectionSettings {
            horizon: Horizon::default(),
            max_per_schedule: 10,
        }
    }
}

pub type ProjectionSettingsVaultValue = Option<ProjectionSettings>;

impl VaultReadable for ProjectionSettingsVaultValue {
    const KEY: &'static str = "projection";
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::{from_value, json};

    use super::{Horizon, ProjectionSettings};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn end_from__months() {
        assert_eq!(Horizon::Months(3).end_from(&date(2024, 1, 10)), date(2024, 4, 10));
    }

    #[test]
    fn end_from__months__clamped_to_month_end() {
        assert_eq!(Horizon::Months(3).end_from(&date(2023, 11, 30)), date(2024, 2, 29));
    }

    #[test]
    fn end_from__days() {
        assert_eq!(Horizon::Days(30).end_from(&date(2024, 2, 15)), date(2024, 3, 16));
    }

    #[test]
    fn end_from__saturates_at_the_end_of_time() {
        assert_eq!(Horizon::Days(10).end_from(&NaiveDate::MAX), NaiveDate::MAX);
    }

    #[test]
    fn settings__defaults() {
        let settings: ProjectionSettings = from_value(json!({})).unwrap();
        assert_eq!(settings, ProjectionSettings::default());
        assert_eq!(settings.horizon, Horizon::Months(3));
        assert_eq!(settings.max_per_schedule, 10);
    }

    #[test]
    fn settings__from_vault_shape() {
        let settings: ProjectionSettings =
            from_value(json!({"horizon": {"days": 45}, "max_per_schedule": 4})).unwrap();
        assert_eq!(
            settings,
            ProjectionSettings {
                horizon: Horizon::Days(45),
                max_per_schedule: 4
            }
        );
    }
}
