use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::amounts::{CurrencyIdent, Figure};
use crate::errors::InvalidScheduleError;
use crate::schedule::calendar_date;
use crate::schedule::cadence::{Cadence, Frequency};

/// A recurring donation as the backend returns it.
///
/// Cadence fields are kept raw so a record with a bad cadence still
/// deserializes, and is rejected on its own by [`RecurringSchedule::cadence`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringSchedule {
    #[serde(alias = "_id", alias = "donationId")]
    pub id: String,
    pub frequency: String,
    #[serde(default = "default_interval")]
    pub interval: i64,
    #[serde(default)]
    pub day_of_week: Option<i64>,
    #[serde(default)]
    pub day_of_month: Option<i64>,
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "calendar_date::deserialize_option")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub max_occurrences: Option<u32>,
    #[serde(default)]
    pub total_executions: u32,
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub next_payment_date: NaiveDate,
    pub is_active: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Figure,
    pub currency: CurrencyIdent,
    #[serde(default)]
    pub category: String,
}

fn default_interval() -> i64 {
    1
}

impl RecurringSchedule {
    pub fn from_record(record: &Value) -> Result<RecurringSchedule, InvalidScheduleError> {
        serde_json::from_value(record.clone())
            .map_err(|why| InvalidScheduleError::Malformed(why.to_string()))
    }

    pub fn cadence(&self) -> Result<Cadence, InvalidScheduleError> {
        let frequency: Frequency = self.frequency.parse()?;
        Cadence::new(frequency, self.interval, self.day_of_week, self.day_of_month)
    }
}

/// Best effort identifier of a record that may not deserialize.
pub fn record_id(record: &Value) -> String {
    ["_id", "id", "donationId"]
        .iter()
        .find_map(|key| record.get(key))
        .map(|id| match id {
            Value::String(id) => id.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| "(unknown donation)".to_string())
}

#[cfg(test)]
impl RecurringSchedule {
    /// Active monthly schedule on the 15th, nothing paid yet.
    pub fn for_tests(id: &str) -> RecurringSchedule {
        RecurringSchedule {
            id: id.to_string(),
            frequency: "monthly".to_string(),
            interval: 1,
            day_of_week: None,
            day_of_month: Some(15),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: None,
            max_occurrences: None,
            total_executions: 0,
            next_payment_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            is_active: true,
            amount: rust_decimal_macros::dec!(5000),
            currency: "XOF".to_string(),
            category: "tithe".to_string(),
        }
    }
}
