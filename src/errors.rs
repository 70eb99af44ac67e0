use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::schedule::Frequency;

/// Why a recurring schedule could not be projected.
///
/// Raised per schedule: the caller keeps projecting the other schedules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidScheduleError {
    #[error("Unrecognized frequency: {0:?}")]
    UnknownFrequency(String),

    #[error("Interval must be at least 1, got {0}")]
    IntervalTooSmall(i64),

    #[error("A weekly schedule needs a dayOfWeek")]
    MissingDayOfWeek,

    #[error("dayOfWeek must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    DayOfWeekOutOfRange(i64),

    #[error("A {0} schedule needs a dayOfMonth")]
    MissingDayOfMonth(Frequency),

    #[error("dayOfMonth must be between 1 and 31, got {0}")]
    DayOfMonthOutOfRange(i64),

    #[error("Could not compute the occurrence following {0}")]
    DateOutOfRange(NaiveDate),

    #[error("Malformed recurring donation record: {0}")]
    Malformed(String),
}

/// A schedule left out of a projection, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedSchedule {
    pub donation_id: String,
    #[serde(serialize_with = "serialize_as_message")]
    pub error: InvalidScheduleError,
}

fn serialize_as_message<S: Serializer>(
    error: &InvalidScheduleError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}
