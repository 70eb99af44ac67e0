use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::Weekday;
use serde::Serialize;

use crate::errors::InvalidScheduleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl FromStr for Frequency {
    type Err = InvalidScheduleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(InvalidScheduleError::UnknownFrequency(other.to_string())),
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        };
        write!(f, "{}", name)
    }
}

/// The day a schedule is pinned to, when its frequency needs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    None,
    Weekday(Weekday),
    DayOfMonth(u32),
}

/// A validated "every N units" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub frequency: Frequency,
    pub interval: u32,
    pub anchor: Anchor,
}

impl Cadence {
    pub fn new(
        frequency: Frequency,
        interval: i64,
        day_of_week: Option<i64>,
        day_of_month: Option<i64>,
    ) -> Result<Cadence, InvalidScheduleError> {
        if interval < 1 {
            return Err(InvalidScheduleError::IntervalTooSmall(interval));
        }
        let interval = u32::try_from(interval).map_err(|_| {
            InvalidScheduleError::Malformed(format!("interval {} is too large", interval))
        })?;

        let anchor = match frequency {
            Frequency::Daily => Anchor::None,
            Frequency::Weekly => {
                let index = day_of_week.ok_or(InvalidScheduleError::MissingDayOfWeek)?;
                Anchor::Weekday(weekday_from_sunday_index(index)?)
            }
            Frequency::Monthly | Frequency::Quarterly | Frequency::Yearly => {
                let day = day_of_month.ok_or(InvalidScheduleError::MissingDayOfMonth(frequency))?;
                if !(1..=31).contains(&day) {
                    return Err(InvalidScheduleError::DayOfMonthOutOfRange(day));
                }
                Anchor::DayOfMonth(day as u32)
            }
        };

        Ok(Cadence {
            frequency,
            interval,
            anchor,
        })
    }
}

// 0 is Sunday, the way the backend counts
fn weekday_from_sunday_index(index: i64) -> Result<Weekday, InvalidScheduleError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(InvalidScheduleError::DayOfWeekOutOfRange(other)),
    }
}

fn weekday_name(weekday: &Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl Display for Cadence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let unit = match self.frequency {
            Frequency::Daily => "day",
            Frequency::Weekly => "week",
            Frequency::Monthly => "month",
            Frequency::Quarterly => "quarter",
            Frequency::Yearly => "year",
        };

        if self.interval == 1 {
            write!(f, "Every {}", unit)?;
        } else {
            write!(f, "Every {} {}s", self.interval, unit)?;
        }

        match &self.anchor {
            Anchor::None => Ok(()),
            Anchor::Weekday(weekday) => write!(f, " on {}", weekday_name(weekday)),
            Anchor::DayOfMonth(day) => write!(f, " on day {}", day),
        }
    }
}
