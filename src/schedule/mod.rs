mod cadence;
pub mod calendar_date;
mod recurring_schedule;
mod source;

pub use cadence::{Anchor, Cadence, Frequency};
pub use recurring_schedule::RecurringSchedule;
pub use source::{ScheduleRecord, ScheduleSource};

#[cfg(test)]
pub use source::MockScheduleSource;
