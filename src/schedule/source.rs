#[cfg(test)]
use mockall::automock;
use serde_json::Value;
use tracing::debug;

use crate::errors::RejectedSchedule;
use crate::schedule::recurring_schedule::{record_id, RecurringSchedule};
use crate::vault::{VaultImpl, VaultReadable};

/// A record that could not be read is reported on its own, next to the
/// records that could.
pub type ScheduleRecord = Result<RecurringSchedule, RejectedSchedule>;

#[cfg_attr(test, automock)]
pub trait ScheduleSource {
    fn recurring_schedules(&self) -> Result<Vec<ScheduleRecord>, String>;
}

pub type RecurringDonationsVaultValue = Vec<Value>;

impl VaultReadable for RecurringDonationsVaultValue {
    const KEY: &'static str = "recurring_donations";
}

pub fn parse_records(records: &[Value]) -> Vec<ScheduleRecord> {
    records
        .iter()
        .map(|record| {
            RecurringSchedule::from_record(record).map_err(|error| RejectedSchedule {
                donation_id: record_id(record),
                error,
            })
        })
        .collect()
}

impl ScheduleSource for VaultImpl {
    fn recurring_schedules(&self) -> Result<Vec<ScheduleRecord>, String> {
        let records = RecurringDonationsVaultValue::from_vault(self)?;
        debug!(count = records.len(), "Read recurring donation records");
        Ok(parse_records(&records))
    }
}
