use chrono::NaiveDate;
use serde::Serialize;

use crate::amounts::{Amount, CurrencyIdent, Figure};
use crate::projection::{project_records, Projection, ProjectionSettings};
use crate::schedule::{ScheduleRecord, ScheduleSource};

/* Entrypoint */
pub struct RecurringDonationsView {
    records: Vec<ScheduleRecord>,
    settings: ProjectionSettings,
    today: NaiveDate,
}

impl RecurringDonationsView {
    pub fn new(records: Vec<ScheduleRecord>, settings: ProjectionSettings, today: NaiveDate) -> RecurringDonationsView {
        RecurringDonationsView {
            records,
            settings,
            today,
        }
    }

    pub fn from_source<S: ScheduleSource>(
        source: &S,
        settings: ProjectionSettings,
        today: NaiveDate,
    ) -> Result<RecurringDonationsView, String> {
        let records = source
            .recurring_schedules()
            .map_err(|error| "Failed to fetch recurring donations: ".to_string() + &error)?;
        Ok(RecurringDonationsView::new(records, settings, today))
    }

    pub fn occurrences_tab(&self) -> Projection {
        project_records(self.records.clone(), &self.today, &self.settings)
    }

    /// Active schedules in the order the source returned them.
    pub fn active_tab(&self) -> Vec<ActiveDonation> {
        self.records
            .iter()
            .filter_map(|record| record.as_ref().ok())
            .filter(|schedule| schedule.is_active)
            .map(|schedule| ActiveDonation {
                donation_id: schedule.id.clone(),
                cadence: match schedule.cadence() {
                    Ok(cadence) => cadence.to_string(),
                    Err(error) => format!("Invalid schedule: {}", error),
                },
                since: schedule.start_date,
                next_payment_date: schedule.next_payment_date,
                executions: schedule.total_executions,
                max_occurrences: schedule.max_occurrences,
                end_date: schedule.end_date,
                amount: schedule.amount,
                currency: schedule.currency.clone(),
                category: schedule.category.clone(),
            })
            .collect()
    }
}

/* Output types */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDonation {
    pub donation_id: String,
    pub cadence: String,
    pub since: NaiveDate,
    pub next_payment_date: NaiveDate,
    pub executions: u32,
    pub max_occurrences: Option<u32>,
    pub end_date: Option<NaiveDate>,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Figure,
    pub currency: CurrencyIdent,
    pub category: String,
}

impl ActiveDonation {
    pub fn amount(&self) -> Amount {
        Amount::new(&self.currency, self.amount)
    }

    /// "3" or "3 / 12" when the schedule has a lifetime cap.
    pub fn executions_label(&self) -> String {
        match self.max_occurrences {
            Some(max_occurrences) => format!("{} / {}", self.executions, max_occurrences),
            None => self.executions.to_string(),
        }
    }
}
