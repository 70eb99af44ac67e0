use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use crate::amounts::{totals_by_currency, Amount};
use crate::errors::{InvalidScheduleError, RejectedSchedule};
use crate::projection::advance::next_due_date;
use crate::projection::occurrence::{PaymentHandoff, ProjectedOccurrence};
use crate::projection::settings::ProjectionSettings;
use crate::projection::status::{classify, OccurrenceStatus};
use crate::schedule::{Anchor, RecurringSchedule, ScheduleRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub today: NaiveDate,
    pub horizon_end: NaiveDate,
    /// Sorted by due date, then donation, then occurrence number.
    pub occurrences: Vec<ProjectedOccurrence>,
    pub rejected: Vec<RejectedSchedule>,
}

impl Projection {
    pub fn payable(&self) -> Vec<PaymentHandoff> {
        self.occurrences
            .iter()
            .filter_map(|occurrence| occurrence.payment_handoff())
            .collect()
    }

    /// Amounts per status, one total per currency.
    pub fn totals_by_status(&self) -> Result<Vec<(OccurrenceStatus, Vec<Amount>)>, String> {
        [
            OccurrenceStatus::Overdue,
            OccurrenceStatus::Due,
            OccurrenceStatus::Upcoming,
        ]
        .into_iter()
        .map(|status| {
            let amounts = self
                .occurrences
                .iter()
                .filter(|occurrence| occurrence.status == status)
                .map(|occurrence| occurrence.amount());
            Ok((status, totals_by_currency(amounts)?))
        })
        .filter(|totals| !matches!(totals, Ok((_, amounts)) if amounts.is_empty()))
        .collect()
    }
}

/// Projects every schedule, keeping the ones that fail aside.
pub fn project_occurrences(
    schedules: &[RecurringSchedule],
    today: &NaiveDate,
    settings: &ProjectionSettings,
) -> Projection {
    let mut occurrences = Vec::new();
    let mut rejected = Vec::new();

    for schedule in schedules {
        match project_schedule(schedule, today, settings) {
            Ok(projected) => occurrences.extend(projected),
            Err(error) => {
                warn!(donation_id = %schedule.id, %error, "Unable to project recurring donation");
                rejected.push(RejectedSchedule {
                    donation_id: schedule.id.clone(),
                    error,
                });
            }
        }
    }

    occurrences.sort_by(|left, right| {
        left.due_date
            .cmp(&right.due_date)
            .then_with(|| left.donation_id.cmp(&right.donation_id))
            .then_with(|| left.occurrence_number.cmp(&right.occurrence_number))
    });

    Projection {
        today: *today,
        horizon_end: settings.horizon.end_from(today),
        occurrences,
        rejected,
    }
}

/// Same as [`project_occurrences`], for records straight from a source:
/// unreadable records are reported as rejected, before the invalid ones.
pub fn project_records(
    records: Vec<ScheduleRecord>,
    today: &NaiveDate,
    settings: &ProjectionSettings,
) -> Projection {
    let (readable, unreadable): (Vec<ScheduleRecord>, Vec<ScheduleRecord>) =
        records.into_iter().partition(|record| record.is_ok());
    let schedules: Vec<RecurringSchedule> = readable.into_iter().filter_map(Result::ok).collect();

    let mut projection = project_occurrences(&schedules, today, settings);

    let mut rejected: Vec<RejectedSchedule> = unreadable.into_iter().filter_map(Result::err).collect();
    for unreadable in rejected.iter() {
        warn!(donation_id = %unreadable.donation_id, error = %unreadable.error, "Unable to read recurring donation");
    }
    rejected.append(&mut projection.rejected);
    projection.rejected = rejected;

    projection
}

pub fn project_schedule(
    schedule: &RecurringSchedule,
    today: &NaiveDate,
    settings: &ProjectionSettings,
) -> Result<Vec<ProjectedOccurrence>, InvalidScheduleError> {
    if !schedule.is_active {
        debug!(donation_id = %schedule.id, "Skipping inactive recurring donation");
        return Ok(vec![]);
    }

    let cadence = schedule.cadence()?;
    if let Anchor::Weekday(weekday) = cadence.anchor {
        if schedule.next_payment_date.weekday() != weekday {
            warn!(
                donation_id = %schedule.id,
                next_payment_date = %schedule.next_payment_date,
                expected = %weekday,
                "Next payment date is not on the schedule's day of week, projecting it as is"
            );
        }
    }

    let horizon_end = settings.horizon.end_from(today);
    let mut due_date = schedule.next_payment_date;
    // None once the numbering runs past u32::MAX
    let mut occurrence_number = schedule.total_executions.checked_add(1);
    let mut occurrences = Vec::new();

    while let Some(number) = occurrence_number {
        if occurrences.len() >= settings.max_per_schedule || due_date > horizon_end {
            break;
        }
        if schedule.end_date.is_some_and(|end_date| due_date > end_date) {
            break;
        }
        if schedule
            .max_occurrences
            .is_some_and(|max_occurrences| number > max_occurrences)
        {
            break;
        }

        occurrences.push(ProjectedOccurrence {
            donation_id: schedule.id.clone(),
            occurrence_number: number,
            due_date,
            amount: schedule.amount,
            currency: schedule.currency.clone(),
            category: schedule.category.clone(),
            status: classify(&due_date, today),
        });

        // A following date past the calendar's range ends the projection
        due_date = match next_due_date(&cadence, &due_date) {
            Ok(next) => next,
            Err(error) => {
                debug!(donation_id = %schedule.id, %error, "No further occurrence can be dated");
                break;
            }
        };
        occurrence_number = number.checked_add(1);
    }

    debug!(donation_id = %schedule.id, count = occurrences.len(), "Projected recurring donation");
    Ok(occurrences)
}
