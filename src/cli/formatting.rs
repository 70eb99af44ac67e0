use comfy_table::Table;
use serde::Serialize;

use crate::amounts::Amount;
use crate::projection::{OccurrenceStatus, ProjectedOccurrence, Projection};
use crate::view::ActiveDonation;

pub fn format_occurrences_screen(projection: &Projection, payable_only: bool) -> Result<String, String> {
    let mut components = vec![title(&format!(
        "Occurrences from {} to {}",
        projection.today, projection.horizon_end
    ))];

    let shown: Vec<&ProjectedOccurrence> = projection
        .occurrences
        .iter()
        .filter(|occurrence| !payable_only || occurrence.is_payable())
        .collect();

    if shown.is_empty() {
        components.push(
            (if payable_only { "Nothing to pay right now" } else { "No upcoming payments" }).to_string(),
        );
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Due date", "Occurrence", "Amount", "Category", "Status", "Pay now"]);
        for occurrence in shown {
            table.add_row(vec![
                occurrence.due_date.to_string(),
                occurrence.key(),
                occurrence.amount().to_string(),
                occurrence.category.clone(),
                status_label(occurrence.status, occurrence.days_until_due(&projection.today)),
                (if occurrence.is_payable() { "Yes" } else { "" }).to_string(),
            ]);
        }
        components.push(table.to_string());
    }

    if !projection.rejected.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Donation", "Reason"]);
        for rejected in projection.rejected.iter() {
            table.add_row(vec![rejected.donation_id.clone(), rejected.error.to_string()]);
        }
        components.push(format!(
            "{}\n{}",
            title("Unable to show upcoming payments for these donations"),
            table
        ));
    }

    let totals: Vec<(OccurrenceStatus, Vec<Amount>)> = projection
        .totals_by_status()?
        .into_iter()
        .filter(|(status, _)| !payable_only || status.is_payable())
        .collect();
    if !totals.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Status", "Total"]);
        for (status, amounts) in totals {
            table.add_row(vec![status_name(status).to_string(), join_amounts(&amounts)]);
        }
        components.push(format!("{}\n{}", title("Totals"), table));
    }

    components.push(format!("Release: {}", env!("RELEASE")));

    Ok(components.join("\n\n"))
}

pub fn format_active_screen(active: &[ActiveDonation]) -> String {
    let mut components = vec![title("Active recurring donations")];

    if active.is_empty() {
        components.push("No active recurring donations".to_string());
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            "Donation",
            "Schedule",
            "Since",
            "Next payment",
            "Payments made",
            "Amount",
            "Category",
        ]);
        for donation in active {
            table.add_row(vec![
                donation.donation_id.clone(),
                donation.cadence.clone(),
                donation.since.to_string(),
                donation.next_payment_date.to_string(),
                donation.executions_label(),
                donation.amount().to_string(),
                donation.category.clone(),
            ]);
        }
        components.push(table.to_string());
    }

    components.push(format!("Release: {}", env!("RELEASE")));

    components.join("\n\n")
}

pub fn format_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|why| format!("Could not serialize to JSON: {}", why))
}

fn status_name(status: OccurrenceStatus) -> &'static str {
    match status {
        OccurrenceStatus::Overdue => "Overdue",
        OccurrenceStatus::Due => "Due",
        OccurrenceStatus::Upcoming => "Upcoming",
    }
}

fn status_label(status: OccurrenceStatus, days_until_due: i64) -> String {
    let days = |count: i64| if count == 1 { "1 day".to_string() } else { format!("{} days", count) };
    match status {
        OccurrenceStatus::Overdue => format!("Overdue by {}", days(-days_until_due)),
        OccurrenceStatus::Due => "Due today".to_string(),
        OccurrenceStatus::Upcoming => format!("In {}", days(days_until_due)),
    }
}

fn join_amounts(amounts: &[Amount]) -> String {
    amounts
        .iter()
        .map(|amount| amount.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

fn title(string: &str) -> String {
    let string_length = string.len();
    string.to_string() + "\n" + &"=".repeat(string_length)
}
