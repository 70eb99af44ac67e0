use chrono::NaiveDate;
use serde::Serialize;

use crate::amounts::{Amount, CurrencyIdent, Figure};
use crate::projection::status::{days_until, OccurrenceStatus};

/// One projected payment of a recurring schedule. Recomputed on every
/// projection, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedOccurrence {
    pub donation_id: String,
    pub occurrence_number: u32,
    pub due_date: NaiveDate,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Figure,
    pub currency: CurrencyIdent,
    pub category: String,
    pub status: OccurrenceStatus,
}

/// What the donation workflow needs to turn an occurrence into a payable
/// donation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHandoff {
    pub donation_id: String,
    pub occurrence_number: u32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Figure,
    pub currency: CurrencyIdent,
    pub category: String,
}

impl ProjectedOccurrence {
    pub fn key(&self) -> String {
        format!("{}-{}", self.donation_id, self.occurrence_number)
    }

    pub fn is_payable(&self) -> bool {
        self.status.is_payable()
    }

    pub fn days_until_due(&self, today: &NaiveDate) -> i64 {
        days_until(&self.due_date, today)
    }

    pub fn amount(&self) -> Amount {
        Amount::new(&self.currency, self.amount)
    }

    pub fn payment_handoff(&self) -> Option<PaymentHandoff> {
        if !self.is_payable() {
            return None;
        }
        Some(PaymentHandoff {
            donation_id: self.donation_id.clone(),
            occurrence_number: self.occurrence_number,
            amount: self.amount,
            currency: self.currency.clone(),
            category: self.category.clone(),
        })
    }
}
