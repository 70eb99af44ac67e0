use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter};

use rust_decimal::Decimal;

pub type Figure = Decimal;
pub type CurrencyIdent = String;

enum Sign {
    Prefix(&'static str),
    Suffix(String),
}

fn sign_for(currency: &CurrencyIdent) -> Sign {
    match currency.as_str() {
        "EUR" => Sign::Prefix("€"),
        "USD" => Sign::Prefix("$"),
        "GBP" => Sign::Prefix("£"),
        "XOF" | "XAF" => Sign::Suffix("FCFA".to_string()),
        other => Sign::Suffix(other.to_string()),
    }
}

/// A figure in a single currency, rounded to the cent.
#[derive(Clone, PartialEq, Eq)]
pub struct Amount {
    currency: CurrencyIdent,
    figure: Figure,
}

impl Amount {
    pub fn new(currency: &CurrencyIdent, figure: Figure) -> Amount {
        Amount {
            currency: currency.clone(),
            figure: figure.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointNearestEven),
        }
    }

    pub fn currency(&self) -> &CurrencyIdent {
        &self.currency
    }

    pub fn add(&self, other_amount: &Amount) -> Result<Amount, String> {
        if self.currency != other_amount.currency {
            return Err(format!(
                "Cannot add {} to {}: donations are never converted between currencies",
                other_amount, self
            ));
        }
        Ok(Amount::new(&self.currency, self.figure + other_amount.figure))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match sign_for(&self.currency) {
            Sign::Prefix(sign) => write!(f, "{}{}", sign, self.figure),
            Sign::Suffix(sign) => write!(f, "{} {}", self.figure, sign),
        }
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// One total per currency, ordered by currency code.
pub fn totals_by_currency<I: IntoIterator<Item = Amount>>(amounts: I) -> Result<Vec<Amount>, String> {
    let mut totals: BTreeMap<CurrencyIdent, Amount> = BTreeMap::new();
    for amount in amounts {
        let total = match totals.get(amount.currency()) {
            Some(total) => total.add(&amount)?,
            None => amount.clone(),
        };
        totals.insert(amount.currency().clone(), total);
    }
    Ok(totals.into_values().collect())
}
