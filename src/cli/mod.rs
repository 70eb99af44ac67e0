use std::env::current_dir;

use argument_parsing::{OccurrencesOptions, Tab};
use chrono::Local;
use clap::Parser;

use crate::projection::ProjectionSettingsVaultValue;
use crate::vault::{VaultImpl, VaultReadable};
use crate::view::RecurringDonationsView;

mod argument_parsing;
mod formatting;

pub fn occurrences_operation() {
    let result: Result<String, String> = (|| {
        let arguments = OccurrencesOptions::parse();
        let vault_path = match &arguments.vault {
            Some(a) => a.clone(),
            None => current_dir().map_err(|e| e.to_string())?,
        };
        let vault = VaultImpl { path: vault_path };

        let settings = arguments.projection_settings(ProjectionSettingsVaultValue::from_vault(&vault)?);
        let today = arguments.today.unwrap_or_else(|| Local::now().date_naive());

        let view = RecurringDonationsView::from_source(&vault, settings, today)?;

        match arguments.tab {
            Tab::Occurrences { payable_only } => {
                let projection = view.occurrences_tab();
                match (arguments.json, payable_only) {
                    (true, true) => formatting::format_json(&projection.payable()),
                    (true, false) => formatting::format_json(&projection),
                    (false, _) => formatting::format_occurrences_screen(&projection, payable_only),
                }
            }
            Tab::Active => {
                let active = view.active_tab();
                if arguments.json {
                    formatting::format_json(&active)
                } else {
                    Ok(formatting::format_active_screen(&active))
                }
            }
        }
    })();

    match result {
        Ok(screen) => println!("{}", screen),
        Err(error) => println!("Could not project occurrences: {}", error),
    }
}
