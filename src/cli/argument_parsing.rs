use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::projection::{Horizon, ProjectionSettings};
use crate::schedule::calendar_date::parse_calendar_date;

#[derive(Parser)]
#[command(about = "Projects the upcoming payments of recurring donations")]
pub struct OccurrencesOptions {
    /// Directory holding config.json, defaults to the current directory
    #[arg(short = 'V', long, global = true)]
    pub vault: Option<PathBuf>,

    /// Date to project from, defaults to today
    #[arg(long, value_parser = parse_calendar_date, global = true)]
    pub today: Option<NaiveDate>,

    #[arg(long, conflicts_with = "horizon_days", global = true)]
    pub horizon_months: Option<u32>,

    #[arg(long, global = true)]
    pub horizon_days: Option<u32>,

    #[arg(long, global = true)]
    pub max_per_schedule: Option<usize>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub tab: Tab,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Tab {
    /// Projected payments of every active recurring donation
    Occurrences {
        /// Only what can be paid right away
        #[arg(long)]
        payable_only: bool,
    },
    /// Active recurring donations
    Active,
}

impl OccurrencesOptions {
    /// Command line flags win over the vault's settings.
    pub fn projection_settings(&self, from_vault: Option<ProjectionSettings>) -> ProjectionSettings {
        let mut settings = from_vault.unwrap_or_default();
        if let Some(months) = self.horizon_months {
            settings.horizon = Horizon::Months(months);
        }
        if let Some(days) = self.horizon_days {
            settings.horizon = Horizon::Days(days);
        }
        if let Some(max_per_schedule) = self.max_per_schedule {
            settings.max_per_schedule = max_per_schedule;
        }
        settings
    }
}
