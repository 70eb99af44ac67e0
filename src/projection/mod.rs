mod advance;
mod occurrence;
mod projector;
mod settings;
mod status;

#[cfg(test)]
pub use occurrence::PaymentHandoff;
pub use occurrence::ProjectedOccurrence;
pub use projector::{project_records, Projection};
pub use settings::{Horizon, ProjectionSettings, ProjectionSettingsVaultValue};
pub use status::OccurrenceStatus;
