use eyre::Report;
use thiserror::Error;
use types::config::ConfigError;

use crate::env_tables::EnvTableError;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Worker '{worker}' references undefined profile '{profile}'")]
    UnknownProfile { worker: String, profile: String },

    #[error("Worker '{0}' does not match its profile or the capability rules")]
    WorkerMismatch(String),

    #[error("Worker not found: {0}")]
    WorkerNotFound(String),

    #[error("Fleet validation failed with {} problem(s): {}", .0.len(), join_reports(.0))]
    Validation(Vec<Report>),

    #[error(transparent)]
    EnvTable(#[from] EnvTableError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn join_reports(reports: &[Report]) -> String {
    reports
        .iter()
        .map(|report| report.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
