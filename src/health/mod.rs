// Cluster status evaluation
pub mod document;
pub mod evaluator;

use thiserror::Error;

/// Why a status document did not certify a healthy cluster.
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("status document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read status document: {0}")]
    Read(#[from] std::io::Error),
    #[error("status document lists no applications")]
    NoApplications,
    #[error("expected {expected} at '{path}'")]
    UnexpectedShape { path: String, expected: &'static str },
    #[error("no units found in any application")]
    NoUnits,
    #[error(
        "unit '{unit}' of application '{application}' is not ready (workload: {}, agent: {})",
        .workload.as_deref().unwrap_or("absent"),
        .agent.as_deref().unwrap_or("absent")
    )]
    UnitNotReady {
        application: String,
        unit: String,
        workload: Option<String>,
        agent: Option<String>,
    },
}

pub use document::{field_if_mapping, is_empty_value, mapping_entries, string_if_present};
pub use evaluator::{evaluate_document, evaluate_reader, evaluate_status, is_cluster_healthy, UnitState};
