use serde_json::Value;
use std::io::Read;
use tracing::{debug, info};

use crate::types::HealthSummary;
use super::document::{field_if_mapping, is_empty_value, mapping_entries, status_current};
use super::HealthError;

const READY_WORKLOAD: &str = "active";
const READY_AGENT: &str = "idle";

/// Workload and agent state reported for a single unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitState {
    pub workload: Option<String>,
    pub agent: Option<String>,
}

impl UnitState {
    pub fn from_entry(unit: &Value) -> Self {
        Self {
            workload: status_current(unit, "workload-status").map(str::to_string),
            agent: status_current(unit, "juju-status").map(str::to_string),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.workload.as_deref() == Some(READY_WORKLOAD) && self.agent.as_deref() == Some(READY_AGENT)
    }
}

/// Boolean verdict for a raw status document. Every failure reads as unhealthy.
pub fn is_cluster_healthy(input: &[u8]) -> bool {
    verdict(evaluate_status(input))
}

/// Reads the whole stream once and evaluates it.
pub fn evaluate_reader<R: Read>(mut reader: R) -> bool {
    let mut input = Vec::new();
    let result = reader
        .read_to_end(&mut input)
        .map_err(HealthError::from)
        .and_then(|_| evaluate_status(&input));
    verdict(result)
}

pub fn evaluate_status(input: &[u8]) -> Result<HealthSummary, HealthError> {
    let document: Value = serde_json::from_slice(input)?;
    evaluate_document(&document)
}

/// Walks every application and unit, stopping at the first unit that is not ready.
pub fn evaluate_document(document: &Value) -> Result<HealthSummary, HealthError> {
    if !document.is_object() {
        return Err(HealthError::UnexpectedShape {
            path: "$".to_string(),
            expected: "mapping",
        });
    }

    let applications = match field_if_mapping(document, "applications") {
        Some(apps) if !is_empty_value(apps) => apps,
        _ => return Err(HealthError::NoApplications),
    };

    let mut summary = HealthSummary::default();
    for (app_name, app) in mapping_entries(applications, "applications")? {
        if !app.is_object() {
            return Err(HealthError::UnexpectedShape {
                path: format!("applications.{}", app_name),
                expected: "mapping",
            });
        }

        let units = match field_if_mapping(app, "units") {
            Some(units) if !is_empty_value(units) => units,
            _ => {
                debug!("application {} has no units, skipping", app_name);
                summary.applications_skipped += 1;
                continue;
            }
        };
        summary.applications_examined += 1;

        let units_path = format!("applications.{}.units", app_name);
        for (unit_name, unit) in mapping_entries(units, &units_path)? {
            summary.units_examined += 1;
            if !unit.is_object() {
                return Err(HealthError::UnexpectedShape {
                    path: format!("{}.{}", units_path, unit_name),
                    expected: "mapping",
                });
            }

            let state = UnitState::from_entry(unit);
            debug!(
                "unit {}: workload={:?} agent={:?}",
                unit_name, state.workload, state.agent
            );
            if !state.is_ready() {
                return Err(HealthError::UnitNotReady {
                    application: app_name.to_string(),
                    unit: unit_name.to_string(),
                    workload: state.workload,
                    agent: state.agent,
                });
            }
        }
    }

    if summary.units_examined == 0 {
        return Err(HealthError::NoUnits);
    }
    Ok(summary)
}

fn verdict(result: Result<HealthSummary, HealthError>) -> bool {
    match result {
        Ok(summary) => {
            info!(
                "cluster healthy: {} units ready across {} applications",
                summary.units_examined, summary.applications_examined
            );
            true
        }
        Err(e) => {
            info!("cluster not healthy: {}", e);
            false
        }
    }
}
