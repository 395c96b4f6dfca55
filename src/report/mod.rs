use crate::types::{ProbeKind, ProbeResult};

/// Results of one preflight run, in the order the probes ran.
#[derive(Debug, Default)]
pub struct PreflightReport {
    pub results: Vec<ProbeResult>,
    /// True when tool presence failed and the Juju probes were not forced.
    pub juju_checks_skipped: bool,
}

impl PreflightReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: ProbeResult) {
        self.results.push(result);
    }

    pub fn mark_juju_checks_skipped(&mut self) {
        self.juju_checks_skipped = true;
    }

    /// Critical probes recorded so far all passed.
    pub fn critical_passed(&self) -> bool {
        self.results
            .iter()
            .filter(|r| r.kind.is_critical())
            .all(|r| r.passed)
    }

    pub fn tools_present(&self) -> bool {
        self.results
            .iter()
            .filter(|r| r.kind == ProbeKind::ToolPresence)
            .all(|r| r.passed)
    }

    pub fn exit_code(&self) -> i32 {
        if self.critical_passed() { 0 } else { 1 }
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary::default();
        for r in &self.results {
            match (r.passed, r.kind.is_critical()) {
                (true, _) => summary.passed += 1,
                (false, true) => summary.critical_failures += 1,
                (false, false) => summary.advisory_failures += 1,
            }
        }
        summary
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub passed: usize,
    pub critical_failures: usize,
    pub advisory_failures: usize,
}

impl ReportSummary {
    pub fn total_probes(&self) -> usize {
        self.passed + self.critical_failures + self.advisory_failures
    }

    pub fn has_failures(&self) -> bool {
        self.critical_failures > 0
    }
}
