use std::time::Duration;

/// Tools that must be on the search path before a deployment.
pub const REQUIRED_TOOLS: &[&str] = &["ansible", "juju", "lxd"];

/// Oldest supported Juju major version.
pub const MIN_JUJU_MAJOR: u32 = 3;

pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub command_timeout: Duration,
    pub colorize: bool,
    pub force_juju_checks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_timeout: Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS),
            colorize: true,
            force_juju_checks: false,
        }
    }
}

/// Captured result of one external command that ran to completion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    ToolPresence,
    JujuVersion,
    JujuLogin,
}

impl ProbeKind {
    /// Advisory probes are reported but never fail the run.
    pub fn is_critical(&self) -> bool {
        !matches!(self, ProbeKind::JujuLogin)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub kind: ProbeKind,
    pub description: String,
    pub passed: bool,
    /// Extra lines printed under the PASS/FAIL line when the probe fails.
    pub diagnostics: Vec<String>,
}

/// Counts of units and applications that took part in a healthy verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthSummary {
    pub applications_examined: usize,
    pub applications_skipped: usize,
    pub units_examined: usize,
}
