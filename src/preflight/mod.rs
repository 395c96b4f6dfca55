// Pre-flight environment validation
pub mod probes;
pub mod runner;

use std::io::{self, Write};
use tracing::{info, warn};

use crate::console::Reporter;
use crate::report::PreflightReport;
use crate::types::{Config, REQUIRED_TOOLS};

pub use probes::{check_juju_login, check_juju_version, check_tool_installed, ProbeFailure};
pub use runner::{CommandError, CommandRunner, SystemCommandRunner};

/// Runs the fixed probe sequence against one runner.
pub struct Preflight<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    config: &'a Config,
}

impl<'a, R: CommandRunner + ?Sized> Preflight<'a, R> {
    pub fn new(runner: &'a R, config: &'a Config) -> Self {
        Self { runner, config }
    }

    /// Runs every probe in order, printing each line as soon as it is known.
    pub async fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> io::Result<PreflightReport> {
        let mut report = PreflightReport::new();
        reporter.header()?;

        for tool in REQUIRED_TOOLS {
            let result = check_tool_installed(self.runner, tool);
            reporter.probe(&result)?;
            report.add(result);
        }

        if self.config.force_juju_checks || report.tools_present() {
            let version = check_juju_version(self.runner, self.config.command_timeout).await;
            reporter.probe(&version)?;
            report.add(version);

            let login = check_juju_login(self.runner, self.config.command_timeout).await;
            reporter.probe(&login)?;
            report.add(login);
        } else {
            info!("required tools missing, skipping Juju checks");
            report.mark_juju_checks_skipped();
        }

        reporter.summary(&report)?;
        let summary = report.summary();
        if summary.has_failures() {
            warn!(
                "preflight failed: {} critical failures, {} of {} probes passed",
                summary.critical_failures,
                summary.passed,
                summary.total_probes()
            );
        } else {
            info!(
                "preflight passed: {} of {} probes passed",
                summary.passed,
                summary.total_probes()
            );
        }
        Ok(report)
    }
}
