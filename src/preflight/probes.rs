use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::parsing::{parse_major_version, version_number, VersionError};
use crate::types::{ProbeKind, ProbeResult, MIN_JUJU_MAJOR};
use super::runner::{command_line, CommandError, CommandRunner};

/// Reason a probe did not pass, rendered as its diagnostic line.
#[derive(Debug, Error)]
pub enum ProbeFailure {
    #[error("'{0}' not found in PATH. Please install it.")]
    ToolMissing(String),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("'{command}' exited with {}{}", exit_label(.code), stderr_suffix(.stderr))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("{0}")]
    Version(#[from] VersionError),
    #[error("Juju version is too old. Please upgrade to 3.x or newer.")]
    TooOld { major: u32 },
    #[error("Not logged into a Juju controller. Some checks will be skipped.")]
    NotLoggedIn,
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "no status (killed by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

fn outcome(kind: ProbeKind, description: String, failure: Option<ProbeFailure>) -> ProbeResult {
    if let Some(f) = &failure {
        warn!("{} {}", description, f);
    }
    ProbeResult {
        kind,
        description,
        passed: failure.is_none(),
        diagnostics: failure.map(|f| vec![f.to_string()]).unwrap_or_default(),
    }
}

pub fn check_tool_installed<R: CommandRunner + ?Sized>(runner: &R, tool: &str) -> ProbeResult {
    let failure = match runner.locate(tool) {
        Some(path) => {
            debug!("{} found at {}", tool, path.display());
            None
        }
        None => Some(ProbeFailure::ToolMissing(tool.to_string())),
    };
    outcome(
        ProbeKind::ToolPresence,
        format!("Tool '{}' is installed.", tool),
        failure,
    )
}

pub async fn check_juju_version<R: CommandRunner + ?Sized>(runner: &R, limit: Duration) -> ProbeResult {
    let kind = ProbeKind::JujuVersion;
    let args = ["version"];
    let output = match runner.run("juju", &args, limit).await {
        Ok(output) if output.success() => output,
        Ok(output) => {
            let failure = ProbeFailure::NonZeroExit {
                command: command_line("juju", &args),
                code: output.exit_code,
                stderr: output.stderr,
            };
            return outcome(kind, "Could not determine Juju version.".to_string(), Some(failure));
        }
        Err(e) => {
            return outcome(kind, "Could not determine Juju version.".to_string(), Some(e.into()));
        }
    };

    let version = version_number(&output.stdout);
    match parse_major_version(&output.stdout) {
        Ok(major) => {
            let failure = (major < MIN_JUJU_MAJOR).then_some(ProbeFailure::TooOld { major });
            outcome(
                kind,
                format!("Juju version is {} (>= {}.x).", version, MIN_JUJU_MAJOR),
                failure,
            )
        }
        Err(e) => outcome(
            kind,
            format!("Could not parse Juju version from '{}'.", output.stdout),
            Some(e.into()),
        ),
    }
}

/// Advisory: a missing login is reported but does not fail the run.
pub async fn check_juju_login<R: CommandRunner + ?Sized>(runner: &R, limit: Duration) -> ProbeResult {
    let logged_in = match runner.run("juju", &["whoami"], limit).await {
        Ok(output) => output.success() && !output.stderr.contains("Not logged in"),
        Err(e) => {
            debug!("juju whoami failed: {}", e);
            false
        }
    };
    outcome(
        ProbeKind::JujuLogin,
        "Logged into a Juju controller.".to_string(),
        (!logged_in).then_some(ProbeFailure::NotLoggedIn),
    )
}
