use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::types::CommandOutput;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("'{0}' not found in PATH")]
    NotFound(String),
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{command}' timed out after {}s.", .after.as_secs())]
    TimedOut { command: String, after: Duration },
}

/// Seam between the probes and the operating system.
#[async_trait]
pub trait CommandRunner {
    /// Resolves `program` on the search path.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Runs `program` to completion, giving up after `limit`.
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        limit: Duration,
    ) -> Result<CommandOutput, CommandError>;
}

/// Runs real processes, resolved either on `$PATH` or on a fixed search path.
#[derive(Debug, Default, Clone)]
pub struct SystemCommandRunner {
    search_path: Option<OsString>,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_path<P: Into<OsString>>(search_path: P) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(program, Some(paths), cwd).ok()
            }
            None => which::which(program).ok(),
        }
    }

    async fn run(
        &self,
        program: &str,
        args: &[&str],
        limit: Duration,
    ) -> Result<CommandOutput, CommandError> {
        let path = self
            .locate(program)
            .ok_or_else(|| CommandError::NotFound(program.to_string()))?;
        debug!("running {} {:?} (timeout {}s)", path.display(), args, limit.as_secs());

        let child = Command::new(&path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| CommandError::Spawn {
                program: program.to_string(),
                source,
            })?;

        match timeout(limit, child.wait_with_output()).await {
            Ok(Ok(output)) => Ok(CommandOutput {
                stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                exit_code: output.status.code(),
            }),
            Ok(Err(source)) => Err(CommandError::Spawn {
                program: program.to_string(),
                source,
            }),
            // dropping the future kills the child
            Err(_) => Err(CommandError::TimedOut {
                command: command_line(program, args),
                after: limit,
            }),
        }
    }
}

pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
