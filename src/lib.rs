// Public modules
pub mod types;
pub mod config;
pub mod parsing;
pub mod health;
pub mod preflight;
pub mod report;
pub mod console;
pub mod cli;

// Re-export commonly used items
pub use types::*;
pub use config::{load_config, load_config_with_env, EnvironmentProvider, SystemEnvironment, MockEnvironment};
pub use parsing::{parse_major_version, version_number, VersionError};
pub use health::{evaluate_document, evaluate_reader, evaluate_status, is_cluster_healthy, HealthError};
pub use preflight::{CommandError, CommandRunner, Preflight, SystemCommandRunner};
pub use report::{PreflightReport, ReportSummary};
pub use console::Reporter;

/// Installs the stderr log subscriber shared by both binaries.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
