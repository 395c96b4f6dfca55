use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

use juju_deploy_checks::cli::{is_informational, Cli};
use juju_deploy_checks::{init_tracing, load_config, Preflight, Reporter, SystemCommandRunner};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(if is_informational(&e) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
    };
    let cfg = cli.apply(load_config()?);
    info!(
        "timeout = {}s, force_juju_checks = {}",
        cfg.command_timeout.as_secs(),
        cfg.force_juju_checks
    );

    let runner = SystemCommandRunner::new();
    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), cfg.colorize);
    let report = Preflight::new(&runner, &cfg)
        .run(&mut reporter)
        .await
        .context("failed to write preflight report")?;

    Ok(if report.exit_code() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
