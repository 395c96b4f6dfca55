use std::process::ExitCode;

use juju_deploy_checks::{evaluate_reader, init_tracing};

fn main() -> ExitCode {
    init_tracing();
    if evaluate_reader(std::io::stdin().lock()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
