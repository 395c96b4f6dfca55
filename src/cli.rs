use clap::error::ErrorKind;
use clap::Parser;

use crate::types::Config;

/// Token that forces the Juju-specific probes to run.
pub const FORCE_JUJU_TOKEN: &str = "juju";

#[derive(Parser, Debug)]
#[command(
    name = "validate-deployment",
    version,
    about = "Pre-flight checks before an Ansible/Juju deployment"
)]
pub struct Cli {
    #[arg(long, help = "Disable coloured output")]
    pub no_color: bool,
    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Per-command timeout in seconds"
    )]
    pub timeout_secs: Option<u64>,
    #[arg(help = "Pass 'juju' to run the Juju checks even if tools are missing")]
    pub targets: Vec<String>,
}

impl Cli {
    pub fn force_juju_checks(&self) -> bool {
        self.targets.iter().any(|t| t == FORCE_JUJU_TOKEN)
    }

    /// Flags given on the command line win over environment settings.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.no_color {
            config.colorize = false;
        }
        if let Some(secs) = self.timeout_secs {
            config.command_timeout = std::time::Duration::from_secs(secs);
        }
        if self.force_juju_checks() {
            config.force_juju_checks = true;
        }
        config
    }
}

/// `--help` and `--version` end the run successfully; every other parse error fails it.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}
