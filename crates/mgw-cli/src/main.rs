//! MoneyGoWhere CLI
//!
//! Interactive menu and order tracking for small vendors

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mgw_core::logging_facility::{init, Profile};
use mgw_core::Session;
use mgw_store::open_data_dir;

mod repl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogProfile {
    /// Errors only
    Quiet,
    /// Human-readable debug logs
    Development,
    /// JSON logs
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Quiet => Profile::Quiet,
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "moneygowhere")]
#[command(about = "MoneyGoWhere - menu and order tracking", long_about = None)]
struct Cli {
    /// Directory holding menu.json and transactions.json
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Logging profile; logs go to stderr
    #[arg(long, value_enum, default_value_t = LogProfile::Quiet)]
    log_profile: LogProfile,

    /// Do not print the greeting
    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init(cli.log_profile.into());
    tracing::debug!(data_dir = %cli.data_dir.display(), "starting");

    let (menu_repo, ledger_repo) = open_data_dir(&cli.data_dir);
    let (session, warnings) = Session::open(Box::new(menu_repo), Box::new(ledger_repo));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = repl::Console::new(stdin.lock(), stdout.lock());

    for warning in &warnings {
        console
            .print_line(&format!("Warning: {} Starting with an empty list.", warning))
            .context("failed to write to stdout")?;
    }
    if !cli.no_banner {
        console
            .print_line(repl::BANNER)
            .context("failed to write to stdout")?;
    }

    repl::run(session, &mut console)
}
