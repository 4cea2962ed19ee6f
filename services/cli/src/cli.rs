use crate::launcher::{launch, LaunchArgs};
use crate::run::{run_once, RunArgs};
use clap::{Parser, Subcommand};
use police_jobs::config::AppConfig;
use police_jobs::error::AppError;
use police_jobs::telemetry::{self, LogStream};

#[derive(Parser, Debug)]
#[command(
    name = "Indiana Police Jobs",
    about = "Scrape the ILEA job board and map law enforcement openings by Indiana county",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape, classify, and write the reports (default command)
    Run(RunArgs),
    /// Guided run that checks the output directory and offers to open the map
    Launch(LaunchArgs),
}

impl Command {
    /// `--json` keeps stdout for the summary document alone.
    fn log_stream(&self) -> LogStream {
        match self {
            Command::Run(args) if args.json => LogStream::Stderr,
            _ => LogStream::Stdout,
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, command.log_stream())?;

    match command {
        Command::Run(args) => run_once(config, args),
        Command::Launch(args) => launch(config, args),
    }
}
