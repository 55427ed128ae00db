//! CLI entry for fix-tests, defining clap subcommands and dispatching each command handler.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{command, internal::patch::PatchResult};

/// Environment variable holding a `tracing` filter directive, e.g. `debug`.
pub const LOG_ENV: &str = "FIX_TESTS_LOG";

// The Cli struct represents the root of the command line interface.
#[derive(Parser, Debug)]
#[command(
    name = "fix-tests",
    about = "Patch DocumentServicePropertyTest to inject the SystemLogService mock",
    version
)]
struct Cli {
    /// Log rule matching and file I/O at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Runs `apply` with default arguments when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Rewrite the target file in place")]
    Apply(command::apply::ApplyArgs),
    #[command(about = "Report how often each rule matches, without writing")]
    Check(command::check::CheckArgs),
    #[command(about = "List the active rules in application order")]
    Rules(command::rules::RulesArgs),
}

/// Parses the command line and runs the selected command.
/// - `args`: parse from command line if it's `None`, otherwise parse from the given args
///
/// Logging is only installed for the real command line, so tests can call this repeatedly.
pub fn parse(args: Option<&[&str]>) -> PatchResult<()> {
    let cli = match args {
        Some(args) => Cli::try_parse_from(args)
            .map_err(|e| crate::internal::patch::PatchError::InvalidArgument(e.to_string()))?,
        None => {
            let cli = Cli::parse();
            init_tracing(cli.verbose);
            cli
        }
    };

    match cli.command {
        None => command::apply::execute(Default::default()),
        Some(Commands::Apply(args)) => command::apply::execute(args),
        Some(Commands::Check(args)) => command::check::execute(args).map(|_| ()),
        Some(Commands::Rules(args)) => command::rules::execute(args),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// this test is to verify that the CLI can be built without panicking
/// according [clap dock](https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_4/index.html)
#[test]
fn verify_cli() {
    use clap::CommandFactory;

    Cli::command().debug_assert()
}
