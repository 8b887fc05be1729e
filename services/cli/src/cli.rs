use crate::browse::{list_bands, run_browse, run_suggest, BrowseArgs, SuggestArgs};
use crate::screen::{run_screen, ScreenArgs};
use clap::{Parser, Subcommand};
use entry_board::config::AppConfig;
use entry_board::error::AppError;
use entry_board::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Entry Board",
    about = "Screen job listings for experience requirements and browse an entry-level catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a term, a passage, or a full posting draft against the banned-term policy
    Screen(ScreenArgs),
    /// Filter a catalog export the way the browse screen does
    Browse(BrowseArgs),
    /// Print search-box suggestions for a query
    Suggest(SuggestArgs),
    /// List the salary bands accepted by `browse --salary`
    Bands,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "configuration loaded");

    match cli.command {
        Command::Screen(args) => run_screen(args, &config),
        Command::Browse(args) => run_browse(args),
        Command::Suggest(args) => run_suggest(args),
        Command::Bands => {
            list_bands();
            Ok(())
        }
    }
}
