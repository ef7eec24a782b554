use anyhow::Result;

use tennis_elo_digest::cli::Command;
use tennis_elo_digest::{handle_completions, handle_fetch, handle_rank, handle_run, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Fetch { date } => handle_fetch(*date),
        Command::Rank { date } => handle_rank(*date),
        Command::Run { date, dry_run } => handle_run(*date, *dry_run),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
