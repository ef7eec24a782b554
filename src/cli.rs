use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Daily tennis digest ranked by rating gap")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch the day's fixtures from both feeds and store them in the cache
    Fetch {
        /// Match date (YYYY-MM-DD), defaults to today in UTC
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Rank cached fixtures by rating gap and print the digest
    Rank {
        /// Match date (YYYY-MM-DD), defaults to today in UTC
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Fetch, rank and send the digest to Telegram
    Run {
        /// Match date (YYYY-MM-DD), defaults to today in UTC
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Print the digest instead of sending it
        #[arg(long = "dry-run")]
        dry_run: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
