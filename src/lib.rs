pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod http;
pub mod rate_limiter;
pub mod rating;
pub mod services;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::domain::schedule;
use crate::formatting::format_terminal_digest;
use crate::services::ingestion::IngestionService;
use crate::services::notification::NotificationService;
use crate::services::processing::ProcessingService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_fetch(date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(schedule::today);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let mut service = IngestionService::new(&config)?;
        service.run(date).await.map(|_| ())
    })
}

pub fn handle_rank(date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(schedule::today);
    let config = AppConfig::from_env();
    let service = ProcessingService::new(&config)?;
    let ranked = service.run(date)?;
    println!("{}", format_terminal_digest(&ranked, date));
    Ok(())
}

pub fn handle_run(date: Option<NaiveDate>, dry_run: bool) -> Result<()> {
    let date = date.unwrap_or_else(schedule::today);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();

        let mut ingestion = IngestionService::new(&config)?;
        ingestion.run(date).await?;

        let processing = ProcessingService::new(&config)?;
        let ranked = processing.run(date)?;

        let mut notification = NotificationService::new(&config, dry_run)?;
        notification.deliver(&ranked, date).await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
