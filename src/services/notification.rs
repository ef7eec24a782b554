use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};

use crate::api::TelegramClient;
use crate::config::AppConfig;
use crate::domain::AnnotatedMatch;
use crate::formatting::{format_chat_digest, format_terminal_digest};

/// Sends the ranked digest to the chat, or prints it when delivery is off
pub struct NotificationService {
    telegram: Option<TelegramClient>,
}

impl NotificationService {
    pub fn new(config: &AppConfig, dry_run: bool) -> Result<Self> {
        let telegram = match (dry_run, config.telegram.credentials()) {
            (true, _) => None,
            (false, Some((token, chat_id))) => Some(TelegramClient::new(
                config.telegram.base_url,
                token,
                chat_id,
                &config.feeds,
            )?),
            (false, None) => {
                warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set, printing digest instead");
                None
            }
        };

        Ok(Self { telegram })
    }

    pub async fn deliver(&mut self, matches: &[AnnotatedMatch], date: NaiveDate) -> Result<()> {
        match self.telegram.as_mut() {
            Some(client) => {
                info!("Sending digest with {} matches", matches.len());
                client.send_message(&format_chat_digest(matches, date)).await
            }
            None => {
                println!("{}", format_terminal_digest(matches, date));
                Ok(())
            }
        }
    }
}
