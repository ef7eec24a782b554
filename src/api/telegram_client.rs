use anyhow::Result;
use log::{error, info};
use serde::Serialize;

use crate::config::settings::FeedSettings;
use crate::http::RateLimitedClient;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Delivers the digest to a Telegram chat
pub struct TelegramClient {
    client: RateLimitedClient,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(base_url: &str, bot_token: &str, chat_id: &str, settings: &FeedSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }

    pub async fn send_message(&mut self, text: &str) -> Result<()> {
        let url = self.build_send_url();
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: "Markdown",
        };

        let response = self.client.post_json(&url, &request).await?;

        if response.status().is_success() {
            info!("Digest delivered to Telegram");
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Telegram rejected the digest: {}", body);
            anyhow::bail!("Telegram returned status: {}", status)
        }
    }

    fn build_send_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.bot_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = SendMessageRequest {
            chat_id: "42",
            text: "hello",
            parse_mode: "Markdown",
        };

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body, serde_json::json!({"chat_id": "42", "text": "hello", "parse_mode": "Markdown"}));
    }
}
