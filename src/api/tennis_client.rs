use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{error, info, warn};
use serde_json::Value;

use crate::api::parsers;
use crate::cache::Cache;
use crate::config::settings::FeedSettings;
use crate::domain::RawMatch;
use crate::errors::{parse_context, redact_secrets};
use crate::http::RateLimitedClient;

/// Client for the tennis-data feed; a single date-scoped request covers both tours
pub struct TennisClient {
    client: RateLimitedClient,
    api_key: String,
    base_url: String,
}

impl TennisClient {
    pub fn new(api_key: &str, settings: &FeedSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: settings.tennis_base_url.to_string(),
        })
    }

    /// Fetch the day's fixtures; a failed request yields no matches
    pub async fn fetch_matches(&mut self, date: NaiveDate, cache: &Cache) -> Vec<RawMatch> {
        match self.fetch_and_cache(date, cache).await {
            Ok(matches) => {
                info!("  → Tennis feed: {} matches", matches.len());
                matches
            }
            Err(e) => {
                error!("Tennis feed failed: {:?}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_and_cache(&mut self, date: NaiveDate, cache: &Cache) -> Result<Vec<RawMatch>> {
        let data = self.fetch_raw(date).await?;

        let key = Self::build_cache_key(date);
        if let Err(e) = cache.save_raw(&key, &data) {
            warn!("Failed to save tennis payload {} to cache: {:?}", key, e);
        }

        parsers::parse_tennis_fixtures(data)
    }

    async fn fetch_raw(&mut self, date: NaiveDate) -> Result<Value> {
        let url = self.build_fixtures_url(date);
        info!("Fetching fixtures from {}", redact_secrets(&url));

        let response = self.client.get(&url).await?;
        if !response.status().is_success() {
            anyhow::bail!("Tennis feed returned status: {}", response.status());
        }

        let text = response.text().await?;
        serde_json::from_str(&text).with_context(|| parse_context("tennis feed JSON"))
    }

    // --- Helper Methods ---

    fn build_fixtures_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/tennis/?met=Matchs&APIkey={}&date={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            date.format("%Y-%m-%d")
        )
    }

    fn build_cache_key(date: NaiveDate) -> String {
        format!("tennis_{}", date.format("%Y-%m-%d"))
    }
}
