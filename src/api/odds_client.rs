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
use crate::rating::Tour;

/// Client for the odds feed; one request per tour
pub struct OddsClient {
    client: RateLimitedClient,
    api_key: String,
    base_url: String,
    sports: Vec<(&'static str, Tour)>,
}

impl OddsClient {
    pub fn new(api_key: &str, settings: &FeedSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: settings.odds_base_url.to_string(),
            sports: settings.odds_sports.clone(),
        })
    }

    /// Fetch matches for every configured tour; a failing tour contributes nothing
    pub async fn fetch_matches(&mut self, date: NaiveDate, cache: &Cache) -> Vec<RawMatch> {
        let mut matches = Vec::new();

        for (sport, tour) in self.sports.clone() {
            match self.fetch_sport(sport, tour, date, cache).await {
                Ok(mut sport_matches) => {
                    info!("  → Odds feed: {} {} matches", sport_matches.len(), tour);
                    matches.append(&mut sport_matches);
                }
                Err(e) => error!("Odds feed failed for {}: {:?}", sport, e),
            }
        }

        matches
    }

    async fn fetch_sport(
        &mut self,
        sport: &str,
        tour: Tour,
        date: NaiveDate,
        cache: &Cache,
    ) -> Result<Vec<RawMatch>> {
        let data = self.fetch_raw(sport).await?;

        let key = Self::build_cache_key(sport, date);
        if let Err(e) = cache.save_raw(&key, &data) {
            warn!("Failed to save odds payload {} to cache: {:?}", key, e);
        }

        parsers::parse_odds_events(data, tour, date)
    }

    async fn fetch_raw(&mut self, sport: &str) -> Result<Value> {
        let url = self.build_odds_url(sport);
        info!("Fetching odds events from {}", redact_secrets(&url));

        let response = self.client.get(&url).await?;
        if !response.status().is_success() {
            anyhow::bail!("Odds feed returned status: {}", response.status());
        }

        let text = response.text().await?;
        serde_json::from_str(&text).with_context(|| parse_context("odds feed JSON"))
    }

    // --- Helper Methods ---

    fn build_odds_url(&self, sport: &str) -> String {
        format!(
            "{}/v4/sports/{}/odds/?apiKey={}&regions=us&markets=h2h",
            self.base_url,
            sport,
            urlencoding::encode(&self.api_key)
        )
    }

    fn build_cache_key(sport: &str, date: NaiveDate) -> String {
        format!("odds_{}_{}", sport, date.format("%Y-%m-%d"))
    }
}
