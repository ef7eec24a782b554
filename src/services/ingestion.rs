use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};

use crate::api::{OddsClient, TennisClient};
use crate::cache::Cache;
use crate::config::AppConfig;
use crate::domain::RawMatch;

/// Pulls the day's fixtures from both feeds and caches them
pub struct IngestionService {
    cache: Cache,
    odds_client: Option<OddsClient>,
    tennis_client: Option<TennisClient>,
}

impl IngestionService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let odds_client = match config.feeds.odds_api_key.as_deref() {
            Some(key) => Some(OddsClient::new(key, &config.feeds)?),
            None => {
                warn!("ODDS_API_KEY not set, skipping odds feed");
                None
            }
        };

        let tennis_client = match config.feeds.tennis_api_key.as_deref() {
            Some(key) => Some(TennisClient::new(key, &config.feeds)?),
            None => {
                warn!("TENNIS_API_KEY not set, skipping tennis feed");
                None
            }
        };

        Ok(Self {
            cache: Cache::new(&config.cache_dir)?,
            odds_client,
            tennis_client,
        })
    }

    pub async fn run(&mut self, date: NaiveDate) -> Result<Vec<RawMatch>> {
        info!("=== Fetching fixtures for {} ===", date);

        // Odds feed first: on duplicates its record is the one kept
        let mut matches = Vec::new();
        matches.extend(self.fetch_odds(date).await);
        matches.extend(self.fetch_tennis(date).await);
        info!("  → Collected {} fixtures from all feeds", matches.len());

        self.cache.save_parsed(&fixtures_key(date), &matches)?;

        info!("=== Fetch Complete ===");
        Ok(matches)
    }

    async fn fetch_odds(&mut self, date: NaiveDate) -> Vec<RawMatch> {
        match self.odds_client.as_mut() {
            Some(client) => client.fetch_matches(date, &self.cache).await,
            None => Vec::new(),
        }
    }

    async fn fetch_tennis(&mut self, date: NaiveDate) -> Vec<RawMatch> {
        match self.tennis_client.as_mut() {
            Some(client) => client.fetch_matches(date, &self.cache).await,
            None => Vec::new(),
        }
    }
}

pub fn fixtures_key(date: NaiveDate) -> String {
    format!("fixtures_{}", date.format("%Y-%m-%d"))
}
