use anyhow::Result;
use chrono::NaiveDate;
use log::info;

use super::ingestion::fixtures_key;
use crate::cache::Cache;
use crate::config::AppConfig;
use crate::domain::{self, AnnotatedMatch, RawMatch};
use crate::rating::{self, RatingTables, SurfaceClassifier};

/// Runs the rating pipeline over cached fixtures
pub struct ProcessingService {
    cache: Cache,
    tables: RatingTables,
    classifier: SurfaceClassifier,
}

impl ProcessingService {
    /// Loads both rating tables once; they stay read-only afterwards
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            cache: Cache::new(&config.cache_dir)?,
            tables: rating::load_tables(&config.ratings),
            classifier: SurfaceClassifier::new(config.surfaces.clone()),
        })
    }

    pub fn run(&self, date: NaiveDate) -> Result<Vec<AnnotatedMatch>> {
        info!("=== Ranking fixtures for {} ===", date);

        let fixtures = self.load_fixtures(date)?;
        info!("  → Loaded {} fixtures from cache", fixtures.len());

        let ranked = self.rank(fixtures);

        self.cache.save_parsed(&ranked_key(date), &ranked)?;

        info!("=== Ranking Complete ===");
        Ok(ranked)
    }

    /// Deduplicate, then annotate and sort
    pub fn rank(&self, fixtures: Vec<RawMatch>) -> Vec<AnnotatedMatch> {
        let unique = domain::dedup_matches(fixtures);
        info!("  → Found {} unique matches", unique.len());

        domain::rank_matches(&unique, &self.tables, &self.classifier)
    }

    fn load_fixtures(&self, date: NaiveDate) -> Result<Vec<RawMatch>> {
        self.cache
            .load_parsed(&fixtures_key(date))?
            .ok_or_else(|| anyhow::anyhow!("No fixtures cached for {}; run `fetch` first", date))
    }
}

fn ranked_key(date: NaiveDate) -> String {
    format!("ranked_{}", date.format("%Y-%m-%d"))
}
