use anyhow::{Context, Result};
use log::{error, info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::table::{RatingTable, RatingTables};
use super::types::{RatingRow, RatingValue};
use crate::config::settings::RatingFileSettings;
use crate::errors::parse_context;

/// Raw CSV row; numeric columns are kept as text so bad values fall back instead of failing
#[derive(Debug, Deserialize)]
struct RawRatingRow {
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    elo_overall: Option<String>,
    #[serde(default)]
    elo_hard: Option<String>,
    #[serde(default)]
    elo_clay: Option<String>,
    #[serde(default)]
    elo_grass: Option<String>,
}

impl RawRatingRow {
    fn into_rating_row(self) -> RatingRow {
        RatingRow {
            name: self.player_name,
            overall: parse_rating(self.elo_overall.as_deref()),
            hard: parse_rating(self.elo_hard.as_deref()),
            clay: parse_rating(self.elo_clay.as_deref()),
            grass: parse_rating(self.elo_grass.as_deref()),
        }
    }
}

fn parse_rating(value: Option<&str>) -> Option<RatingValue> {
    value
        .map(str::trim)
        .and_then(|v| v.parse::<RatingValue>().ok())
        .filter(|v| v.is_finite())
}

/// Parse rating rows from CSV, skipping rows that cannot be read
pub fn read_rating_rows<R: Read>(rdr: R) -> Result<Vec<RatingRow>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let mut rows = Vec::new();

    for result in reader.deserialize::<RawRatingRow>() {
        match result {
            Ok(raw) => rows.push(raw.into_rating_row()),
            Err(e) => warn!("Skipping malformed rating row: {}", e),
        }
    }

    Ok(rows)
}

pub fn load_rating_rows(path: &Path) -> Result<Vec<RatingRow>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open rating file {}", path.display()))?;
    read_rating_rows(file).with_context(|| parse_context("rating file"))
}

/// Load a tour table; an unreadable file yields an empty table
pub fn load_table(path: &Path) -> RatingTable {
    match load_rating_rows(path) {
        Ok(rows) => RatingTable::from_rows(rows),
        Err(e) => {
            error!("Failed to load ratings from {}: {:?}", path.display(), e);
            RatingTable::new()
        }
    }
}

pub fn load_tables(settings: &RatingFileSettings) -> RatingTables {
    let tables = RatingTables::new(load_table(&settings.atp_path), load_table(&settings.wta_path));
    info!(
        "Loaded {} ATP and {} WTA player ratings",
        tables.atp.len(),
        tables.wta.len()
    );
    tables
}
