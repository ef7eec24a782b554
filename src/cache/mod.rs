use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::cache_context;

/// File-based JSON cache: verbatim feed payloads in `raw/`, pipeline output in `parsed/`
pub struct Cache {
    raw_dir: PathBuf,
    parsed_dir: PathBuf,
}

impl Cache {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref();
        let raw_dir = cache_dir.join("raw");
        let parsed_dir = cache_dir.join("parsed");

        fs::create_dir_all(&raw_dir).context("Failed to create raw cache directory")?;
        fs::create_dir_all(&parsed_dir).context("Failed to create parsed cache directory")?;

        Ok(Self {
            raw_dir,
            parsed_dir,
        })
    }

    /// Save a feed response exactly as received
    pub fn save_raw(&self, key: &str, data: &Value) -> Result<()> {
        let file_path = self.build_raw_path(key);
        self.write_json(&file_path, data)
            .with_context(|| cache_context("write raw", key))?;
        info!("Saved raw feed data to cache: {}", file_path.display());
        Ok(())
    }

    pub fn save_parsed<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = self.build_parsed_path(key);
        self.write_json(&file_path, data)
            .with_context(|| cache_context("write parsed", key))?;
        info!("Saved parsed data to cache: {}", file_path.display());
        Ok(())
    }

    pub fn load_parsed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.build_parsed_path(key);
        self.read_json_opt(&file_path)
            .with_context(|| cache_context("read parsed", key))
    }

    // --- Helper Methods ---

    fn build_raw_path(&self, key: &str) -> PathBuf {
        self.raw_dir.join(format!("{}.json", key))
    }

    fn build_parsed_path(&self, key: &str) -> PathBuf {
        self.parsed_dir.join(format!("{}.json", key))
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json).context("Failed to write cache file")?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        value: String,
    }

    #[test]
    fn test_parsed_save_and_load() {
        let temp_dir = std::env::temp_dir().join("tennis_elo_digest_test_cache_parsed");
        let cache = Cache::new(&temp_dir).unwrap();

        let data = TestData {
            value: "test".to_string(),
        };

        cache.save_parsed("test_key", &data).unwrap();
        let loaded: Option<TestData> = cache.load_parsed("test_key").unwrap();
        let missing: Option<TestData> = cache.load_parsed("missing_key").unwrap();

        assert_eq!(loaded, Some(data));
        assert_eq!(missing, None);

        fs::remove_dir_all(&temp_dir).unwrap();
    }

    #[test]
    fn test_raw_save_overwrites_previous_payload() {
        let temp_dir = std::env::temp_dir().join("tennis_elo_digest_test_cache_raw");
        let cache = Cache::new(&temp_dir).unwrap();
        let stale = serde_json::json!([{"home_team": "A", "away_team": "B"}]);
        let fresh = serde_json::json!([{"home_team": "C", "away_team": "D"}]);

        cache.save_raw("odds_atp_2026-10-19", &stale).unwrap();
        cache.save_raw("odds_atp_2026-10-19", &fresh).unwrap();

        let path = temp_dir.join("raw").join("odds_atp_2026-10-19.json");
        let stored: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(stored, fresh);

        fs::remove_dir_all(&temp_dir).unwrap();
    }
}
