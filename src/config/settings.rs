use std::env;
use std::path::PathBuf;

use super::surfaces::{parse_keyword_list, SurfaceKeywords};
use crate::rating::Tour;

pub struct RatingFileSettings {
    pub atp_path: PathBuf,
    pub wta_path: PathBuf,
}

impl Default for RatingFileSettings {
    fn default() -> Self {
        Self {
            atp_path: PathBuf::from("atp_elo.csv"),
            wta_path: PathBuf::from("wta_elo.csv"),
        }
    }
}

pub struct FeedSettings {
    pub odds_api_key: Option<String>,
    pub tennis_api_key: Option<String>,
    pub odds_base_url: &'static str,
    pub tennis_base_url: &'static str,
    pub odds_sports: Vec<(&'static str, Tour)>,
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            odds_api_key: None,
            tennis_api_key: None,
            odds_base_url: "https://api.the-odds-api.com",
            tennis_base_url: "https://api.api-tennis.com",
            odds_sports: vec![("tennis_atp", Tour::Atp), ("tennis_wta", Tour::Wta)],
            rate_limit_ms: 250,
            user_agent: "TennisEloDigest/1.0",
            timeout_secs: 10,
        }
    }
}

pub struct TelegramSettings {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub base_url: &'static str,
}

impl TelegramSettings {
    /// Token and chat id, when both are configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.bot_token.as_deref(), self.chat_id.as_deref()) {
            (Some(token), Some(chat)) => Some((token, chat)),
            _ => None,
        }
    }
}

impl Default for TelegramSettings {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            base_url: "https://api.telegram.org",
        }
    }
}

pub struct AppConfig {
    pub ratings: RatingFileSettings,
    pub feeds: FeedSettings,
    pub telegram: TelegramSettings,
    pub surfaces: SurfaceKeywords,
    pub cache_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ratings: RatingFileSettings::default(),
            feeds: FeedSettings::default(),
            telegram: TelegramSettings::default(),
            surfaces: SurfaceKeywords::default(),
            cache_dir: PathBuf::from("cache"),
        }
    }

    /// Defaults overridden by environment variables (and `.env`, if present)
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::new();

        if let Some(path) = var("ATP_ELO_FILE") {
            config.ratings.atp_path = PathBuf::from(path);
        }
        if let Some(path) = var("WTA_ELO_FILE") {
            config.ratings.wta_path = PathBuf::from(path);
        }
        if let Some(dir) = var("CACHE_DIR") {
            config.cache_dir = PathBuf::from(dir);
        }

        config.feeds.odds_api_key = var("ODDS_API_KEY");
        config.feeds.tennis_api_key = var("TENNIS_API_KEY");
        config.telegram.bot_token = var("TELEGRAM_BOT_TOKEN");
        config.telegram.chat_id = var("TELEGRAM_CHAT_ID");

        if let Some(list) = var("CLAY_KEYWORDS") {
            config.surfaces.extend_clay(parse_keyword_list(&list));
        }
        if let Some(list) = var("GRASS_KEYWORDS") {
            config.surfaces.extend_grass(parse_keyword_list(&list));
        }

        config
    }
}
