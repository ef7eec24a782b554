pub mod odds_client;
pub mod parsers;
pub mod telegram_client;
pub mod tennis_client;

pub use odds_client::OddsClient;
pub use telegram_client::TelegramClient;
pub use tennis_client::TennisClient;
