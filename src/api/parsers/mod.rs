pub mod odds;
pub mod tennis;

pub use odds::parse_odds_events;
pub use tennis::parse_tennis_fixtures;
