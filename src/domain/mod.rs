pub mod dedup;
pub mod models;
pub mod ranking;
pub mod schedule;

pub use dedup::dedup_matches;
pub use models::*;
pub use ranking::{annotate_match, rank_matches};
