use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::warn;
use serde_json::Value;

use crate::domain::schedule::is_on_date;
use crate::domain::{MatchSource, OddsEvent, RawMatch};
use crate::errors::parse_context;
use crate::rating::Tour;

const UNKNOWN_TOURNAMENT: &str = "Unknown";

/// Convert an odds feed payload into matches starting on `date`.
///
/// Events are decoded one by one; a malformed event is logged and skipped.
pub fn parse_odds_events(data: Value, tour: Tour, date: NaiveDate) -> Result<Vec<RawMatch>> {
    let events: Vec<Value> =
        serde_json::from_value(data).with_context(|| parse_context("odds events"))?;

    Ok(events
        .into_iter()
        .filter_map(|event| match serde_json::from_value::<OddsEvent>(event) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Skipping malformed odds event: {}", e);
                None
            }
        })
        .filter(|event| is_on_date(&event.commence_time, date))
        .map(|event| to_raw_match(event, tour))
        .collect())
}

fn to_raw_match(event: OddsEvent, tour: Tour) -> RawMatch {
    RawMatch {
        player1: event.home_team,
        player2: event.away_team,
        tour,
        tournament: event
            .sport_title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_TOURNAMENT.to_string()),
        commence_time: event.commence_time,
        source: MatchSource::Odds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_events_on_date_are_kept() {
        let data = json!([
            {
                "id": "e1",
                "home_team": "Jannik Sinner",
                "away_team": "Ben Shelton",
                "sport_title": "ATP Vienna Open",
                "commence_time": "2026-10-19T13:00:00Z"
            },
            {
                "home_team": "Taylor Fritz",
                "away_team": "Tommy Paul",
                "commence_time": "2026-10-20T13:00:00Z"
            },
            {
                "home_team": "Casper Ruud",
                "away_team": "Alex de Minaur",
                "commence_time": "2026-10-19T18:00:00Z"
            }
        ]);
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let matches = parse_odds_events(data, Tour::Atp, date).unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].player1, "Jannik Sinner");
        assert_eq!(matches[0].tournament, "ATP Vienna Open");
        assert_eq!(matches[0].source, MatchSource::Odds);
        assert_eq!(matches[1].tournament, "Unknown");
        assert_eq!(matches[1].tour, Tour::Atp);
    }

    #[test]
    fn test_malformed_event_does_not_drop_the_feed() {
        let data = json!([
            {
                "home_team": "Jannik Sinner",
                "away_team": "Ben Shelton",
                "sport_title": "ATP Vienna Open",
                "commence_time": "2026-10-19T13:00:00Z"
            },
            {
                "home_team": null,
                "away_team": "Tommy Paul",
                "commence_time": "2026-10-19T15:00:00Z"
            },
            "not an event"
        ]);
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let matches = parse_odds_events(data, Tour::Atp, date).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].player1, "Jannik Sinner");
        assert_eq!(matches[0].player2, "Ben Shelton");
    }

    #[test]
    fn test_non_array_payload_is_an_error() {
        let data = json!({"message": "Invalid API key"});
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        assert!(parse_odds_events(data, Tour::Wta, date).is_err());
    }
}
