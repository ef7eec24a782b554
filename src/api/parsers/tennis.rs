use anyhow::{Context, Result};
use log::warn;
use serde_json::Value;

use crate::domain::{MatchSource, RawMatch, TennisApiFixture, TennisApiResponse};
use crate::errors::parse_context;

const UNKNOWN_TOURNAMENT: &str = "Unknown";

/// Convert a tennis-data feed payload into matches.
///
/// The request is already scoped to a single day, so nothing is filtered here.
/// Fixtures are decoded one by one; a malformed fixture is logged and skipped.
pub fn parse_tennis_fixtures(data: Value) -> Result<Vec<RawMatch>> {
    let response: TennisApiResponse =
        serde_json::from_value(data).with_context(|| parse_context("tennis fixtures"))?;

    Ok(response
        .result
        .unwrap_or_default()
        .into_iter()
        .filter_map(|fixture| match serde_json::from_value::<TennisApiFixture>(fixture) {
            Ok(fixture) => Some(fixture),
            Err(e) => {
                warn!("Skipping malformed tennis fixture: {}", e);
                None
            }
        })
        .map(to_raw_match)
        .collect())
}

fn to_raw_match(fixture: TennisApiFixture) -> RawMatch {
    let tour = fixture.tour();
    RawMatch {
        player1: fixture.match_hometeam_name.unwrap_or_default(),
        player2: fixture.match_awayteam_name.unwrap_or_default(),
        tour,
        tournament: fixture
            .league_name
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_TOURNAMENT.to_string()),
        commence_time: fixture.match_date.unwrap_or_default(),
        source: MatchSource::Tennis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::Tour;
    use serde_json::json;

    #[test]
    fn test_fixtures_are_mapped() {
        let data = json!({
            "success": 1,
            "result": [
                {
                    "match_hometeam_name": "J. Sinner",
                    "match_awayteam_name": "B. Shelton",
                    "league_name": "ATP Vienna",
                    "match_date": "2026-10-19"
                },
                {
                    "match_hometeam_name": "I. Swiatek",
                    "league_name": "WTA Tokyo"
                }
            ]
        });

        let matches = parse_tennis_fixtures(data).unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].tour, Tour::Atp);
        assert_eq!(matches[0].source, MatchSource::Tennis);
        assert_eq!(matches[1].tour, Tour::Wta);
        assert_eq!(matches[1].player2, "");
    }

    #[test]
    fn test_malformed_fixture_does_not_drop_the_feed() {
        let data = json!({
            "result": [
                {
                    "match_hometeam_name": "J. Sinner",
                    "match_awayteam_name": "B. Shelton",
                    "league_name": "ATP Vienna"
                },
                {
                    "match_hometeam_name": 42,
                    "match_awayteam_name": "T. Paul"
                }
            ]
        });

        let matches = parse_tennis_fixtures(data).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].player1, "J. Sinner");
        assert_eq!(matches[0].tour, Tour::Atp);
    }

    #[test]
    fn test_missing_result_yields_no_matches() {
        let matches = parse_tennis_fixtures(json!({"success": 0})).unwrap();

        assert!(matches.is_empty());
    }
}
