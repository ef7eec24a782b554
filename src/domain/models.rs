use serde::{Deserialize, Serialize};

use crate::rating::{RatingValue, Surface, Tour};

/// Fixture feed a match was reported by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Odds,
    Tennis,
}

impl MatchSource {
    pub fn as_str(&self) -> &str {
        match self {
            MatchSource::Odds => "odds",
            MatchSource::Tennis => "tennis",
        }
    }
}

/// Upcoming match as reported by a feed; player names are unresolved free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMatch {
    pub player1: String,
    pub player2: String,
    pub tour: Tour,
    pub tournament: String,
    pub commence_time: String,
    pub source: MatchSource,
}

/// Presentation bucket for a rating differential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferentialTier {
    High,       // > 200
    MediumHigh, // > 100
    Medium,     // > 50
    Low,
}

impl DifferentialTier {
    pub fn from_differential(differential: RatingValue) -> Self {
        if differential > 200.0 {
            DifferentialTier::High
        } else if differential > 100.0 {
            DifferentialTier::MediumHigh
        } else if differential > 50.0 {
            DifferentialTier::Medium
        } else {
            DifferentialTier::Low
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DifferentialTier::High => "high",
            DifferentialTier::MediumHigh => "medium-high",
            DifferentialTier::Medium => "medium",
            DifferentialTier::Low => "low",
        }
    }
}

/// A match with both players' surface ratings resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedMatch {
    pub player1: String,
    pub player1_rating: RatingValue,
    pub player2: String,
    pub player2_rating: RatingValue,
    pub surface: Surface,
    pub tour: Tour,
    pub tournament: String,
    pub commence_time: String,
    pub source: MatchSource,
    pub differential: RatingValue,
}

impl AnnotatedMatch {
    pub fn new(
        raw: &RawMatch,
        surface: Surface,
        player1_rating: RatingValue,
        player2_rating: RatingValue,
    ) -> Self {
        Self {
            player1: raw.player1.clone(),
            player1_rating,
            player2: raw.player2.clone(),
            player2_rating,
            surface,
            tour: raw.tour,
            tournament: raw.tournament.clone(),
            commence_time: raw.commence_time.clone(),
            source: raw.source,
            differential: (player1_rating - player2_rating).abs(),
        }
    }

    pub fn tier(&self) -> DifferentialTier {
        DifferentialTier::from_differential(self.differential)
    }

    /// (name, rating) of the stronger player first; player2 leads on equal ratings
    pub fn favourite_first(&self) -> ((&str, RatingValue), (&str, RatingValue)) {
        let first = (self.player1.as_str(), self.player1_rating);
        let second = (self.player2.as_str(), self.player2_rating);
        if self.player1_rating > self.player2_rating {
            (first, second)
        } else {
            (second, first)
        }
    }
}

// --- Feed Response Structures ---

/// Event from the odds feed
#[derive(Debug, Deserialize, Serialize)]
pub struct OddsEvent {
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    #[serde(default)]
    pub sport_title: Option<String>,
    #[serde(default)]
    pub commence_time: String,
}

/// Response envelope of the tennis-data feed; fixtures are decoded separately
#[derive(Debug, Deserialize, Serialize)]
pub struct TennisApiResponse {
    #[serde(default)]
    pub result: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TennisApiFixture {
    #[serde(default)]
    pub match_hometeam_name: Option<String>,
    #[serde(default)]
    pub match_awayteam_name: Option<String>,
    #[serde(default)]
    pub league_name: Option<String>,
    #[serde(default)]
    pub match_date: Option<String>,
}

impl TennisApiFixture {
    pub fn tour(&self) -> Tour {
        let league = self.league_name.as_deref().unwrap_or("");
        if league.to_uppercase().contains("ATP") {
            Tour::Atp
        } else {
            Tour::Wta
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(p1: &str, p2: &str) -> RawMatch {
        RawMatch {
            player1: p1.to_string(),
            player2: p2.to_string(),
            tour: Tour::Atp,
            tournament: "Vienna".to_string(),
            commence_time: "2026-10-19T12:00:00Z".to_string(),
            source: MatchSource::Odds,
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(DifferentialTier::from_differential(250.0), DifferentialTier::High);
        assert_eq!(DifferentialTier::from_differential(200.0), DifferentialTier::MediumHigh);
        assert_eq!(DifferentialTier::from_differential(100.5), DifferentialTier::MediumHigh);
        assert_eq!(DifferentialTier::from_differential(100.0), DifferentialTier::Medium);
        assert_eq!(DifferentialTier::from_differential(50.0), DifferentialTier::Low);
        assert_eq!(DifferentialTier::from_differential(0.0), DifferentialTier::Low);
    }

    #[test]
    fn test_annotated_differential_is_absolute() {
        let annotated = AnnotatedMatch::new(&raw("A", "B"), Surface::Hard, 1500.0, 1720.0);

        assert_eq!(annotated.differential, 220.0);
        assert_eq!(annotated.tier(), DifferentialTier::High);
        assert_eq!(annotated.favourite_first().0, ("B", 1720.0));
    }

    #[test]
    fn test_tennis_fixture_tour() {
        let fixture: TennisApiFixture =
            serde_json::from_str(r#"{"league_name": "Atp Vienna"}"#).unwrap();
        assert_eq!(fixture.tour(), Tour::Atp);

        let fixture: TennisApiFixture = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(fixture.tour(), Tour::Wta);
    }
}
