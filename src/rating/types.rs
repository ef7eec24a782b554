use serde::{Deserialize, Serialize};
use std::fmt;

pub type RatingValue = f64;

pub const DEFAULT_RATING: RatingValue = 1500.0;

/// Competition circuit; every tour has its own rating table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tour {
    #[serde(rename = "ATP")]
    Atp,
    #[serde(rename = "WTA")]
    Wta,
}

impl Tour {
    pub fn as_str(&self) -> &str {
        match self {
            Tour::Atp => "ATP",
            Tour::Wta => "WTA",
        }
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Hard,
    Clay,
    Grass,
}

impl Surface {
    pub fn as_str(&self) -> &str {
        match self {
            Surface::Hard => "hard",
            Surface::Clay => "clay",
            Surface::Grass => "grass",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Surface::Hard => "Hard",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-surface ratings of a single player. All four fields are always set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub hard: RatingValue,
    pub clay: RatingValue,
    pub grass: RatingValue,
    pub overall: RatingValue,
}

impl RatingRecord {
    /// Build a record from optional source values.
    ///
    /// Each surface falls back to `overall`, and `overall` falls back to
    /// [`DEFAULT_RATING`]. Non-finite values count as missing.
    pub fn from_optional(
        overall: Option<RatingValue>,
        hard: Option<RatingValue>,
        clay: Option<RatingValue>,
        grass: Option<RatingValue>,
    ) -> Self {
        let overall = first_finite(&[overall]).unwrap_or(DEFAULT_RATING);
        let surface = |value: Option<RatingValue>| first_finite(&[value]).unwrap_or(overall);

        Self {
            hard: surface(hard),
            clay: surface(clay),
            grass: surface(grass),
            overall,
        }
    }

    /// Rating used for a match on the given surface
    pub fn for_surface(&self, surface: Surface) -> RatingValue {
        let value = match surface {
            Surface::Hard => self.hard,
            Surface::Clay => self.clay,
            Surface::Grass => self.grass,
        };
        first_finite(&[Some(value), Some(self.overall)]).unwrap_or(DEFAULT_RATING)
    }
}

impl Default for RatingRecord {
    fn default() -> Self {
        Self {
            hard: DEFAULT_RATING,
            clay: DEFAULT_RATING,
            grass: DEFAULT_RATING,
            overall: DEFAULT_RATING,
        }
    }
}

fn first_finite(candidates: &[Option<RatingValue>]) -> Option<RatingValue> {
    candidates.iter().flatten().copied().find(|v| v.is_finite())
}

/// One parsed row of a rating file, before fallbacks are applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingRow {
    pub name: Option<String>,
    pub overall: Option<RatingValue>,
    pub hard: Option<RatingValue>,
    pub clay: Option<RatingValue>,
    pub grass: Option<RatingValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_surface_falls_back_to_overall() {
        let record = RatingRecord::from_optional(Some(1600.0), None, None, None);

        assert_eq!(record.clay, 1600.0);
        assert_eq!(record.hard, 1600.0);
        assert_eq!(record.grass, 1600.0);
        assert_eq!(record.overall, 1600.0);
    }

    #[test]
    fn test_missing_overall_falls_back_to_default() {
        let record = RatingRecord::from_optional(None, Some(1700.0), None, Some(f64::NAN));

        assert_eq!(record.hard, 1700.0);
        assert_eq!(record.clay, DEFAULT_RATING);
        assert_eq!(record.grass, DEFAULT_RATING);
        assert_eq!(record.overall, DEFAULT_RATING);
    }

    #[test]
    fn test_for_surface_uses_overall_when_value_not_finite() {
        let record = RatingRecord {
            hard: 1800.0,
            clay: f64::NAN,
            grass: 1650.0,
            overall: 1750.0,
        };

        assert_eq!(record.for_surface(Surface::Hard), 1800.0);
        assert_eq!(record.for_surface(Surface::Clay), 1750.0);
        assert_eq!(record.for_surface(Surface::Grass), 1650.0);
    }
}
