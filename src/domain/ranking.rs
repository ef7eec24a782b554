use anyhow::{bail, Result};
use log::{info, warn};

use super::models::{AnnotatedMatch, RawMatch};
use crate::rating::{resolve, RatingTables, SurfaceClassifier};

/// Annotate every match with surface ratings and sort by differential, largest first.
///
/// A match that cannot be annotated is logged and skipped. The sort is stable,
/// so equal differentials keep their input order.
pub fn rank_matches(
    matches: &[RawMatch],
    tables: &RatingTables,
    classifier: &SurfaceClassifier,
) -> Vec<AnnotatedMatch> {
    let mut ranked: Vec<AnnotatedMatch> = matches
        .iter()
        .filter_map(|raw| match annotate_match(raw, tables, classifier) {
            Ok(annotated) => Some(annotated),
            Err(e) => {
                warn!("Skipping match {:?}: {}", raw, e);
                None
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.differential.total_cmp(&a.differential));

    info!("Ranked {} of {} matches", ranked.len(), matches.len());
    ranked
}

pub fn annotate_match(
    raw: &RawMatch,
    tables: &RatingTables,
    classifier: &SurfaceClassifier,
) -> Result<AnnotatedMatch> {
    if raw.player1.trim().is_empty() || raw.player2.trim().is_empty() {
        bail!("missing player name");
    }

    let surface = classifier.classify(&raw.tournament);
    let player1 = resolve(&raw.player1, raw.tour, tables);
    let player2 = resolve(&raw.player2, raw.tour, tables);

    Ok(AnnotatedMatch::new(
        raw,
        surface,
        player1.for_surface(surface),
        player2.for_surface(surface),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MatchSource;
    use crate::rating::{RatingRow, RatingTable, Surface, Tour, DEFAULT_RATING};

    fn raw(p1: &str, p2: &str, tournament: &str) -> RawMatch {
        RawMatch {
            player1: p1.to_string(),
            player2: p2.to_string(),
            tour: Tour::Atp,
            tournament: tournament.to_string(),
            commence_time: "2026-10-19T10:00:00Z".to_string(),
            source: MatchSource::Odds,
        }
    }

    fn rated(name: &str, overall: f64) -> RatingRow {
        RatingRow {
            name: Some(name.to_string()),
            overall: Some(overall),
            ..Default::default()
        }
    }

    fn tables(rows: Vec<RatingRow>) -> RatingTables {
        RatingTables::new(RatingTable::from_rows(rows), RatingTable::new())
    }

    #[test]
    fn test_end_to_end_clay_match() {
        let tables = tables(vec![
            RatingRow {
                name: Some("r nadal".to_string()),
                overall: Some(1900.0),
                hard: Some(1850.0),
                clay: Some(2000.0),
                grass: Some(1800.0),
            },
            RatingRow {
                name: Some("n djokovic".to_string()),
                overall: Some(1950.0),
                hard: Some(2000.0),
                clay: Some(1950.0),
                grass: Some(2050.0),
            },
        ]);

        let ranked = rank_matches(
            &[raw("R. Nadal", "N. Djokovic", "Roland Garros")],
            &tables,
            &SurfaceClassifier::default(),
        );

        assert_eq!(ranked.len(), 1);
        let only = &ranked[0];
        assert_eq!(only.surface, Surface::Clay);
        assert_eq!(only.player1_rating, 2000.0);
        assert_eq!(only.player2_rating, 1950.0);
        assert_eq!(only.differential, 50.0);
    }

    #[test]
    fn test_sorted_by_differential_descending() {
        let tables = tables(vec![
            rated("alpha", 1550.0),
            rated("bravo", 1700.0),
            rated("charlie", 1510.0),
        ]);
        let matches = vec![
            raw("Alpha", "Unknown One", "Vienna"),
            raw("Bravo", "Unknown Two", "Vienna"),
            raw("Charlie", "Unknown Three", "Vienna"),
        ];

        let ranked = rank_matches(&matches, &tables, &SurfaceClassifier::default());
        let diffs: Vec<f64> = ranked.iter().map(|m| m.differential).collect();

        assert_eq!(diffs, vec![200.0, 50.0, 10.0]);
    }

    #[test]
    fn test_equal_differentials_keep_input_order() {
        let tables = tables(vec![rated("alpha", 1600.0), rated("bravo", 1400.0)]);
        let matches = vec![
            raw("Alpha", "Nobody", "Basel"),
            raw("Bravo", "Nobody Else", "Basel"),
        ];

        let ranked = rank_matches(&matches, &tables, &SurfaceClassifier::default());

        assert_eq!(ranked[0].player1, "Alpha");
        assert_eq!(ranked[1].player1, "Bravo");
        assert_eq!(ranked[0].differential, ranked[1].differential);
    }

    #[test]
    fn test_missing_player_is_skipped_not_fatal() {
        let tables = tables(vec![rated("alpha", 1600.0)]);
        let matches = vec![raw("", "Alpha", "Basel"), raw("Alpha", "Somebody", "Basel")];

        let ranked = rank_matches(&matches, &tables, &SurfaceClassifier::default());

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].player2, "Somebody");
    }

    #[test]
    fn test_empty_tables_degrade_to_default_ratings() {
        let ranked = rank_matches(
            &[raw("Alpha", "Bravo", "Wimbledon")],
            &RatingTables::default(),
            &SurfaceClassifier::default(),
        );

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].surface, Surface::Grass);
        assert_eq!(ranked[0].player1_rating, DEFAULT_RATING);
        assert_eq!(ranked[0].differential, 0.0);
    }
}
