use log::debug;
use std::collections::HashSet;

use super::models::RawMatch;
use crate::rating::{normalize, Tour};

type PairKey = (String, String, Tour);

/// Collapse matches reported by several feeds.
///
/// Two matches are the same when they have the same tour and the same two
/// normalized player names in either order. The first occurrence is kept and
/// input order is preserved.
pub fn dedup_matches(matches: Vec<RawMatch>) -> Vec<RawMatch> {
    let mut seen: HashSet<PairKey> = HashSet::new();
    let mut unique = Vec::with_capacity(matches.len());

    for raw in matches {
        if seen.insert(pair_key(&raw)) {
            unique.push(raw);
        } else {
            debug!(
                "Dropping duplicate {} match {} vs {} from {}",
                raw.tour,
                raw.player1,
                raw.player2,
                raw.source.as_str()
            );
        }
    }

    unique
}

fn pair_key(raw: &RawMatch) -> PairKey {
    let first = normalize(&raw.player1);
    let second = normalize(&raw.player2);
    if first <= second {
        (first, second, raw.tour)
    } else {
        (second, first, raw.tour)
    }
}
