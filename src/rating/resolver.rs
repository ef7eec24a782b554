use log::info;

use super::table::{RatingTable, RatingTables};
use super::types::{RatingRecord, Tour};

const MIN_TOKEN_CHARS: usize = 2;
const MIN_SURNAME_CHARS: usize = 4;

/// Which step of the lookup cascade produced a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    Exact,
    Containment,
    TokenAll,
    Surname,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub record: RatingRecord,
    pub rule: MatchRule,
}

impl Resolution {
    fn matched(record: &RatingRecord, rule: MatchRule) -> Self {
        Self {
            record: *record,
            rule,
        }
    }

    fn default_record() -> Self {
        Self {
            record: RatingRecord::default(),
            rule: MatchRule::Default,
        }
    }
}

/// Canonical lookup form of a free-text player name
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .replace(['.', '\'', '\u{2019}'], "")
        .replace('-', " ")
        .trim()
        .to_string()
}

/// Rating of a player on the given tour; the default record when nothing matches
pub fn resolve(raw_name: &str, tour: Tour, tables: &RatingTables) -> RatingRecord {
    let resolution = resolve_with_rule(raw_name, tables.for_tour(tour));

    if resolution.rule == MatchRule::Default && !raw_name.trim().is_empty() {
        info!("No {} rating found for '{}', using default", tour, raw_name);
    }

    resolution.record
}

/// Run the lookup cascade against a single table.
///
/// Rules are tried from strictest to loosest; within a rule the first table
/// entry in insertion order wins.
pub fn resolve_with_rule(raw_name: &str, table: &RatingTable) -> Resolution {
    if raw_name.trim().is_empty() {
        return Resolution::default_record();
    }

    let name = normalize(raw_name);
    if name.is_empty() {
        return Resolution::default_record();
    }

    if let Some(record) = table.get(&name) {
        return Resolution::matched(record, MatchRule::Exact);
    }

    if let Some(record) = find_containment(&name, table) {
        return Resolution::matched(record, MatchRule::Containment);
    }

    let tokens = significant_tokens(&name);

    if let Some(record) = find_all_tokens(&tokens, table) {
        return Resolution::matched(record, MatchRule::TokenAll);
    }

    if let Some(record) = find_surname(&tokens, table) {
        return Resolution::matched(record, MatchRule::Surname);
    }

    Resolution::default_record()
}

fn find_containment<'a>(name: &str, table: &'a RatingTable) -> Option<&'a RatingRecord> {
    table.find(|key| key.contains(name) || name.contains(key))
}

fn significant_tokens(name: &str) -> Vec<&str> {
    name.split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}

fn find_all_tokens<'a>(tokens: &[&str], table: &'a RatingTable) -> Option<&'a RatingRecord> {
    if tokens.len() < 2 {
        return None;
    }
    table.find(|key| tokens.iter().all(|token| key.contains(token)))
}

fn find_surname<'a>(tokens: &[&str], table: &'a RatingTable) -> Option<&'a RatingRecord> {
    let surname = tokens.last()?;
    if surname.chars().count() < MIN_SURNAME_CHARS {
        return None;
    }
    // A token of the key containing the surname implies the key contains it
    table.find(|key| key.contains(surname))
}
