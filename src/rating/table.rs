use log::debug;
use std::collections::HashMap;

use super::types::{RatingRecord, RatingRow, Tour};

/// Ratings of one tour keyed by lowercase player name.
///
/// Iteration follows the order in which keys were first inserted, which makes
/// the fuzzy lookups in the resolver deterministic.
#[derive(Debug, Clone, Default)]
pub struct RatingTable {
    entries: Vec<(String, RatingRecord)>,
    index: HashMap<String, usize>,
}

impl RatingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from parsed rows, skipping rows without a name
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RatingRow>,
    {
        let mut table = Self::new();
        let mut skipped = 0;

        for row in rows {
            let Some(key) = row.name.as_deref().map(build_key).filter(|k| !k.is_empty()) else {
                skipped += 1;
                continue;
            };

            let record = RatingRecord::from_optional(row.overall, row.hard, row.clay, row.grass);
            table.insert(key, record);
        }

        if skipped > 0 {
            debug!("Skipped {} rating rows without a player name", skipped);
        }

        table
    }

    /// Insert or overwrite; an overwritten key keeps its original position
    pub fn insert(&mut self, key: String, record: RatingRecord) {
        match self.index.get(&key) {
            Some(&idx) => self.entries[idx].1 = record,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, record));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&RatingRecord> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RatingRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    /// First entry, in insertion order, whose key satisfies the predicate
    pub fn find<P>(&self, mut predicate: P) -> Option<&RatingRecord>
    where
        P: FnMut(&str) -> bool,
    {
        self.iter().find(|&(key, _)| predicate(key)).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Table keys are only lowercased and trimmed
fn build_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// One rating table per tour
#[derive(Debug, Clone, Default)]
pub struct RatingTables {
    pub atp: RatingTable,
    pub wta: RatingTable,
}

impl RatingTables {
    pub fn new(atp: RatingTable, wta: RatingTable) -> Self {
        Self { atp, wta }
    }

    pub fn for_tour(&self, tour: Tour) -> &RatingTable {
        match tour {
            Tour::Atp => &self.atp,
            Tour::Wta => &self.wta,
        }
    }
}
