//! The four search strategies.
//!
//! Every strategy answers the same question (is `key` present?) and returns a
//! plain `bool`. Turning a miss into an error is left to the caller so the
//! timed loop never builds error values.

use lookup_core::{Dataset, KeySelector, LookupIndex, Record};

use crate::error::LookupError;

/// A search strategy, listed in report order by [`Strategy::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `Iterator::any` over the slice.
    Declarative,
    /// `for record in records`.
    ForEach,
    /// `for i in 0..records.len()`.
    Indexed,
    /// `HashMap::contains_key` on the lookup index.
    HashLookup,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Declarative,
        Strategy::ForEach,
        Strategy::Indexed,
        Strategy::HashLookup,
    ];

    /// Label printed in the report.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Declarative => "Vec (any)",
            Strategy::ForEach => "Vec (for in)",
            Strategy::Indexed => "Vec (for index)",
            Strategy::HashLookup => "HashMap",
        }
    }
}

pub fn scan_any<S: KeySelector>(records: &[Record], key: &S::Key) -> bool {
    records.iter().any(|record| S::key(record) == key)
}

pub fn scan_for<S: KeySelector>(records: &[Record], key: &S::Key) -> bool {
    for record in records {
        if S::key(record) == key {
            return true;
        }
    }
    false
}

#[allow(clippy::needless_range_loop)]
pub fn scan_indexed<S: KeySelector>(records: &[Record], key: &S::Key) -> bool {
    for i in 0..records.len() {
        if S::key(&records[i]) == key {
            return true;
        }
    }
    false
}

pub fn hash_lookup<S: KeySelector>(index: &LookupIndex<'_, S>, key: &S::Key) -> bool {
    index.contains(key)
}

/// Both lookup structures for one dataset: the ordered slice used by the
/// scans and the hash index used by [`Strategy::HashLookup`].
pub struct Lookup<'a, S: KeySelector> {
    records: &'a [Record],
    index: LookupIndex<'a, S>,
}

impl<'a, S: KeySelector> Lookup<'a, S> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Lookup {
            records: dataset.records(),
            index: LookupIndex::build(dataset),
        }
    }

    pub fn records(&self) -> &'a [Record] {
        self.records
    }

    pub fn index(&self) -> &LookupIndex<'a, S> {
        &self.index
    }

    pub fn contains(&self, strategy: Strategy, key: &S::Key) -> bool {
        match strategy {
            Strategy::Declarative => scan_any::<S>(self.records, key),
            Strategy::ForEach => scan_for::<S>(self.records, key),
            Strategy::Indexed => scan_indexed::<S>(self.records, key),
            Strategy::HashLookup => hash_lookup(&self.index, key),
        }
    }

    /// Succeeds when `strategy` finds `key`, otherwise returns
    /// [`LookupError::KeyNotFound`].
    pub fn find(&self, strategy: Strategy, key: &S::Key) -> Result<(), LookupError> {
        if self.contains(strategy, key) {
            Ok(())
        } else {
            Err(LookupError::KeyNotFound {
                strategy: strategy.name(),
                key: format!("{key:?}"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookup_core::{ById, ByIndex, ByText};

    #[test]
    fn names_are_unique_and_colon_free() {
        let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!name.contains(':'), "{name} would break the report format");
            assert!(!names[i + 1..].contains(name));
        }
    }

    #[test]
    fn scans_stop_at_first_match() {
        let dataset = Dataset::generate_seeded(8, 11);
        let records = dataset.records();
        assert!(scan_any::<ByIndex>(records, &0));
        assert!(scan_for::<ByIndex>(records, &7));
        assert!(scan_indexed::<ByIndex>(records, &3));
        assert!(!scan_indexed::<ByIndex>(records, &8));
    }

    #[test]
    fn string_keys_compare_by_value() {
        let dataset = Dataset::generate_seeded(3, 5);
        let owned = dataset.records()[2].text().to_owned();
        assert!(scan_any::<ByText>(dataset.records(), owned.as_str()));
        assert!(scan_for::<ByText>(dataset.records(), &owned[..]));
    }

    #[test]
    fn find_reports_strategy_and_key() {
        let dataset = Dataset::generate_seeded(2, 5);
        let lookup = Lookup::<ById>::new(&dataset);
        let err = lookup
            .find(Strategy::HashLookup, &uuid::Uuid::nil())
            .unwrap_err();
        assert_eq!(
            err,
            LookupError::KeyNotFound {
                strategy: "HashMap",
                key: format!("{:?}", uuid::Uuid::nil()),
            }
        );
    }
}
