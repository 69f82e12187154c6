use std::collections::HashMap;
use std::marker::PhantomData;

use crate::dataset::Dataset;
use crate::key::KeySelector;
use crate::record::Record;

/// Hash index from one key field to the record that owns it.
///
/// Built once from a [`Dataset`] and borrowed from it; nothing is cloned.
pub struct LookupIndex<'a, S: KeySelector> {
    map: HashMap<&'a S::Key, &'a Record>,
    _selector: PhantomData<fn() -> S>,
}

impl<'a, S: KeySelector> LookupIndex<'a, S> {
    pub fn build(dataset: &'a Dataset) -> Self {
        let map = dataset
            .records()
            .iter()
            .map(|record| (S::key(record), record))
            .collect();
        LookupIndex {
            map,
            _selector: PhantomData,
        }
    }

    pub fn contains(&self, key: &S::Key) -> bool {
        self.map.contains_key(key)
    }

    pub fn get(&self, key: &S::Key) -> Option<&'a Record> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{ById, ByIndex, ByText};
    use uuid::Uuid;

    #[test]
    fn maps_every_key_to_its_record() {
        let dataset = Dataset::generate_seeded(20, 3);
        let by_text = LookupIndex::<ByText>::build(&dataset);
        let by_id = LookupIndex::<ById>::build(&dataset);
        let by_index = LookupIndex::<ByIndex>::build(&dataset);

        assert_eq!(by_text.len(), 20);
        for record in dataset.records() {
            assert_eq!(by_text.get(record.text()), Some(record));
            assert_eq!(by_id.get(&record.id()), Some(record));
            assert_eq!(by_index.get(&record.index()), Some(record));
        }
    }

    #[test]
    fn absent_keys_are_not_contained() {
        let dataset = Dataset::generate_seeded(4, 9);
        assert!(!LookupIndex::<ByIndex>::build(&dataset).contains(&4));
        assert!(!LookupIndex::<ByText>::build(&dataset).contains("missing"));
        assert!(!LookupIndex::<ById>::build(&dataset).contains(&Uuid::nil()));
    }

    #[test]
    fn empty_dataset_gives_empty_index() {
        let dataset = Dataset::generate(0);
        assert!(LookupIndex::<ByText>::build(&dataset).is_empty());
    }
}
