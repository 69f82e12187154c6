//! Dataset generation.
//!
//! A dataset is an ordered `Vec<Record>` with sequence indices `0..size` and
//! a random version 4 identifier per record. Identifiers are checked for
//! uniqueness while generating, so lookups keyed on any field never alias.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use uuid::{Builder, Uuid};

use crate::key::KeySelector;
use crate::record::Record;

/// Ordered, fixed-size sequence of records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Generate `size` records with identifiers drawn from the thread RNG.
    pub fn generate(size: usize) -> Self {
        Self::generate_with(size, &mut rand::thread_rng())
    }

    /// Generate `size` records from a fixed seed. Equal seeds give equal
    /// datasets.
    pub fn generate_seeded(size: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate_with(size, &mut rng)
    }

    pub fn generate_with<R: RngCore + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut seen: HashSet<Uuid> = HashSet::with_capacity(size);
        let mut records = Vec::with_capacity(size);

        for index in 0..size {
            let id = loop {
                let id = random_uuid(rng);
                if seen.insert(id) {
                    break id;
                }
                log::warn!("Identifier collision at record {index} ({id}), redrawing");
            };
            records.push(Record::new(index, id));
        }

        log::trace!("Generated dataset of {size} records");
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record's key for the selected domain, in dataset order.
    pub fn keys<S: KeySelector>(&self) -> Vec<&S::Key> {
        self.records.iter().map(S::key).collect()
    }
}

fn random_uuid<R: RngCore + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}
