use uuid::Uuid;

/// One generated data item.
///
/// A record is built once by the dataset generator and never changes
/// afterwards, so the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    index: usize,
    text: String,
    id: Uuid,
}

impl Record {
    /// Creates a record whose string key is the hyphenated form of `id`.
    pub fn new(index: usize, id: Uuid) -> Self {
        Record {
            index,
            text: id.to_string(),
            id,
        }
    }

    /// Position of the record in its dataset.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn id_ref(&self) -> &Uuid {
        &self.id
    }

    pub fn index_ref(&self) -> &usize {
        &self.index
    }
}
