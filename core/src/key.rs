//! Key domains a record can be looked up by.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use anyhow::anyhow;
use uuid::Uuid;

use crate::record::Record;

/// The record field a benchmark run searches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// The sequence index.
    Int,
    /// The textual form of the identifier.
    String,
    /// The 128-bit identifier itself.
    Uuid,
}

impl KeyType {
    pub const ALL: [KeyType; 3] = [KeyType::Int, KeyType::String, KeyType::Uuid];

    pub fn name(self) -> &'static str {
        match self {
            KeyType::Int => "int",
            KeyType::String => "string",
            KeyType::Uuid => "uuid",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(KeyType::Int),
            "string" | "str" => Ok(KeyType::String),
            "uuid" | "guid" => Ok(KeyType::Uuid),
            other => Err(anyhow!(
                "unknown key type `{other}` (expected int, string or uuid)"
            )),
        }
    }
}

/// Projects a [`Record`] onto the key of one domain.
///
/// Keys may be unsized so the string domain borrows `str` straight out of
/// the record instead of cloning it for every lookup.
pub trait KeySelector {
    type Key: Eq + Hash + fmt::Debug + ?Sized;

    const KEY_TYPE: KeyType;

    fn key(record: &Record) -> &Self::Key;
}

/// Selects [`Record::index`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ByIndex;

/// Selects [`Record::text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ByText;

/// Selects [`Record::id`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ById;

impl KeySelector for ByIndex {
    type Key = usize;

    const KEY_TYPE: KeyType = KeyType::Int;

    fn key(record: &Record) -> &usize {
        record.index_ref()
    }
}

impl KeySelector for ByText {
    type Key = str;

    const KEY_TYPE: KeyType = KeyType::String;

    fn key(record: &Record) -> &str {
        record.text()
    }
}

impl KeySelector for ById {
    type Key = Uuid;

    const KEY_TYPE: KeyType = KeyType::Uuid;

    fn key(record: &Record) -> &Uuid {
        record.id_ref()
    }
}
