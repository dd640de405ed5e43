//! The in-memory record store.
//!
//! Loaded once from a JSON array; read-only afterwards. Record identity is
//! position in the store, which is also the tie-break order for searches.

use std::{fs, path::Path, slice};

use crate::{Category, Record, StoreError, normalize::RawRecord};

/// The full, immutable collection of records.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Records in source order.
    records: Vec<Record>,
}

impl Store {
    /// Creates a store from already-normalized records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Loads and normalizes the record collection from a JSON file.
    ///
    /// The file must contain a JSON array of record objects. Historical key
    /// variants are accepted per [`crate::normalize`]; a record without a
    /// title is an error naming its array index.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = fs::read_to_string(path).map_err(|source| StoreError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents, path)
    }

    /// Parses and normalizes a store from a JSON string.
    ///
    /// The `path` parameter is used for error reporting only.
    pub fn from_json(contents: &str, path: &Path) -> Result<Self, StoreError> {
        let raw: Vec<RawRecord> =
            serde_json::from_str(contents).map_err(|source| StoreError::ParseJson {
                path: path.to_path_buf(),
                source,
            })?;

        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.normalize(index))
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(Self { records })
    }

    /// Returns all records in store order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at a store position.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterates records in store order.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Finds a record by exact title, case-insensitively.
    pub fn find_by_title(&self, title: &str) -> Option<&Record> {
        let wanted = title.to_lowercase();
        self.records
            .iter()
            .find(|record| record.title.to_lowercase() == wanted)
    }

    /// Counts records per category, returned as (risk, readiness, actual).
    pub fn category_counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for record in &self.records {
            match record.category() {
                Category::Risk => counts.0 += 1,
                Category::Readiness => counts.1 += 1,
                Category::Actual => counts.2 += 1,
            }
        }
        counts
    }
}

impl<'s> IntoIterator for &'s Store {
    type Item = &'s Record;
    type IntoIter = slice::Iter<'s, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
