//! Catalog store: the fixed list of creatures loaded at startup

use pokedex_protocol::CreatureRecord;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog is already loaded")]
    DuplicateLoad,

    #[error("Catalog index {index} out of range (size {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered, load-once collection of creature records.
///
/// Indices handed out after `load` stay valid for the lifetime of the
/// catalog since the records are never mutated or reordered.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Option<Vec<CreatureRecord>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the catalog. Only one load is allowed per catalog.
    pub fn load(&mut self, records: Vec<CreatureRecord>) -> Result<(), CatalogError> {
        if self.records.is_some() {
            return Err(CatalogError::DuplicateLoad);
        }
        self.records = Some(records);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    /// Get the record at `index`
    pub fn get(&self, index: usize) -> Result<&CreatureRecord, CatalogError> {
        let records = self.records();
        records.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: records.len(),
        })
    }

    /// Number of records (0 before loading)
    pub fn size(&self) -> usize {
        self.records().len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreatureRecord> {
        self.records().iter()
    }

    /// Find a record's index by name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.records().iter().position(|r| r.name == name)
    }

    fn records(&self) -> &[CreatureRecord] {
        self.records.as_deref().unwrap_or(&[])
    }
}
