use crate::model::record::FileRecord;
use crate::model::types::RecordId;

/// Insertion-ordered collection of the files ingested during one session.
///
/// The registry is the single owner of its records: insertion happens only
/// through the ingestion pipeline, and records never mutate in place after
/// creation. Not persisted anywhere.
#[derive(Debug, Default)]
pub struct FileRegistry {
    records: Vec<FileRecord>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Id uniqueness is guaranteed by the allocator in
    /// the ingestion pipeline, not re-validated here.
    pub(crate) fn add(&mut self, record: FileRecord) {
        debug_assert!(
            self.find_by_id(record.id).is_none(),
            "Attempted to add a duplicate record id '{}'",
            record.id
        );
        self.records.push(record);
    }

    pub fn find_by_id(&self, id: RecordId) -> Option<&FileRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Removes the matching record. An absent id is a no-op returning
    /// `None`, not an error.
    pub fn remove(&mut self, id: RecordId) -> Option<FileRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Records in insertion order, oldest first. Callers must treat the
    /// returned records as immutable snapshots.
    pub fn list(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
