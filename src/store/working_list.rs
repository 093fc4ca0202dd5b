use crate::domain::{filter, StatusFilter};
use crate::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added,
    Updated,
}

/// Session-local copy of an entity collection.
///
/// Ids are expected to be unique but this is not checked; lookups, saves and
/// deletes all act on the first match.
#[derive(Debug, Clone)]
pub struct WorkingList<T> {
    records: Vec<T>,
}

impl<T: Record> WorkingList<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn filtered(&self, mode: StatusFilter) -> Vec<&T> {
        filter(&self.records, mode)
    }

    /// Commit a draft: replace the entry with the same id in place, or append.
    pub fn save(&mut self, draft: T) -> SaveOutcome {
        match self.records.iter().position(|r| r.id() == draft.id()) {
            Some(pos) => {
                self.records[pos] = draft;
                SaveOutcome::Updated
            }
            None => {
                self.records.push(draft);
                SaveOutcome::Added
            }
        }
    }

    /// Remove the entry with `id`, returning it. Absent ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Option<T> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(pos))
    }
}
