//! Absence collection with write-through persistence.
//!
//! # Responsibility
//! - Own the ordered absence collection and its id issuance.
//! - Enforce the one-absence-per-student-per-date integrity rule.
//! - Persist the full collection under the `absences` key on every change.
//!
//! # Invariants
//! - (student_id, date) pairs are unique across the collection.
//! - A rejected duplicate leaves both memory and store untouched.

use crate::model::date::CalendarDate;
use crate::model::id::{IdSource, RecordId};
use crate::model::records::Absence;
use crate::repo::{RepoError, RepoResult};
use crate::store::Store;

/// Store key for the absence collection.
pub const ABSENCES_KEY: &str = "absences";

/// Write-through repository over the absence collection.
pub struct AbsenceRepository<'s> {
    store: &'s Store,
    records: Vec<Absence>,
    ids: IdSource,
}

impl<'s> AbsenceRepository<'s> {
    /// Loads the collection from the store. A missing or corrupt payload
    /// starts the repository empty.
    pub fn load(store: &'s Store) -> Self {
        let records: Vec<Absence> = store.load(ABSENCES_KEY);
        let ids = IdSource::seeded(records.iter().map(|record| record.id));
        Self {
            store,
            records,
            ids,
        }
    }

    /// Appends a new absence and persists the full collection.
    ///
    /// Returns [`RepoError::DuplicateAbsence`] without mutating when an
    /// absence for the same student and date is already recorded. Whether
    /// `student_id` references a live student is checked by the caller,
    /// which owns the student collection.
    pub fn add(&mut self, student_id: RecordId, date: CalendarDate) -> RepoResult<Absence> {
        if self
            .records
            .iter()
            .any(|record| record.student_id == student_id && record.date == date)
        {
            return Err(RepoError::DuplicateAbsence { student_id, date });
        }

        let record = Absence {
            id: self.ids.next_id(),
            student_id,
            date,
        };

        let mut next = self.records.clone();
        next.push(record.clone());
        self.store.save(ABSENCES_KEY, &next)?;
        self.records = next;
        Ok(record)
    }

    /// Removes the absence with `id` and persists. A missing id is a no-op.
    pub fn delete(&mut self, id: RecordId) -> RepoResult<()> {
        let next: Vec<Absence> = self
            .records
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();
        if next.len() == self.records.len() {
            return Ok(());
        }

        self.store.save(ABSENCES_KEY, &next)?;
        self.records = next;
        Ok(())
    }

    /// Removes every absence referencing `student_id` and persists once.
    ///
    /// Returns the number of absences removed. Used by the student-deletion
    /// cascade.
    pub fn delete_for_student(&mut self, student_id: RecordId) -> RepoResult<usize> {
        let next: Vec<Absence> = self
            .records
            .iter()
            .filter(|record| record.student_id != student_id)
            .cloned()
            .collect();
        let removed = self.records.len() - next.len();
        if removed == 0 {
            return Ok(0);
        }

        self.store.save(ABSENCES_KEY, &next)?;
        self.records = next;
        Ok(removed)
    }

    /// Current collection in insertion order.
    pub fn list(&self) -> &[Absence] {
        &self.records
    }
}
