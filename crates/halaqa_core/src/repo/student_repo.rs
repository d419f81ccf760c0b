//! Student collection with write-through persistence.
//!
//! # Responsibility
//! - Own the ordered student collection and its id issuance.
//! - Persist the full collection under the `students` key on every change.
//!
//! # Invariants
//! - `id` is unique across students, including across delete/re-add cycles
//!   within one process.
//! - A failed persist leaves the in-memory collection untouched.

use crate::model::date::CalendarDate;
use crate::model::id::{IdSource, RecordId};
use crate::model::records::Student;
use crate::repo::RepoResult;
use crate::store::Store;

/// Store key for the student collection.
pub const STUDENTS_KEY: &str = "students";

/// Request model for registering one student's assignment.
///
/// Field-level requiredness (non-empty name, positive page count) is the
/// presentation layer's contract; the repository does not re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub pages: String,
    pub from_surah: String,
    pub to_surah: String,
    pub date: CalendarDate,
}

/// Write-through repository over the student collection.
pub struct StudentRepository<'s> {
    store: &'s Store,
    records: Vec<Student>,
    ids: IdSource,
}

impl<'s> StudentRepository<'s> {
    /// Loads the collection from the store. A missing or corrupt payload
    /// starts the repository empty.
    pub fn load(store: &'s Store) -> Self {
        let records: Vec<Student> = store.load(STUDENTS_KEY);
        let ids = IdSource::seeded(records.iter().map(|record| record.id));
        Self {
            store,
            records,
            ids,
        }
    }

    /// Appends a new student and persists the full collection.
    pub fn add(&mut self, request: NewStudent) -> RepoResult<Student> {
        let record = Student {
            id: self.ids.next_id(),
            name: request.name,
            pages: request.pages,
            from_surah: request.from_surah,
            to_surah: request.to_surah,
            date: request.date,
        };

        let mut next = self.records.clone();
        next.push(record.clone());
        self.store.save(STUDENTS_KEY, &next)?;
        self.records = next;
        Ok(record)
    }

    /// Removes the student with `id` and persists. A missing id is a no-op.
    ///
    /// Cleanup of dependent absences is orchestrated above the repository;
    /// see `ProgramService::delete_student`.
    pub fn delete(&mut self, id: RecordId) -> RepoResult<()> {
        let next: Vec<Student> = self
            .records
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();
        if next.len() == self.records.len() {
            return Ok(());
        }

        self.store.save(STUDENTS_KEY, &next)?;
        self.records = next;
        Ok(())
    }

    /// Current collection in insertion order.
    pub fn list(&self) -> &[Student] {
        &self.records
    }

    /// Looks up one student by id.
    pub fn get(&self, id: RecordId) -> Option<&Student> {
        self.records.iter().find(|record| record.id == id)
    }
}
