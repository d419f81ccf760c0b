//! Repository layer: in-memory entity collections with write-through
//! persistence.
//!
//! # Responsibility
//! - Own one ordered collection per entity type, initialized from the store.
//! - Persist the full collection on every add/delete before returning.
//! - Report integrity conflicts as semantic errors, never partial mutations.
//!
//! # Invariants
//! - In-memory state and the stored payload agree after every successful
//!   operation (write-through).
//! - Collection order is insertion order; display ordering belongs to the
//!   derived views.

use crate::model::date::CalendarDate;
use crate::model::id::RecordId;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod absence_repo;
pub mod competition_repo;
pub mod event_repo;
pub mod student_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence failures and integrity conflicts.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    /// An absence referenced a student id with no matching student.
    UnknownStudent(RecordId),
    /// An absence for this (student, date) pair is already recorded.
    DuplicateAbsence {
        student_id: RecordId,
        date: CalendarDate,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::UnknownStudent(id) => write!(f, "no student with id {id}"),
            Self::DuplicateAbsence { student_id, date } => write!(
                f,
                "absence for student {student_id} on {date} is already recorded"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::UnknownStudent(_) => None,
            Self::DuplicateAbsence { .. } => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
