//! Competition collection with write-through persistence.

use crate::model::date::CalendarDate;
use crate::model::id::{IdSource, RecordId};
use crate::model::records::{Competition, CompetitionKind};
use crate::repo::RepoResult;
use crate::store::Store;

/// Store key for the competition collection.
pub const COMPETITIONS_KEY: &str = "competitions";

/// Request model for announcing one competition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompetition {
    pub name: String,
    pub date: CalendarDate,
    pub kind: CompetitionKind,
    pub prize: Option<String>,
}

/// Write-through repository over the competition collection.
pub struct CompetitionRepository<'s> {
    store: &'s Store,
    records: Vec<Competition>,
    ids: IdSource,
}

impl<'s> CompetitionRepository<'s> {
    /// Loads the collection from the store. A missing or corrupt payload
    /// starts the repository empty.
    pub fn load(store: &'s Store) -> Self {
        let records: Vec<Competition> = store.load(COMPETITIONS_KEY);
        let ids = IdSource::seeded(records.iter().map(|record| record.id));
        Self {
            store,
            records,
            ids,
        }
    }

    /// Appends a new competition and persists the full collection.
    pub fn add(&mut self, request: NewCompetition) -> RepoResult<Competition> {
        let record = Competition {
            id: self.ids.next_id(),
            name: request.name,
            date: request.date,
            kind: request.kind,
            prize: request.prize,
        };

        let mut next = self.records.clone();
        next.push(record.clone());
        self.store.save(COMPETITIONS_KEY, &next)?;
        self.records = next;
        Ok(record)
    }

    /// Removes the competition with `id` and persists. A missing id is a
    /// no-op.
    pub fn delete(&mut self, id: RecordId) -> RepoResult<()> {
        let next: Vec<Competition> = self
            .records
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();
        if next.len() == self.records.len() {
            return Ok(());
        }

        self.store.save(COMPETITIONS_KEY, &next)?;
        self.records = next;
        Ok(())
    }

    /// Current collection in insertion order.
    pub fn list(&self) -> &[Competition] {
        &self.records
    }
}
