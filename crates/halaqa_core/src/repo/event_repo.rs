//! Event collection with write-through persistence.

use crate::model::date::CalendarDate;
use crate::model::id::{IdSource, RecordId};
use crate::model::records::Event;
use crate::repo::RepoResult;
use crate::store::Store;

/// Store key for the event collection.
pub const EVENTS_KEY: &str = "events";

/// Request model for scheduling one program event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub date: CalendarDate,
    pub description: Option<String>,
}

/// Write-through repository over the event collection.
pub struct EventRepository<'s> {
    store: &'s Store,
    records: Vec<Event>,
    ids: IdSource,
}

impl<'s> EventRepository<'s> {
    /// Loads the collection from the store. A missing or corrupt payload
    /// starts the repository empty.
    pub fn load(store: &'s Store) -> Self {
        let records: Vec<Event> = store.load(EVENTS_KEY);
        let ids = IdSource::seeded(records.iter().map(|record| record.id));
        Self {
            store,
            records,
            ids,
        }
    }

    /// Appends a new event and persists the full collection.
    pub fn add(&mut self, request: NewEvent) -> RepoResult<Event> {
        let record = Event {
            id: self.ids.next_id(),
            name: request.name,
            date: request.date,
            description: request.description,
        };

        let mut next = self.records.clone();
        next.push(record.clone());
        self.store.save(EVENTS_KEY, &next)?;
        self.records = next;
        Ok(record)
    }

    /// Removes the event with `id` and persists. A missing id is a no-op.
    pub fn delete(&mut self, id: RecordId) -> RepoResult<()> {
        let next: Vec<Event> = self
            .records
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();
        if next.len() == self.records.len() {
            return Ok(());
        }

        self.store.save(EVENTS_KEY, &next)?;
        self.records = next;
        Ok(())
    }

    /// Current collection in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.records
    }
}
