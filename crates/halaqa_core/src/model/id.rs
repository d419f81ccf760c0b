//! Record identifier issuance.
//!
//! # Responsibility
//! - Issue timestamp-shaped integer ids for newly created records.
//!
//! # Invariants
//! - Ids issued by one `IdSource` are strictly increasing, even when the
//!   wall clock does not advance between calls or moves backwards.
//! - Seeding from an existing collection keeps new ids above every id
//!   already persisted.

use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier for every persisted record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// The value is a Unix epoch millisecond timestamp taken at creation time,
/// bumped as needed to stay unique.
pub type RecordId = i64;

/// Monotonic id generator, one per repository.
///
/// Wall-clock milliseconds alone cannot guarantee uniqueness under rapid
/// successive adds, so the source remembers the last id it issued and never
/// goes at or below it.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdSource {
    last_issued: RecordId,
}

impl IdSource {
    /// Creates a source whose next id will exceed every id in `existing`.
    pub fn seeded(existing: impl IntoIterator<Item = RecordId>) -> Self {
        Self {
            last_issued: existing.into_iter().max().unwrap_or(0),
        }
    }

    /// Issues the next id: the current wall clock in milliseconds, or the
    /// smallest value that keeps the sequence strictly increasing.
    pub fn next_id(&mut self) -> RecordId {
        let now = now_epoch_ms();
        self.last_issued = now.max(self.last_issued + 1);
        self.last_issued
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::IdSource;

    #[test]
    fn ids_are_strictly_increasing_within_one_source() {
        let mut source = IdSource::default();
        let mut previous = 0;
        for _ in 0..1000 {
            let id = source.next_id();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn seeded_source_stays_above_existing_ids() {
        let far_future = i64::MAX - 10;
        let mut source = IdSource::seeded([5, far_future, 17]);
        assert_eq!(source.next_id(), far_future + 1);
    }

    #[test]
    fn empty_seed_behaves_like_fresh_source() {
        let mut seeded = IdSource::seeded([]);
        assert!(seeded.next_id() > 0);
    }
}
