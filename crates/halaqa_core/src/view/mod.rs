//! Derived views over repository state.
//!
//! # Responsibility
//! - Compute display projections (dashboard counters, announcement feeds,
//!   table ordering) as pure functions.
//!
//! # Invariants
//! - Views hold no state and are recomputed on every call.
//! - Repositories are never mutated from this module.

pub mod announcements;
pub mod dashboard;

use crate::model::records::Dated;

/// Returns `records` reordered newest-date-first for table display.
///
/// The sort is stable, so records sharing a date keep their insertion
/// order relative to each other.
pub fn newest_first<T: Dated + Clone>(records: &[T]) -> Vec<T> {
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| b.date().cmp(&a.date()));
    ordered
}

#[cfg(test)]
mod tests {
    use super::newest_first;
    use crate::model::records::Event;

    fn event(id: i64, date: &str) -> Event {
        Event {
            id,
            name: format!("event-{id}"),
            date: date.parse().unwrap(),
            description: None,
        }
    }

    #[test]
    fn newest_first_orders_by_date_descending() {
        let records = vec![
            event(1, "2024-01-05"),
            event(2, "2024-03-01"),
            event(3, "2024-02-10"),
        ];

        let ordered = newest_first(&records);
        let ids: Vec<i64> = ordered.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn newest_first_keeps_insertion_order_for_equal_dates() {
        let records = vec![
            event(1, "2024-01-05"),
            event(2, "2024-01-05"),
            event(3, "2024-01-05"),
        ];

        let ordered = newest_first(&records);
        let ids: Vec<i64> = ordered.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
