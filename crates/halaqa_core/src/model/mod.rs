//! Domain model for the memorization program.
//!
//! # Responsibility
//! - Define the canonical record shapes persisted by the repositories.
//! - Own identifier issuance and calendar helpers shared across core.
//!
//! # Invariants
//! - Every record is identified by a stable `RecordId` unique within its
//!   collection.
//! - Records are immutable once created; change means delete + re-add.

pub mod date;
pub mod id;
pub mod records;
