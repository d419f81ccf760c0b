//! Canonical record shapes for the four entity collections.
//!
//! # Responsibility
//! - Define the persisted form of students, absences, events and
//!   competitions.
//! - Keep serialized field names aligned with the stored payload layout.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - Optional fields deserialize to `None` when missing; unknown fields in
//!   stored payloads are ignored.

use crate::model::date::CalendarDate;
use crate::model::id::RecordId;
use serde::{Deserialize, Serialize};

/// A student's registered memorization assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    /// Page count kept as text, matching the stored form. The dashboard
    /// view parses it leniently; an unparseable value counts as zero.
    pub pages: String,
    #[serde(rename = "fromSurah")]
    pub from_surah: String,
    #[serde(rename = "toSurah")]
    pub to_surah: String,
    pub date: CalendarDate,
}

/// One recorded absence of one student on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    pub id: RecordId,
    /// Back-reference to [`Student::id`]. Non-owning; resolved at lookup
    /// time and cleaned up when the student is deleted.
    #[serde(rename = "studentId")]
    pub student_id: RecordId,
    pub date: CalendarDate,
}

/// A scheduled program event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub name: String,
    pub date: CalendarDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An announced competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub id: RecordId,
    pub name: String,
    pub date: CalendarDate,
    #[serde(rename = "type")]
    pub kind: CompetitionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<String>,
}

/// Closed category set for competitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionKind {
    Memorization,
    Tajweed,
    Recitation,
    General,
}

impl CompetitionKind {
    /// Human-readable label used in announcement details and notifications.
    pub fn label(self) -> &'static str {
        match self {
            Self::Memorization => "memorization",
            Self::Tajweed => "tajweed",
            Self::Recitation => "recitation",
            Self::General => "general",
        }
    }
}

/// Accessor shared by every record type that carries a calendar date.
///
/// Display ordering is a derived-view concern; this trait is the seam that
/// lets one sorting routine serve all four collections.
pub trait Dated {
    fn date(&self) -> CalendarDate;
}

impl Dated for Student {
    fn date(&self) -> CalendarDate {
        self.date
    }
}

impl Dated for Absence {
    fn date(&self) -> CalendarDate {
        self.date
    }
}

impl Dated for Event {
    fn date(&self) -> CalendarDate {
        self.date
    }
}

impl Dated for Competition {
    fn date(&self) -> CalendarDate {
        self.date
    }
}
