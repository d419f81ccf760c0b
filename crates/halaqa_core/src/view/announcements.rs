//! Announcement feeds merging events and competitions.
//!
//! # Responsibility
//! - Project both schedule collections into one announcement shape.
//! - Compute the "latest" and "upcoming" feeds shown on the dashboard.
//!
//! # Invariants
//! - Sorting is stable; records sharing a date keep pre-merge order.
//! - The upcoming feed includes today and excludes anything earlier.

use crate::model::date::CalendarDate;
use crate::model::records::{Competition, Event};

/// Feed length used by the dashboard.
pub const DEFAULT_ANNOUNCEMENT_LIMIT: usize = 3;

/// Source collection an announcement was projected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementKind {
    Event,
    Competition,
}

/// Common shape for feed rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub kind: AnnouncementKind,
    pub title: String,
    pub date: CalendarDate,
    pub details: String,
}

/// Returns the most recent announcements, newest date first.
pub fn latest_announcements(
    events: &[Event],
    competitions: &[Competition],
    limit: usize,
) -> Vec<Announcement> {
    let mut merged: Vec<Announcement> = competitions
        .iter()
        .map(project_competition)
        .chain(events.iter().map(project_event))
        .collect();

    merged.sort_by(|a, b| b.date.cmp(&a.date));
    merged.truncate(limit);
    merged
}

/// Returns announcements dated today or later, earliest date first.
pub fn upcoming_announcements(
    events: &[Event],
    competitions: &[Competition],
    today: CalendarDate,
    limit: usize,
) -> Vec<Announcement> {
    let mut merged: Vec<Announcement> = events
        .iter()
        .map(project_event)
        .chain(competitions.iter().map(project_competition))
        .filter(|announcement| announcement.date >= today)
        .collect();

    merged.sort_by(|a, b| a.date.cmp(&b.date));
    merged.truncate(limit);
    merged
}

fn project_event(event: &Event) -> Announcement {
    Announcement {
        kind: AnnouncementKind::Event,
        title: event.name.clone(),
        date: event.date,
        details: event.description.clone().unwrap_or_default(),
    }
}

fn project_competition(competition: &Competition) -> Announcement {
    let details = match &competition.prize {
        Some(prize) => format!("kind: {} - prize: {prize}", competition.kind.label()),
        None => format!("kind: {}", competition.kind.label()),
    };
    Announcement {
        kind: AnnouncementKind::Competition,
        title: competition.name.clone(),
        date: competition.date,
        details,
    }
}
