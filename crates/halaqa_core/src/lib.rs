//! Core domain logic for the halaqa record keeper.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date::{next_meeting, CalendarDate};
pub use model::id::{IdSource, RecordId};
pub use model::records::{Absence, Competition, CompetitionKind, Dated, Event, Student};
pub use notify::{LogNotifier, Notification, NotificationSink};
pub use repo::absence_repo::AbsenceRepository;
pub use repo::competition_repo::{CompetitionRepository, NewCompetition};
pub use repo::event_repo::{EventRepository, NewEvent};
pub use repo::student_repo::{NewStudent, StudentRepository};
pub use repo::{RepoError, RepoResult};
pub use service::program::ProgramService;
pub use store::{open_store, open_store_in_memory, Store, StoreError, StoreResult};
pub use view::announcements::{
    latest_announcements, upcoming_announcements, Announcement, AnnouncementKind,
    DEFAULT_ANNOUNCEMENT_LIMIT,
};
pub use view::dashboard::{aggregate_stats, DashboardStats};
pub use view::newest_first;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
