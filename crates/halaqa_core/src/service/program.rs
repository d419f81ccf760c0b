//! Program facade: the presentation-facing entry point over all four
//! repositories.
//!
//! # Responsibility
//! - Orchestrate cross-collection rules: student existence for absences,
//!   cascade deletion of a student's absences.
//! - Compose post-commit notifications and hand them to the sink.
//! - Expose derived views over current repository state.
//!
//! # Invariants
//! - Notifications are dispatched only after the mutation persisted.
//! - Repository mutation never depends on sink behavior.
//! - Cross-collection deletes are sequential single-collection writes;
//!   there is no transaction spanning entity types.

use crate::model::date::CalendarDate;
use crate::model::id::RecordId;
use crate::model::records::{Absence, Competition, Event, Student};
use crate::notify::{Notification, NotificationSink};
use crate::repo::absence_repo::AbsenceRepository;
use crate::repo::competition_repo::{CompetitionRepository, NewCompetition};
use crate::repo::event_repo::{EventRepository, NewEvent};
use crate::repo::student_repo::{NewStudent, StudentRepository};
use crate::repo::{RepoError, RepoResult};
use crate::store::Store;
use crate::view::announcements::{
    latest_announcements, upcoming_announcements, Announcement, DEFAULT_ANNOUNCEMENT_LIMIT,
};
use crate::view::dashboard::{aggregate_stats, DashboardStats};

/// Use-case facade owning the four entity repositories.
///
/// Constructed once at process start from a bootstrapped [`Store`] and
/// passed by reference to the presentation layer.
pub struct ProgramService<'s, N: NotificationSink> {
    students: StudentRepository<'s>,
    absences: AbsenceRepository<'s>,
    events: EventRepository<'s>,
    competitions: CompetitionRepository<'s>,
    notifier: N,
}

impl<'s, N: NotificationSink> ProgramService<'s, N> {
    /// Loads all four collections from the store.
    pub fn open(store: &'s Store, notifier: N) -> Self {
        Self {
            students: StudentRepository::load(store),
            absences: AbsenceRepository::load(store),
            events: EventRepository::load(store),
            competitions: CompetitionRepository::load(store),
            notifier,
        }
    }

    /// Registers a student's memorization assignment and notifies them.
    pub fn register_student(&mut self, request: NewStudent) -> RepoResult<Student> {
        let record = self.students.add(request)?;
        self.notifier.notify(&Notification::new(
            &record.name,
            format!(
                "you are registered to memorize {} pages from {} to {}",
                record.pages, record.from_surah, record.to_surah
            ),
        ));
        Ok(record)
    }

    /// Records one absence for an existing student and notifies them.
    ///
    /// # Errors
    /// - [`RepoError::UnknownStudent`] when `student_id` matches no student.
    /// - [`RepoError::DuplicateAbsence`] when this (student, date) pair is
    ///   already recorded; state is unchanged.
    pub fn record_absence(
        &mut self,
        student_id: RecordId,
        date: CalendarDate,
    ) -> RepoResult<Absence> {
        let Some(student) = self.students.get(student_id) else {
            return Err(RepoError::UnknownStudent(student_id));
        };
        let recipient = student.name.clone();

        let record = self.absences.add(student_id, date)?;
        self.notifier.notify(&Notification::new(
            recipient,
            format!("your absence on {date} was recorded"),
        ));
        Ok(record)
    }

    /// Schedules an event and notifies every registered student.
    pub fn schedule_event(&mut self, request: NewEvent) -> RepoResult<Event> {
        let record = self.events.add(request)?;
        let message = format!("new event announced: {} on {}", record.name, record.date);
        self.notify_all_students(&message);
        Ok(record)
    }

    /// Announces a competition and notifies every registered student.
    pub fn announce_competition(&mut self, request: NewCompetition) -> RepoResult<Competition> {
        let record = self.competitions.add(request)?;
        let message = format!(
            "new competition announced: {} ({}) on {}",
            record.name,
            record.kind.label(),
            record.date
        );
        self.notify_all_students(&message);
        Ok(record)
    }

    /// Deletes a student and every absence that references them.
    ///
    /// A missing id is a no-op. The two collections are persisted one after
    /// the other; each write is atomic on its own.
    pub fn delete_student(&mut self, id: RecordId) -> RepoResult<()> {
        self.students.delete(id)?;
        self.absences.delete_for_student(id)?;
        Ok(())
    }

    /// Deletes one absence. A missing id is a no-op.
    pub fn delete_absence(&mut self, id: RecordId) -> RepoResult<()> {
        self.absences.delete(id)
    }

    /// Deletes one event. A missing id is a no-op.
    pub fn delete_event(&mut self, id: RecordId) -> RepoResult<()> {
        self.events.delete(id)
    }

    /// Deletes one competition. A missing id is a no-op.
    pub fn delete_competition(&mut self, id: RecordId) -> RepoResult<()> {
        self.competitions.delete(id)
    }

    /// Students in insertion order.
    pub fn students(&self) -> &[Student] {
        self.students.list()
    }

    /// Absences in insertion order.
    pub fn absences(&self) -> &[Absence] {
        self.absences.list()
    }

    /// Events in insertion order.
    pub fn events(&self) -> &[Event] {
        self.events.list()
    }

    /// Competitions in insertion order.
    pub fn competitions(&self) -> &[Competition] {
        self.competitions.list()
    }

    /// Dashboard counters for `today`.
    pub fn dashboard(&self, today: CalendarDate) -> DashboardStats {
        aggregate_stats(self.students.list(), self.absences.list(), today)
    }

    /// The most recent announcements, newest first.
    pub fn latest_announcements(&self) -> Vec<Announcement> {
        latest_announcements(
            self.events.list(),
            self.competitions.list(),
            DEFAULT_ANNOUNCEMENT_LIMIT,
        )
    }

    /// Announcements dated `today` or later, earliest first.
    pub fn upcoming_announcements(&self, today: CalendarDate) -> Vec<Announcement> {
        upcoming_announcements(
            self.events.list(),
            self.competitions.list(),
            today,
            DEFAULT_ANNOUNCEMENT_LIMIT,
        )
    }

    fn notify_all_students(&self, message: &str) {
        for student in self.students.list() {
            self.notifier
                .notify(&Notification::new(&student.name, message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProgramService;
    use crate::model::records::CompetitionKind;
    use crate::notify::test_support::RecordingSink;
    use crate::repo::competition_repo::NewCompetition;
    use crate::repo::event_repo::NewEvent;
    use crate::repo::student_repo::NewStudent;
    use crate::store::open_store_in_memory;

    fn new_student(name: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            pages: "2".to_string(),
            from_surah: "Al-Fatiha".to_string(),
            to_surah: "Al-Baqara".to_string(),
            date: "2024-01-10".parse().unwrap(),
        }
    }

    #[test]
    fn registering_a_student_notifies_that_student() {
        let store = open_store_in_memory().unwrap();
        let sink = RecordingSink::default();
        let mut service = ProgramService::open(&store, &sink);

        service.register_student(new_student("Amina")).unwrap();

        let delivered = sink.delivered.borrow();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].recipient, "Amina");
        assert!(delivered[0].message.contains("2 pages"));
    }

    #[test]
    fn scheduling_an_event_notifies_every_student() {
        let store = open_store_in_memory().unwrap();
        let sink = RecordingSink::default();
        let mut service = ProgramService::open(&store, &sink);

        service.register_student(new_student("Amina")).unwrap();
        service.register_student(new_student("Sara")).unwrap();
        sink.delivered.borrow_mut().clear();

        service
            .schedule_event(NewEvent {
                name: "Open day".to_string(),
                date: "2024-02-01".parse().unwrap(),
                description: None,
            })
            .unwrap();

        let recipients: Vec<String> = sink
            .delivered
            .borrow()
            .iter()
            .map(|n| n.recipient.clone())
            .collect();
        assert_eq!(recipients, vec!["Amina", "Sara"]);
    }

    #[test]
    fn competition_notification_mentions_the_kind() {
        let store = open_store_in_memory().unwrap();
        let sink = RecordingSink::default();
        let mut service = ProgramService::open(&store, &sink);

        service.register_student(new_student("Amina")).unwrap();
        sink.delivered.borrow_mut().clear();

        service
            .announce_competition(NewCompetition {
                name: "Winter cup".to_string(),
                date: "2024-02-01".parse().unwrap(),
                kind: CompetitionKind::Tajweed,
                prize: Some("a mushaf".to_string()),
            })
            .unwrap();

        let delivered = sink.delivered.borrow();
        assert_eq!(delivered.len(), 1);
        assert!(delivered[0].message.contains("(tajweed)"));
    }

    #[test]
    fn failed_absence_add_delivers_no_notification() {
        let store = open_store_in_memory().unwrap();
        let sink = RecordingSink::default();
        let mut service = ProgramService::open(&store, &sink);

        let student = service.register_student(new_student("Amina")).unwrap();
        let date = "2024-01-11".parse().unwrap();
        service.record_absence(student.id, date).unwrap();
        sink.delivered.borrow_mut().clear();

        service.record_absence(student.id, date).unwrap_err();
        assert!(sink.delivered.borrow().is_empty());
    }
}
