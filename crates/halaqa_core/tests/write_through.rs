//! Write-through consistency: after any sequence of add/delete operations,
//! reloading the collections from the store reproduces the in-memory state.

use halaqa_core::{
    open_store_in_memory, CompetitionKind, LogNotifier, NewCompetition, NewEvent, NewStudent,
    ProgramService,
};

fn new_student(name: &str, date: &str) -> NewStudent {
    NewStudent {
        name: name.to_string(),
        pages: "4".to_string(),
        from_surah: "An-Naba".to_string(),
        to_surah: "An-Nazi'at".to_string(),
        date: date.parse().unwrap(),
    }
}

#[test]
fn replayed_mutations_survive_a_reload() {
    let store = open_store_in_memory().unwrap();
    let mut service = ProgramService::open(&store, LogNotifier);

    let amina = service
        .register_student(new_student("Amina", "2024-01-10"))
        .unwrap();
    let sara = service
        .register_student(new_student("Sara", "2024-01-11"))
        .unwrap();
    service
        .record_absence(amina.id, "2024-01-12".parse().unwrap())
        .unwrap();
    service
        .record_absence(sara.id, "2024-01-12".parse().unwrap())
        .unwrap();
    let event = service
        .schedule_event(NewEvent {
            name: "Open day".to_string(),
            date: "2024-02-01".parse().unwrap(),
            description: Some("families welcome".to_string()),
        })
        .unwrap();
    service
        .announce_competition(NewCompetition {
            name: "Winter cup".to_string(),
            date: "2024-02-15".parse().unwrap(),
            kind: CompetitionKind::Memorization,
            prize: Some("a mushaf".to_string()),
        })
        .unwrap();

    service.delete_event(event.id).unwrap();
    service.delete_student(sara.id).unwrap();

    let reloaded = ProgramService::open(&store, LogNotifier);
    assert_eq!(reloaded.students(), service.students());
    assert_eq!(reloaded.absences(), service.absences());
    assert_eq!(reloaded.events(), service.events());
    assert_eq!(reloaded.competitions(), service.competitions());
}

#[test]
fn rejected_duplicate_is_not_persisted() {
    let store = open_store_in_memory().unwrap();
    let mut service = ProgramService::open(&store, LogNotifier);

    let amina = service
        .register_student(new_student("Amina", "2024-01-10"))
        .unwrap();
    let date = "2024-01-12".parse().unwrap();
    service.record_absence(amina.id, date).unwrap();
    service.record_absence(amina.id, date).unwrap_err();

    let reloaded = ProgramService::open(&store, LogNotifier);
    assert_eq!(reloaded.absences().len(), 1);
    assert_eq!(reloaded.absences(), service.absences());
}

#[test]
fn insertion_order_is_the_stored_order() {
    let store = open_store_in_memory().unwrap();
    let mut service = ProgramService::open(&store, LogNotifier);

    // Newest date first in, so stored order differs from display order.
    service
        .register_student(new_student("Amina", "2024-01-12"))
        .unwrap();
    service
        .register_student(new_student("Sara", "2024-01-10"))
        .unwrap();

    let reloaded = ProgramService::open(&store, LogNotifier);
    let names: Vec<&str> = reloaded
        .students()
        .iter()
        .map(|student| student.name.as_str())
        .collect();
    assert_eq!(names, vec!["Amina", "Sara"]);
}
