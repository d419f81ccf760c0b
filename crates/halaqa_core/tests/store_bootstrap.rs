use halaqa_core::store::migrations::latest_version;
use halaqa_core::{open_store, open_store_in_memory, NewStudent, ProgramService};
use tempfile::tempdir;

fn new_student(name: &str) -> NewStudent {
    NewStudent {
        name: name.to_string(),
        pages: "3".to_string(),
        from_surah: "Al-Mulk".to_string(),
        to_surah: "Al-Qalam".to_string(),
        date: "2024-01-10".parse().unwrap(),
    }
}

#[test]
fn migrations_define_at_least_one_version() {
    assert!(latest_version() >= 1);
}

#[test]
fn in_memory_store_opens_empty() {
    let store = open_store_in_memory().unwrap();
    let students: Vec<halaqa_core::Student> = store.load("students");
    assert!(students.is_empty());
}

#[test]
fn file_store_reopen_is_idempotent_and_keeps_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("halaqa.sqlite3");

    {
        let store = open_store(&path).unwrap();
        let mut service = ProgramService::open(&store, halaqa_core::LogNotifier);
        service.register_student(new_student("Amina")).unwrap();
    }

    let store = open_store(&path).unwrap();
    let service = ProgramService::open(&store, halaqa_core::LogNotifier);
    assert_eq!(service.students().len(), 1);
    assert_eq!(service.students()[0].name, "Amina");
}

#[test]
fn unknown_collection_key_loads_empty() {
    let store = open_store_in_memory().unwrap();
    let records: Vec<halaqa_core::Event> = store.load("not-a-collection");
    assert!(records.is_empty());
}
