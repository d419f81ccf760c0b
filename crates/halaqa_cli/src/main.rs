//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `halaqa_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("halaqa_core version={}", halaqa_core::core_version());

    match halaqa_core::open_store_in_memory() {
        Ok(store) => {
            let service =
                halaqa_core::ProgramService::open(&store, halaqa_core::LogNotifier);
            println!(
                "store ok: {} students, {} absences, {} events, {} competitions",
                service.students().len(),
                service.absences().len(),
                service.events().len(),
                service.competitions().len()
            );
        }
        Err(err) => {
            eprintln!("store bootstrap failed: {err}");
            std::process::exit(1);
        }
    }
}
