//! Dashboard counters.
//!
//! # Responsibility
//! - Aggregate today's roster activity into the numbers the landing page
//!   shows.

use crate::model::date::CalendarDate;
use crate::model::records::{Absence, Student};

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    /// All registered students, regardless of date.
    pub total_students: usize,
    /// Sum of pages registered today. Unparseable page counts contribute
    /// zero rather than poisoning the total.
    pub today_pages: u32,
    /// Absences recorded for today.
    pub today_absences: usize,
}

/// Computes dashboard counters for `today`.
pub fn aggregate_stats(
    students: &[Student],
    absences: &[Absence],
    today: CalendarDate,
) -> DashboardStats {
    let today_pages = students
        .iter()
        .filter(|student| student.date == today)
        .map(|student| student.pages.trim().parse::<u32>().unwrap_or(0))
        .sum();

    let today_absences = absences
        .iter()
        .filter(|absence| absence.date == today)
        .count();

    DashboardStats {
        total_students: students.len(),
        today_pages,
        today_absences,
    }
}

#[cfg(test)]
mod tests {
    use super::aggregate_stats;
    use crate::model::records::{Absence, Student};

    fn student(id: i64, pages: &str, date: &str) -> Student {
        Student {
            id,
            name: format!("student-{id}"),
            pages: pages.to_string(),
            from_surah: "Al-Fatiha".to_string(),
            to_surah: "Al-Baqara".to_string(),
            date: date.parse().unwrap(),
        }
    }

    fn absence(id: i64, student_id: i64, date: &str) -> Absence {
        Absence {
            id,
            student_id,
            date: date.parse().unwrap(),
        }
    }

    #[test]
    fn today_pages_only_counts_todays_registrations() {
        let students = vec![
            student(1, "5", "2024-01-10"),
            student(2, "3", "2024-01-09"),
        ];
        let stats = aggregate_stats(&students, &[], "2024-01-10".parse().unwrap());

        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.today_pages, 5);
    }

    #[test]
    fn unparseable_pages_count_as_zero() {
        let students = vec![
            student(1, "4", "2024-01-10"),
            student(2, "a few", "2024-01-10"),
        ];
        let stats = aggregate_stats(&students, &[], "2024-01-10".parse().unwrap());

        assert_eq!(stats.today_pages, 4);
    }

    #[test]
    fn today_absences_ignores_other_dates() {
        let absences = vec![
            absence(1, 10, "2024-01-10"),
            absence(2, 11, "2024-01-10"),
            absence(3, 10, "2024-01-09"),
        ];
        let stats = aggregate_stats(&[], &absences, "2024-01-10".parse().unwrap());

        assert_eq!(stats.today_absences, 2);
    }
}
