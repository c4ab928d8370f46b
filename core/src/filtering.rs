//! Client-side search over the fetched assignment list. The collection is
//! small enough that every keystroke just re-filters in memory.

use crate::models::Assignment;

/// An assignment is visible when its title or course code contains the query
/// as a case-insensitive substring. An empty query matches everything.
pub fn matches_query(assignment: &Assignment, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    assignment.title.to_lowercase().contains(&needle)
        || assignment.code.to_lowercase().contains(&needle)
}

/// Keeps the input (newest-first) order.
pub fn filter_assignments<'a>(assignments: &'a [Assignment], query: &str) -> Vec<&'a Assignment> {
    assignments
        .iter()
        .filter(|assignment| matches_query(assignment, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Semester, PLACEHOLDER_FILE_PATH};
    use chrono::Utc;
    use uuid::Uuid;

    fn assignment(title: &str, code: &str) -> Assignment {
        Assignment {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: title.to_string(),
            code: code.to_string(),
            year: 2024,
            semester: Semester::OddSem,
            questions: "q".to_string(),
            answers: "a".to_string(),
            file_path: PLACEHOLDER_FILE_PATH.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_query_keeps_the_full_set_in_order() {
        let rows = vec![
            assignment("Signals and Systems", "EE2001"),
            assignment("Data Structures", "CS2100"),
        ];
        let visible = filter_assignments(&rows, "");
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].title, "Signals and Systems");
        assert_eq!(visible[1].title, "Data Structures");
    }

    #[test]
    fn matches_title_case_insensitively() {
        let rows = vec![
            assignment("Signals and Systems", "EE2001"),
            assignment("Data Structures", "CS2100"),
        ];
        let visible = filter_assignments(&rows, "sIgNaLs");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].code, "EE2001");
    }

    #[test]
    fn matches_course_code_substring() {
        let rows = vec![
            assignment("Signals and Systems", "EE2001"),
            assignment("Data Structures", "CS2100"),
        ];
        let visible = filter_assignments(&rows, "cs21");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Data Structures");
    }

    #[test]
    fn no_match_yields_an_empty_set() {
        let rows = vec![assignment("Signals and Systems", "EE2001")];
        assert!(filter_assignments(&rows, "thermodynamics").is_empty());
    }

    #[test]
    fn visible_rows_all_contain_the_query() {
        let rows = vec![
            assignment("Linear Algebra", "MA1101"),
            assignment("Machine Learning", "CS4780"),
            assignment("Databases", "CS3200"),
        ];
        for row in filter_assignments(&rows, "ma") {
            let needle = "ma";
            assert!(
                row.title.to_lowercase().contains(needle)
                    || row.code.to_lowercase().contains(needle)
            );
        }
    }
}
