// src/store.rs
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::models::{Assignment, ScheduleSlot, StudentProfile, Task};

/// Everything held for one student. A schedule regeneration replaces the
/// whole record; no task completion or marks survive from the previous plan.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub profile: StudentProfile,
    pub schedule: Vec<ScheduleSlot>,
    pub assignments: Vec<Assignment>,
    pub tasks: Vec<Task>,
}

/// Process-lifetime storage keyed by student name. Route logic only goes
/// through get/put, so a persistent backend could replace this struct without
/// touching the handlers. Concurrent puts for the same name are last-write-wins.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, StudentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, student_name: &str) -> Option<StudentRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(student_name)
            .cloned()
    }

    pub fn put(&self, student_name: &str, record: StudentRecord) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(student_name.to_owned(), record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Hours, Parent, SubjectInput};

    fn record(study_hours: f64, subject: &str) -> StudentRecord {
        StudentRecord {
            profile: StudentProfile {
                parent: Parent {
                    name: "Ravi".to_string(),
                    email: "ravi@example.com".to_string(),
                },
                study_hours,
                study_slot: "evening".to_string(),
                subjects: vec![SubjectInput {
                    name: subject.to_string(),
                    syllabus: None,
                }],
            },
            schedule: vec![ScheduleSlot {
                slot: "Slot 1".to_string(),
                subject: subject.to_string(),
                duration: Hours(study_hours),
            }],
            assignments: Vec::new(),
            tasks: Vec::new(),
        }
    }

    #[test]
    fn get_returns_none_for_unknown_student() {
        let store = MemoryStore::new();
        assert!(store.get("Asha").is_none());
    }

    #[test]
    fn put_then_get_round_trips_the_record() {
        let store = MemoryStore::new();
        store.put("Asha", record(6.0, "Math"));

        let stored = store.get("Asha").unwrap();
        assert_eq!(stored.profile.study_hours, 6.0);
        assert_eq!(stored.schedule[0].subject, "Math");
    }

    #[test]
    fn put_replaces_the_previous_record_wholesale() {
        let store = MemoryStore::new();
        store.put("Asha", record(6.0, "Math"));
        store.put("Asha", record(4.0, "Science"));

        let stored = store.get("Asha").unwrap();
        assert_eq!(stored.profile.study_hours, 4.0);
        assert_eq!(stored.schedule[0].subject, "Science");
    }

    #[test]
    fn records_are_independent_per_student() {
        let store = MemoryStore::new();
        store.put("Asha", record(6.0, "Math"));
        store.put("Ben", record(3.0, "English"));

        assert_eq!(store.get("Asha").unwrap().schedule[0].subject, "Math");
        assert_eq!(store.get("Ben").unwrap().schedule[0].subject, "English");
    }
}
