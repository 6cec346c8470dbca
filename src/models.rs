// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Rounds to one decimal place, matching how generated durations and
/// hour totals are presented.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Study time in hours. Held as a number internally; only the wire format is
/// the display string ("2 hr", "2.5 hr"), so aggregate computations never
/// re-parse formatted output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hours(pub f64);

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{} hr", self.0 as i64)
        } else {
            write!(f, "{:.1} hr", self.0)
        }
    }
}

impl Serialize for Hours {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

// --- 1. Domain entities ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parent {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectInput {
    pub name: String,
    pub syllabus: Option<String>,
}

/// Profile captured at schedule generation. Overwritten wholesale on every
/// regeneration for the same student name; never partially updated.
#[derive(Debug, Clone)]
pub struct StudentProfile {
    pub parent: Parent,
    pub study_hours: f64,
    pub study_slot: String,
    pub subjects: Vec<SubjectInput>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub slot: String,
    pub subject: String,
    pub duration: Hours,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub subject: String,
    pub syllabus: String,
    pub due_week: usize,
    pub marks: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub subject: String,
    pub duration: Hours,
    pub done: bool,
}

// --- 2. Request schemas ---

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScheduleRequest {
    #[validate(length(min = 1, message = "Missing required data"))]
    pub student_name: String,
    #[validate(range(exclusive_min = 0.0, message = "Missing required data"))]
    pub study_hours: f64,
    #[serde(default)]
    pub study_slot: String,
    pub parent: Parent,
    #[validate(length(min = 1, message = "Missing required data"))]
    pub subjects: Vec<SubjectInput>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTasksRequest {
    pub student_name: String,
    pub completed_task_ids: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AlertParentRequest {
    pub student_name: String,
}

/// Mark entries stay loosely typed: anything without a numeric in-range index
/// and a finite score is skipped silently rather than rejecting the request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMarksRequest {
    pub student_name: String,
    pub marks: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewQuery {
    pub student_name: Option<String>,
}

// --- 3. Response schemas ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScheduleResponse {
    pub schedule: Vec<ScheduleSlot>,
    pub weekly_assignments: Vec<Assignment>,
    pub today_tasks: Vec<Task>,
    pub study_slot: String,
    pub time_per_subject: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTasksResponse {
    pub total: usize,
    pub done: usize,
    pub incomplete: usize,
    pub tasks: Vec<Task>,
}

/// The email that would be sent if a real transport existed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPayload {
    pub to: String,
    pub parent_name: String,
    pub student_name: String,
    pub incomplete_tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertParentResponse {
    pub success: bool,
    pub message: String,
    pub alert_payload: AlertPayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMarksResponse {
    pub success: bool,
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSummary {
    pub completion_percent: i64,
    pub planned_hours: f64,
    pub completed_hours: f64,
    pub alerts_this_week: usize,
    pub avg_marks: Option<i64>,
    pub active_subject: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentOverviewResponse {
    pub student_name: String,
    pub parent: Parent,
    pub study_hours: f64,
    pub schedule: Vec<ScheduleSlot>,
    pub assignments: Vec<Assignment>,
    pub tasks: Vec<Task>,
    pub summary: OverviewSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_formats_whole_values_without_decimal() {
        assert_eq!(Hours(2.0).to_string(), "2 hr");
        assert_eq!(Hours(6.0).to_string(), "6 hr");
    }

    #[test]
    fn hours_formats_fractional_values_with_one_decimal() {
        assert_eq!(Hours(2.5).to_string(), "2.5 hr");
        assert_eq!(Hours(0.5).to_string(), "0.5 hr");
    }

    #[test]
    fn hours_serializes_as_display_string() {
        assert_eq!(
            serde_json::to_value(Hours(1.5)).unwrap(),
            serde_json::json!("1.5 hr")
        );
    }

    #[test]
    fn round1_rounds_to_one_decimal() {
        assert_eq!(round1(6.0 / 3.0), 2.0);
        assert_eq!(round1(5.0 / 2.0), 2.5);
        assert_eq!(round1(10.0 / 3.0), 3.3);
    }

    fn valid_request() -> GenerateScheduleRequest {
        GenerateScheduleRequest {
            student_name: "Asha".to_string(),
            study_hours: 6.0,
            study_slot: "evening".to_string(),
            parent: Parent {
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
            },
            subjects: vec![SubjectInput {
                name: "Math".to_string(),
                syllabus: None,
            }],
        }
    }

    #[test]
    fn generate_request_accepts_complete_input() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn generate_request_rejects_empty_student_name() {
        let req = GenerateScheduleRequest {
            student_name: String::new(),
            ..valid_request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn generate_request_rejects_zero_study_hours() {
        let req = GenerateScheduleRequest {
            study_hours: 0.0,
            ..valid_request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn generate_request_rejects_empty_subject_list() {
        let req = GenerateScheduleRequest {
            subjects: Vec::new(),
            ..valid_request()
        };
        assert!(req.validate().is_err());
    }
}
