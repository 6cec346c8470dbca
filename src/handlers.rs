// src/handlers.rs
use crate::models::{
    round1,
    AlertParentRequest,
    AlertParentResponse,
    AlertPayload,
    Assignment,
    GenerateScheduleRequest,
    GenerateScheduleResponse,
    Hours,
    OverviewQuery,
    OverviewSummary,
    ParentOverviewResponse,
    ScheduleSlot,
    StudentProfile,
    Task,
    UpdateMarksRequest,
    UpdateMarksResponse,
    UpdateTasksRequest,
    UpdateTasksResponse,
};
use crate::store::StudentRecord;
use crate::validation::ValidatedJson;
use crate::AppError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;

// --- 0. Liveness (GET /) ---
pub async fn root_handler() -> &'static str {
    "AI Study Planner backend is running"
}

// --- 1. Generate schedule (POST /api/generate-schedule) ---
pub async fn generate_schedule_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<GenerateScheduleRequest>,
) -> Result<Json<GenerateScheduleResponse>, AppError> {
    // Equal split: every subject gets the same slice regardless of syllabus.
    let time_per_subject = round1(body.study_hours / body.subjects.len() as f64);

    let schedule: Vec<ScheduleSlot> = body
        .subjects
        .iter()
        .enumerate()
        .map(|(i, subj)| ScheduleSlot {
            slot: format!("Slot {}", i + 1),
            subject: subj.name.clone(),
            duration: Hours(time_per_subject),
        })
        .collect();

    // Weekly assignments: one per subject, graded later.
    let weekly_assignments: Vec<Assignment> = body
        .subjects
        .iter()
        .enumerate()
        .map(|(i, subj)| Assignment {
            id: format!("{}-assn-{}", body.student_name, i + 1),
            subject: subj.name.clone(),
            syllabus: subj
                .syllabus
                .clone()
                .unwrap_or_else(|| "Syllabus-based exercise".to_string()),
            due_week: i + 1,
            marks: None,
        })
        .collect();

    // Today's tasks: one per schedule slot.
    let today_tasks: Vec<Task> = schedule
        .iter()
        .enumerate()
        .map(|(i, slot)| Task {
            id: format!("{}-task-{}", body.student_name, i + 1),
            subject: slot.subject.clone(),
            duration: slot.duration,
            done: false,
        })
        .collect();

    // One wholesale write; any previous plan for this name is discarded.
    state.store.put(
        &body.student_name,
        StudentRecord {
            profile: StudentProfile {
                parent: body.parent,
                study_hours: body.study_hours,
                study_slot: body.study_slot.clone(),
                subjects: body.subjects,
            },
            schedule: schedule.clone(),
            assignments: weekly_assignments.clone(),
            tasks: today_tasks.clone(),
        },
    );

    tracing::info!(
        "Generated schedule for {} ({} hr over {} subjects)",
        body.student_name,
        body.study_hours,
        schedule.len()
    );

    Ok(Json(GenerateScheduleResponse {
        schedule,
        weekly_assignments,
        today_tasks,
        study_slot: body.study_slot,
        time_per_subject,
    }))
}

// --- 2. Update tasks (POST /api/update-tasks) ---
pub async fn update_tasks_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UpdateTasksRequest>,
) -> Result<Json<UpdateTasksResponse>, AppError> {
    let mut record = state
        .store
        .get(&body.student_name)
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    // Full-replace semantics: ids absent from the list revert to not done.
    for task in &mut record.tasks {
        task.done = body.completed_task_ids.contains(&task.id);
    }

    let total = record.tasks.len();
    let done = record.tasks.iter().filter(|t| t.done).count();
    let tasks = record.tasks.clone();

    state.store.put(&body.student_name, record);

    Ok(Json(UpdateTasksResponse {
        total,
        done,
        incomplete: total - done,
        tasks,
    }))
}

// --- 3. Alert parent (POST /api/alert-parent) ---
pub async fn alert_parent_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<AlertParentRequest>,
) -> Result<Json<AlertParentResponse>, AppError> {
    let record = state
        .store
        .get(&body.student_name)
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    let incomplete_tasks: Vec<Task> = record
        .tasks
        .iter()
        .filter(|t| !t.done)
        .cloned()
        .collect();

    let payload = AlertPayload {
        to: record.profile.parent.email.clone(),
        parent_name: record.profile.parent.name.clone(),
        student_name: body.student_name,
        incomplete_tasks,
    };

    // Nothing is persisted here; the notifier decides what delivery means.
    let success = state.notifier.send(&payload);

    Ok(Json(AlertParentResponse {
        success,
        message: "Alert simulated. In real backend, email would be sent.".to_string(),
        alert_payload: payload,
    }))
}

// --- 4. Update marks (POST /api/update-marks) ---
pub async fn update_marks_handler(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UpdateMarksRequest>,
) -> Result<Json<UpdateMarksResponse>, AppError> {
    if body.student_name.is_empty() {
        return Err(AppError::InvalidData("Invalid data".to_string()));
    }

    let mut record = state
        .store
        .get(&body.student_name)
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    // Entries address assignments by position. Anything without a numeric
    // in-range index and a finite score is skipped, not reported.
    for entry in &body.marks {
        let index = entry.get("index").and_then(serde_json::Value::as_u64);
        let score = entry.get("score").and_then(serde_json::Value::as_f64);
        if let (Some(index), Some(score)) = (index, score) {
            if score.is_finite() {
                if let Some(assignment) = record.assignments.get_mut(index as usize) {
                    assignment.marks = Some(score);
                }
            }
        }
    }

    let assignments = record.assignments.clone();
    state.store.put(&body.student_name, record);

    Ok(Json(UpdateMarksResponse {
        success: true,
        assignments,
    }))
}

// --- 5. Parent overview (GET /api/parent-overview) ---
pub async fn parent_overview_handler(
    State(state): State<AppState>,
    Query(query): Query<OverviewQuery>,
) -> Result<Json<ParentOverviewResponse>, AppError> {
    let not_found = || {
        AppError::NotFound(
            "Student not found. Ask your child to generate a plan first.".to_string(),
        )
    };

    let student_name = query
        .student_name
        .filter(|name| !name.is_empty())
        .ok_or_else(not_found)?;
    let record = state.store.get(&student_name).ok_or_else(not_found)?;

    let total_tasks = record.tasks.len();
    let done_tasks = record.tasks.iter().filter(|t| t.done).count();
    let incomplete_tasks = total_tasks - done_tasks;
    let completion_percent = if total_tasks > 0 {
        ((done_tasks as f64 / total_tasks as f64) * 100.0).round() as i64
    } else {
        0
    };

    let planned_hours: f64 = record.schedule.iter().map(|s| s.duration.0).sum();

    let time_per_task = if planned_hours > 0.0 && total_tasks > 0 {
        planned_hours / total_tasks as f64
    } else {
        0.0
    };
    let completed_hours = round1(done_tasks as f64 * time_per_task);

    let graded: Vec<f64> = record.assignments.iter().filter_map(|a| a.marks).collect();
    let avg_marks = if graded.is_empty() {
        None
    } else {
        Some((graded.iter().sum::<f64>() / graded.len() as f64).round() as i64)
    };

    // Subject of the first incomplete task, else the first slot, else "-".
    let active_subject = record
        .tasks
        .iter()
        .find(|t| !t.done)
        .map(|t| t.subject.clone())
        .or_else(|| record.schedule.first().map(|s| s.subject.clone()))
        .unwrap_or_else(|| "-".to_string());

    let summary = OverviewSummary {
        completion_percent,
        planned_hours: round1(planned_hours),
        completed_hours,
        // Point-in-time snapshot; no alert history is kept.
        alerts_this_week: incomplete_tasks,
        avg_marks,
        active_subject,
    };

    Ok(Json(ParentOverviewResponse {
        student_name,
        parent: record.profile.parent,
        study_hours: record.profile.study_hours,
        schedule: record.schedule,
        assignments: record.assignments,
        tasks: record.tasks,
        summary,
    }))
}
