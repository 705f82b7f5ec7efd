//! Async timetable processing service.
//!
//! Handles timetable upload tasks (parsing, validation, storage, optional
//! conflict sweep) in the background, emitting progress logs.

use std::sync::Arc;

use crate::api::TimetableId;
use crate::db::repository::FullRepository;
use crate::db::services as db_services;
use crate::models;
use crate::routes::conflicts::ConflictReport;
use crate::services::conflicts;
use crate::services::job_tracker::{JobTracker, LogLevel};

/// Process a timetable asynchronously: parse, validate, store, and
/// optionally run a conflict sweep against the rest of the school.
///
/// This function is designed to be spawned as a background task. It logs
/// progress to the job tracker so users can see what's happening via SSE.
///
/// # Arguments
/// * `job_id` - The job ID for tracking progress
/// * `tracker` - Job tracker for logging
/// * `repo` - Repository for storing the timetable
/// * `timetable_name` - Name for the timetable
/// * `timetable_json` - JSON string of the timetable
/// * `run_conflict_check` - Whether to run a conflict sweep after storing
///
/// # Returns
/// * Timetable ID on success, or error message on failure
pub async fn process_timetable_async(
    job_id: String,
    tracker: JobTracker,
    repo: Arc<dyn FullRepository>,
    timetable_name: String,
    timetable_json: String,
    run_conflict_check: bool,
) -> Result<TimetableId, String> {
    tracker.log(&job_id, LogLevel::Info, "Starting timetable processing...");

    // Step 1: Parse timetable JSON
    tracker.log(&job_id, LogLevel::Info, "Parsing timetable JSON...");
    let timetable = match tokio::task::spawn_blocking({
        let timetable_json = timetable_json.clone();
        let timetable_name = timetable_name.clone();
        move || {
            models::timetable::parse_timetable_json_str(&timetable_json).map(|mut t| {
                if t.name.is_empty() {
                    t.name = timetable_name;
                }
                t
            })
        }
    })
    .await
    {
        Ok(Ok(timetable)) => {
            tracker.log(
                &job_id,
                LogLevel::Success,
                format!("✓ Parsed timetable with {} sessions", timetable.sessions.len()),
            );
            timetable
        }
        Ok(Err(e)) => {
            let msg = format!("Failed to parse timetable: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
        Err(e) => {
            let msg = format!("Parse task panic: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };

    // Step 2: Store timetable
    tracker.log(&job_id, LogLevel::Info, "Storing timetable in repository...");
    let metadata = match db_services::store_timetable(repo.as_ref(), &timetable).await {
        Ok(metadata) => {
            tracker.log(
                &job_id,
                LogLevel::Success,
                format!("✓ Stored timetable (ID: {})", metadata.timetable_id.value()),
            );
            metadata
        }
        Err(e) => {
            let msg = format!("Failed to store timetable: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };

    // Step 3: Optional conflict sweep against the whole school
    if run_conflict_check {
        tracker.log(&job_id, LogLevel::Info, "Checking for conflicts...");
        match conflicts::timetable_conflicts(
            repo.as_ref(),
            metadata.timetable_id,
            timetable.school_id,
        )
        .await
        {
            Ok(found) => {
                let report =
                    ConflictReport::new(metadata.timetable_id, timetable.school_id, found);
                let level = if report.error_count > 0 {
                    LogLevel::Warning
                } else {
                    LogLevel::Success
                };
                tracker.log(
                    &job_id,
                    level,
                    format!(
                        "✓ Conflict sweep: {} errors, {} warnings, {} notices",
                        report.error_count, report.warning_count, report.info_count
                    ),
                );
            }
            Err(e) => {
                // The timetable is already stored; a failed sweep is logged
                // but does not fail the upload.
                tracker.log(
                    &job_id,
                    LogLevel::Warning,
                    format!("Conflict sweep failed: {}", e),
                );
            }
        }
    }

    // Mark job as complete
    tracker.log(
        &job_id,
        LogLevel::Success,
        format!(
            "✅ Timetable processing complete! ID: {}",
            metadata.timetable_id.value()
        ),
    );

    let result = serde_json::json!({
        "timetable_id": metadata.timetable_id.value(),
        "timetable_name": metadata.timetable_name,
    });
    tracker.complete_job(&job_id, Some(result));

    Ok(metadata.timetable_id)
}
