//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    response::sse::{Event, Sse},
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;

use super::dto::{
    ConflictQuery, CreateTimetableRequest, CreateTimetableResponse, HealthResponse,
    JobStatusResponse, TimetableInfoDto, TimetableListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{ConflictReport, SchoolId, TimetableId};
use crate::db::services as db_services;
use crate::models::Timetable;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository backend is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Timetable CRUD
// =============================================================================

/// GET /v1/timetables
///
/// List all timetables in the repository.
pub async fn list_timetables(
    State(state): State<AppState>,
) -> HandlerResult<TimetableListResponse> {
    let timetables = db_services::list_timetables(state.repository.as_ref()).await?;

    let timetable_dtos: Vec<TimetableInfoDto> =
        timetables.into_iter().map(Into::into).collect();
    let total = timetable_dtos.len();

    Ok(Json(TimetableListResponse {
        timetables: timetable_dtos,
        total,
    }))
}

/// POST /v1/timetables
///
/// Create a new timetable asynchronously. Returns a job ID for tracking
/// progress.
pub async fn create_timetable(
    State(state): State<AppState>,
    Json(request): Json<CreateTimetableRequest>,
) -> Result<(axum::http::StatusCode, Json<CreateTimetableResponse>), AppError> {
    // Convert JSON values to strings for the service layer
    let timetable_json_str = serde_json::to_string(&request.timetable_json)
        .map_err(|e| AppError::BadRequest(format!("Invalid timetable JSON: {}", e)))?;

    // Create a job for tracking progress
    let job_id = state.job_tracker.create_job();
    let response_job_id = job_id.clone();

    // Spawn background task to process the timetable
    let tracker = state.job_tracker.clone();
    let repo = state.repository.clone();
    let timetable_name = request.name.clone();
    let run_conflict_check = request.check_conflicts;

    tokio::spawn(async move {
        let _ = crate::services::timetable_processor::process_timetable_async(
            job_id,
            tracker,
            repo,
            timetable_name,
            timetable_json_str,
            run_conflict_check,
        )
        .await;
    });

    Ok((
        axum::http::StatusCode::ACCEPTED,
        Json(CreateTimetableResponse {
            job_id: response_job_id.clone(),
            message: format!(
                "Timetable upload started. Track progress at /v1/jobs/{}/logs",
                response_job_id
            ),
        }),
    ))
}

/// GET /v1/timetables/{timetable_id}
///
/// Fetch one timetable with its sessions.
pub async fn get_timetable(
    State(state): State<AppState>,
    Path(timetable_id): Path<i64>,
) -> HandlerResult<Timetable> {
    let timetable_id = TimetableId::new(timetable_id);
    let timetable = db_services::get_timetable(state.repository.as_ref(), timetable_id).await?;
    Ok(Json(timetable))
}

// =============================================================================
// Conflict Analysis
// =============================================================================

/// GET /v1/timetables/{timetable_id}/conflicts
///
/// Run the conflict analysis for a timetable against its school and return
/// the ordered conflict report. The `school_id` query parameter overrides
/// the tenant scope; by default the stored timetable's own school is used.
pub async fn get_conflict_report(
    State(state): State<AppState>,
    Path(timetable_id): Path<i64>,
    Query(query): Query<ConflictQuery>,
) -> HandlerResult<ConflictReport> {
    let timetable_id = TimetableId::new(timetable_id);

    let school_id = match query.school_id {
        Some(id) => SchoolId::new(id),
        None => {
            db_services::get_timetable(state.repository.as_ref(), timetable_id)
                .await?
                .school_id
        }
    };

    let conflicts = crate::services::conflicts::timetable_conflicts(
        state.repository.as_ref(),
        timetable_id,
        school_id,
    )
    .await?;

    Ok(Json(ConflictReport::new(timetable_id, school_id, conflicts)))
}

// =============================================================================
// Async Job Management
// =============================================================================

/// GET /v1/jobs/{job_id}
///
/// Get the current status and logs of a background job.
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> HandlerResult<JobStatusResponse> {
    let job = state
        .job_tracker
        .get_job(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", job_id)))?;

    Ok(Json(JobStatusResponse {
        job_id: job.job_id,
        status: format!("{:?}", job.status).to_lowercase(),
        logs: job.logs,
        result: job.result,
    }))
}

/// GET /v1/jobs/{job_id}/logs
///
/// Stream job logs via Server-Sent Events (SSE).
pub async fn stream_job_logs(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    // Verify job exists
    if state.job_tracker.get_job(&job_id).is_none() {
        return Err(AppError::NotFound(format!("Job {} not found", job_id)));
    }

    let tracker = state.job_tracker.clone();
    let stream = async_stream::stream! {
        let mut last_log_count = 0;
        loop {
            // Get current logs
            let logs = tracker.get_logs(&job_id);

            // Send new logs since last check
            for log in logs.iter().skip(last_log_count) {
                let event_data = serde_json::to_string(log).unwrap_or_default();
                yield Ok(Event::default().data(event_data));
            }
            last_log_count = logs.len();

            // Check if job is complete
            if let Some(job) = tracker.get_job(&job_id) {
                if job.status != crate::services::job_tracker::JobStatus::Running {
                    // Send final status event. Serde serialization keeps the
                    // status values lowercase ("completed", "failed").
                    let final_event = serde_json::json!({
                        "status": job.status,
                        "result": job.result,
                    });
                    yield Ok(Event::default()
                        .event("complete")
                        .data(serde_json::to_string(&final_event).unwrap_or_default()));
                    break;
                }
            } else {
                break;
            }

            // Wait before checking again
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    };

    Ok(Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(1))
            .text("keep-alive"),
    ))
}
