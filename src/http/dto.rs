//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The conflict report DTOs are re-exported from the routes module since
//! they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Conflicts
    Conflict, ConflictDetails, ConflictReport, ConflictType, Severity,
    // Landing
    TimetableInfo,
};

/// Request body for creating a new timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimetableRequest {
    /// Name for the timetable
    pub name: String,
    /// Timetable JSON data (sessions, class and tenant identifiers)
    pub timetable_json: serde_json::Value,
    /// Whether to run a conflict sweep after storing (default: true)
    #[serde(default = "default_true")]
    pub check_conflicts: bool,
}

fn default_true() -> bool {
    true
}

/// Response for timetable creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimetableResponse {
    /// Job ID for tracking the async processing
    pub job_id: String,
    /// Message about the operation
    pub message: String,
}

/// Job status response for async processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    /// Job ID
    pub job_id: String,
    /// Job status
    pub status: String,
    /// Log entries
    pub logs: Vec<crate::services::job_tracker::LogEntry>,
    /// Result if completed
    pub result: Option<serde_json::Value>,
}

/// Query parameters for the conflicts endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConflictQuery {
    /// School (tenant) scope for the school-wide fetch. Defaults to the
    /// stored timetable's own school.
    #[serde(default)]
    pub school_id: Option<i64>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository backend status
    pub database: String,
}

/// Timetable list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableListResponse {
    /// List of timetables
    pub timetables: Vec<TimetableInfoDto>,
    /// Total count
    pub total: usize,
}

/// Timetable info DTO for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableInfoDto {
    /// Timetable ID
    pub timetable_id: i64,
    /// School (tenant) ID
    pub school_id: i64,
    /// Timetable name
    pub timetable_name: String,
    /// Class name
    pub class_name: String,
}

impl From<TimetableInfo> for TimetableInfoDto {
    fn from(info: TimetableInfo) -> Self {
        Self {
            timetable_id: info.timetable_id.value(),
            school_id: info.school_id.value(),
            timetable_name: info.timetable_name,
            class_name: info.class_name,
        }
    }
}
