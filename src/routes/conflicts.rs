use serde::{Deserialize, Serialize};

use crate::api::{SchoolId, TeacherId, TimetableId};
use crate::models::{TimeOfDay, Weekday};

/// Kind of detected timetable conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// Same teacher, same day, overlapping time ranges.
    TeacherDoubleBooking,
    /// Three or more back-to-back sessions for one teacher on one day.
    TeacherConsecutive,
    /// Six or more sessions for one teacher on one day.
    TeacherOverload,
    /// Same subject scheduled twice or more on one day of the timetable.
    SubjectClustering,
}

/// How serious a conflict is for the reviewing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl ConflictType {
    /// Severity is fixed per conflict kind.
    pub fn severity(&self) -> Severity {
        match self {
            ConflictType::TeacherDoubleBooking => Severity::Error,
            ConflictType::TeacherConsecutive => Severity::Warning,
            ConflictType::TeacherOverload => Severity::Warning,
            ConflictType::SubjectClustering => Severity::Info,
        }
    }
}

/// Structured payload describing the sessions behind a conflict.
///
/// Fields that do not apply to a conflict kind are omitted from the JSON
/// serialization entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    pub day: Weekday,
    /// Start times of the sessions involved, in detector order.
    pub periods: Vec<TimeOfDay>,
    /// The two colliding classes (double-booking only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
}

/// A detected timetable conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    #[serde(rename = "type")]
    pub kind: ConflictType,
    pub severity: Severity,
    pub message: String,
    pub details: ConflictDetails,
}

/// Conflict report for one reviewed timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub timetable_id: TimetableId,
    pub school_id: SchoolId,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub conflicts: Vec<Conflict>,
}

impl ConflictReport {
    /// Wrap an ordered conflict list with per-severity counts.
    pub fn new(
        timetable_id: TimetableId,
        school_id: SchoolId,
        conflicts: Vec<Conflict>,
    ) -> Self {
        let count = |severity: Severity| {
            conflicts
                .iter()
                .filter(|conflict| conflict.severity == severity)
                .count()
        };
        Self {
            timetable_id,
            school_id,
            error_count: count(Severity::Error),
            warning_count: count(Severity::Warning),
            info_count: count(Severity::Info),
            conflicts,
        }
    }
}

/// Conflict route function name constant
pub const GET_CONFLICT_REPORT: &str = "get_conflict_report";
