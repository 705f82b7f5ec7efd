//! Rows returned by repository write operations.

use serde::{Deserialize, Serialize};

use crate::api::TimetableId;

/// Metadata describing a stored timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableMetadata {
    pub timetable_id: TimetableId,
    pub timetable_name: String,
}
