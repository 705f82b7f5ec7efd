use serde::{Deserialize, Serialize};

use crate::api::{SchoolId, TimetableId};

/// Timetable information for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableInfo {
    pub timetable_id: TimetableId,
    pub school_id: SchoolId,
    pub timetable_name: String,
    pub class_name: String,
}

pub const LIST_TIMETABLES: &str = "list_timetables";
pub const POST_TIMETABLE: &str = "store_timetable";
