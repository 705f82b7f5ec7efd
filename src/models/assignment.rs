use serde::{Deserialize, Serialize};

use crate::api::{ClassId, SchoolId, TeacherId, TimetableId};
use crate::models::TimeOfDay;

/// Teaching weekday. Weekend sessions are not modeled.
///
/// The derive order gives monday→friday ordering, which is also the
/// iteration order of day-keyed groupings in the conflict engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled teaching session, denormalized for analysis.
///
/// This is the flat record the repository returns for conflict checks: every
/// row names its owning timetable and tenant so the engine can tell reviewed
/// sessions from the rest of the school. Assignments are read-only inputs
/// here; they are owned and mutated by the timetable editing flows behind
/// the repository boundary.
///
/// Invariant (guaranteed upstream at parse time): `start_time < end_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub timetable_id: TimetableId,
    pub school_id: SchoolId,
    pub teacher_id: TeacherId,
    pub teacher_name: String,
    pub class_id: ClassId,
    pub class_name: String,
    /// Subject label, compared by exact string match.
    pub subject_name: String,
    pub day: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}
