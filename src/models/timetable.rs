// ============================================================================
// JSON Parsing Functions
// ============================================================================
//
// File-based and string-based parsing of weekly class timetables, with the
// upstream validation the analysis layer relies on: well-formed "HH:MM"
// times, a valid weekday, and start < end for every session.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::{ClassId, SchoolId, TeacherId, TimetableId};
use crate::models::{Assignment, TimeOfDay, Weekday};

/// One session row of a weekly class timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub teacher_id: TeacherId,
    pub teacher_name: String,
    pub subject_name: String,
    pub day: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// A named weekly schedule belonging to one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    pub id: Option<TimetableId>,
    pub school_id: SchoolId,
    pub name: String,
    pub class_id: ClassId,
    pub class_name: String,
    pub checksum: String,
    pub sessions: Vec<Session>,
}

impl Timetable {
    /// Denormalize the session rows into flat analysis records.
    ///
    /// `timetable_id` is passed explicitly because unsaved timetables have
    /// no id yet; the repository supplies the stored id on fetch. Row order
    /// follows session order.
    pub fn assignments_for(&self, timetable_id: TimetableId) -> Vec<Assignment> {
        self.sessions
            .iter()
            .map(|session| Assignment {
                timetable_id,
                school_id: self.school_id,
                teacher_id: session.teacher_id,
                teacher_name: session.teacher_name.clone(),
                class_id: self.class_id,
                class_name: self.class_name.clone(),
                subject_name: session.subject_name.clone(),
                day: session.day,
                start_time: session.start_time,
                end_time: session.end_time,
            })
            .collect()
    }
}

#[derive(serde::Deserialize)]
struct TimetableInput {
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub checksum: String,
    pub school_id: i64,
    pub class_id: i64,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

fn validate_input_timetable(timetable_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(timetable_json).context("Invalid timetable JSON")?;
    let has_sessions = value
        .as_object()
        .and_then(|obj| obj.get("sessions"))
        .is_some();
    if !has_sessions {
        anyhow::bail!("Missing required 'sessions' field");
    }
    Ok(())
}

fn validate_session(index: usize, session: &Session) -> Result<()> {
    if session.teacher_name.trim().is_empty() {
        anyhow::bail!("Session {}: teacher name must not be empty", index);
    }
    if session.subject_name.trim().is_empty() {
        anyhow::bail!("Session {}: subject name must not be empty", index);
    }
    if session.start_time >= session.end_time {
        anyhow::bail!(
            "Session {}: start time {} is not before end time {}",
            index,
            session.start_time,
            session.end_time
        );
    }
    Ok(())
}

/// Parse a timetable from a JSON string.
///
/// This function deserializes a timetable JSON string using Serde, validates
/// every session (malformed times and inverted ranges are rejected here, not
/// tolerated downstream), and computes a content checksum when the input
/// does not carry one.
///
/// # Arguments
///
/// * `timetable_json` - Timetable JSON (snake_case format matching schema)
///
/// # Returns
///
/// A fully populated `Timetable` with validated sessions and a checksum.
pub fn parse_timetable_json_str(timetable_json: &str) -> Result<Timetable> {
    validate_input_timetable(timetable_json)?;

    let input: TimetableInput = serde_json::from_str(timetable_json)
        .context("Failed to deserialize timetable JSON using Serde")?;

    for (index, session) in input.sessions.iter().enumerate() {
        validate_session(index, session)?;
    }

    let mut timetable = Timetable {
        id: input.id.map(TimetableId::new),
        school_id: SchoolId::new(input.school_id),
        name: input.name,
        class_id: ClassId::new(input.class_id),
        class_name: input.class_name,
        checksum: input.checksum,
        sessions: input.sessions,
    };

    // Compute checksum if not provided
    if timetable.checksum.is_empty() {
        timetable.checksum = crate::db::calculate_checksum(timetable_json);
    }

    Ok(timetable)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_TIMETABLE: &str = r#"{
        "name": "5A weekly",
        "school_id": 1,
        "class_id": 10,
        "class_name": "5A",
        "sessions": [
            {
                "teacher_id": 100,
                "teacher_name": "J. Smith",
                "subject_name": "Mathematics",
                "day": "monday",
                "start_time": "08:00",
                "end_time": "09:00"
            }
        ]
    }"#;

    #[test]
    fn test_parse_minimal_timetable() {
        let result = parse_timetable_json_str(MINIMAL_TIMETABLE);
        assert!(
            result.is_ok(),
            "Should parse minimal timetable: {:?}",
            result.err()
        );

        let timetable = result.unwrap();
        assert_eq!(timetable.name, "5A weekly");
        assert_eq!(timetable.sessions.len(), 1);
        assert_eq!(timetable.sessions[0].teacher_name, "J. Smith");
        assert_eq!(timetable.sessions[0].start_time.to_string(), "08:00");
        assert!(!timetable.checksum.is_empty(), "Checksum should be computed");
    }

    #[test]
    fn test_parse_preserves_provided_checksum() {
        let json = MINIMAL_TIMETABLE.replacen(
            "\"name\"",
            "\"checksum\": \"abc123\", \"name\"",
            1,
        );
        let timetable = parse_timetable_json_str(&json).unwrap();
        assert_eq!(timetable.checksum, "abc123");
    }

    #[test]
    fn test_missing_sessions_key() {
        let json = r#"{"name": "empty", "school_id": 1, "class_id": 1}"#;
        let result = parse_timetable_json_str(json);
        assert!(result.is_err(), "Should fail without sessions key");
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_timetable_json_str("not valid json {");
        assert!(result.is_err(), "Should fail with invalid JSON");
    }

    #[test]
    fn test_malformed_time_rejected() {
        let json = MINIMAL_TIMETABLE.replace("\"08:00\"", "\"8am\"");
        let result = parse_timetable_json_str(&json);
        assert!(result.is_err(), "Malformed time must be rejected, not skipped");
    }

    #[test]
    fn test_inverted_range_rejected() {
        let json = MINIMAL_TIMETABLE
            .replace("\"08:00\"", "\"10:00\"")
            .replace("\"09:00\"", "\"09:30\"");
        let result = parse_timetable_json_str(&json);
        assert!(result.is_err(), "start >= end must be rejected");
    }

    #[test]
    fn test_weekend_day_rejected() {
        let json = MINIMAL_TIMETABLE.replace("\"monday\"", "\"saturday\"");
        assert!(parse_timetable_json_str(&json).is_err());
    }

    #[test]
    fn test_assignments_for_denormalizes() {
        let timetable = parse_timetable_json_str(MINIMAL_TIMETABLE).unwrap();
        let assignments = timetable.assignments_for(TimetableId::new(7));

        assert_eq!(assignments.len(), 1);
        let assignment = &assignments[0];
        assert_eq!(assignment.timetable_id, TimetableId::new(7));
        assert_eq!(assignment.school_id, SchoolId::new(1));
        assert_eq!(assignment.class_name, "5A");
        assert_eq!(assignment.subject_name, "Mathematics");
    }
}
