//! Domain models for weekly timetables and scheduled sessions.

pub mod assignment;
pub mod time;
pub mod timetable;

pub use assignment::{Assignment, Weekday};
pub use time::{ParseTimeError, TimeOfDay};
pub use timetable::{parse_timetable_json_str, Session, Timetable};
