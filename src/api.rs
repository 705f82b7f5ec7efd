//! Public API surface for the Rust backend.
//!
//! This file consolidates the identifier newtypes and DTO re-exports for the
//! HTTP API. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::conflicts::Conflict;
pub use crate::routes::conflicts::ConflictDetails;
pub use crate::routes::conflicts::ConflictReport;
pub use crate::routes::conflicts::ConflictType;
pub use crate::routes::conflicts::Severity;
pub use crate::routes::landing::TimetableInfo;

use serde::{Deserialize, Serialize};

/// Timetable identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimetableId(pub i64);

/// School (tenant) identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SchoolId(pub i64);

/// Teacher identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TeacherId(pub i64);

/// Class/section identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ClassId(pub i64);

impl TimetableId {
    pub fn new(value: i64) -> Self {
        TimetableId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl SchoolId {
    pub fn new(value: i64) -> Self {
        SchoolId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TeacherId {
    pub fn new(value: i64) -> Self {
        TeacherId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ClassId {
    pub fn new(value: i64) -> Self {
        ClassId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TimetableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for SchoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TeacherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TimetableId> for i64 {
    fn from(id: TimetableId) -> Self {
        id.0
    }
}

pub use crate::models::{Assignment, Session, TimeOfDay, Timetable, Weekday};
