//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the repository
//! boundary and the HTTP handlers. The conflict engine lives here as a pure
//! analysis pass; the processor orchestrates uploads around it.

pub mod conflicts;

pub mod job_tracker;

pub mod timetable_processor;

pub use conflicts::{check_conflicts, intervals_overlap, timetable_conflicts};
