//! Repository trait definitions for timetable data access.
//!
//! Two traits split the surface by concern: [`TimetableRepository`] owns the
//! timetable aggregate lifecycle, and [`AssignmentRepository`] is the
//! read-only fetch interface the conflict analysis consumes. Backends
//! implement both; consumers take `&dyn FullRepository`.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{SchoolId, TimetableId};
use crate::db::models::TimetableMetadata;
use crate::models::{Assignment, Timetable};
use crate::routes::landing::TimetableInfo;

/// Repository trait for timetable storage operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TimetableRepository: Send + Sync {
    /// Store a timetable, assigning an id if it has none.
    ///
    /// Storing a timetable whose checksum matches an already-stored one
    /// returns the existing row instead of duplicating it.
    ///
    /// # Returns
    /// * `Ok(TimetableMetadata)` - Id and name of the stored row
    /// * `Err(RepositoryError)` - If the operation fails
    async fn store_timetable(&self, timetable: &Timetable)
        -> RepositoryResult<TimetableMetadata>;

    /// List all stored timetables, ordered by id.
    async fn list_timetables(&self) -> RepositoryResult<Vec<TimetableInfo>>;

    /// Fetch one timetable by id.
    ///
    /// # Returns
    /// * `Ok(Timetable)` - The stored timetable
    /// * `Err(RepositoryError::NotFound)` - If no such timetable exists
    async fn get_timetable(&self, timetable_id: TimetableId) -> RepositoryResult<Timetable>;

    /// Delete a timetable by id.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of rows removed (0 or 1)
    async fn delete_timetable(&self, timetable_id: TimetableId) -> RepositoryResult<usize>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}

/// Repository trait for the read-only assignment fetches consumed by the
/// conflict analysis.
///
/// These two fetches are the analysis engine's entire view of storage: the
/// sessions of one timetable, and the sessions of a whole school (a teacher
/// may appear in several class timetables, so school-wide data is needed to
/// see cross-timetable clashes).
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Fetch the denormalized assignments of one timetable, in stored
    /// session order. An unknown timetable id yields an empty list; "no
    /// sessions" is a normal outcome, not an error.
    async fn fetch_assignments_by_timetable(
        &self,
        timetable_id: TimetableId,
    ) -> RepositoryResult<Vec<Assignment>>;

    /// Fetch the denormalized assignments of every timetable in a school,
    /// ordered by timetable id, then stored session order.
    async fn fetch_assignments_by_school(
        &self,
        school_id: SchoolId,
    ) -> RepositoryResult<Vec<Assignment>>;
}

/// Combined repository surface used by services and handlers.
pub trait FullRepository: TimetableRepository + AssignmentRepository {}

impl<T: TimetableRepository + AssignmentRepository> FullRepository for T {}
