//! High-level service functions over the repository boundary.
//!
//! These functions work with any repository implementation and carry the
//! cross-cutting concerns (input checks, logging) that individual backends
//! should not duplicate. Application code should call these rather than the
//! repository traits directly.

use crate::api::{SchoolId, TimetableId};
use crate::db::models::TimetableMetadata;
use crate::db::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::models::{Assignment, Timetable};
use crate::routes::landing::TimetableInfo;

/// Store a timetable after validating its shape.
pub async fn store_timetable(
    repo: &dyn FullRepository,
    timetable: &Timetable,
) -> RepositoryResult<TimetableMetadata> {
    if timetable.name.trim().is_empty() {
        return Err(RepositoryError::validation(
            "Timetable name must not be empty",
        ));
    }

    log::debug!(
        "Storing timetable '{}' ({} sessions)",
        timetable.name,
        timetable.sessions.len()
    );
    let metadata = repo.store_timetable(timetable).await?;
    log::info!(
        "Stored timetable '{}' (ID: {})",
        metadata.timetable_name,
        metadata.timetable_id
    );
    Ok(metadata)
}

/// List all stored timetables.
pub async fn list_timetables(repo: &dyn FullRepository) -> RepositoryResult<Vec<TimetableInfo>> {
    repo.list_timetables().await
}

/// Fetch one timetable by id.
pub async fn get_timetable(
    repo: &dyn FullRepository,
    timetable_id: TimetableId,
) -> RepositoryResult<Timetable> {
    repo.get_timetable(timetable_id).await
}

/// Delete a timetable by id.
pub async fn delete_timetable(
    repo: &dyn FullRepository,
    timetable_id: TimetableId,
) -> RepositoryResult<usize> {
    let removed = repo.delete_timetable(timetable_id).await?;
    if removed > 0 {
        log::info!("Deleted timetable {}", timetable_id);
    }
    Ok(removed)
}

/// Fetch the denormalized assignments of one timetable.
pub async fn get_assignments_for_timetable(
    repo: &dyn FullRepository,
    timetable_id: TimetableId,
) -> RepositoryResult<Vec<Assignment>> {
    repo.fetch_assignments_by_timetable(timetable_id).await
}

/// Fetch the denormalized assignments of every timetable in a school.
pub async fn get_assignments_for_school(
    repo: &dyn FullRepository,
    school_id: SchoolId,
) -> RepositoryResult<Vec<Assignment>> {
    repo.fetch_assignments_by_school(school_id).await
}

/// Check that the backend is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
