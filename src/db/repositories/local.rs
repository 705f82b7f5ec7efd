//! In-memory repository implementation for unit testing and local
//! development.
//!
//! Data lives for the lifetime of the instance; every test gets an isolated
//! store by constructing its own repository.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{SchoolId, TimetableId};
use crate::db::models::TimetableMetadata;
use crate::db::repository::{
    AssignmentRepository, ErrorContext, RepositoryError, RepositoryResult, TimetableRepository,
};
use crate::models::{Assignment, Timetable};
use crate::routes::landing::TimetableInfo;

/// In-memory repository backend.
pub struct LocalRepository {
    store: RwLock<LocalStore>,
}

struct LocalStore {
    next_id: i64,
    timetables: HashMap<i64, Timetable>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(LocalStore {
                next_id: 1,
                timetables: HashMap::new(),
            }),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimetableRepository for LocalRepository {
    async fn store_timetable(
        &self,
        timetable: &Timetable,
    ) -> RepositoryResult<TimetableMetadata> {
        let mut store = self.store.write();

        // Content dedup: re-uploading identical JSON returns the stored row.
        if !timetable.checksum.is_empty() {
            if let Some((id, existing)) = store
                .timetables
                .iter()
                .find(|(_, t)| t.checksum == timetable.checksum)
            {
                return Ok(TimetableMetadata {
                    timetable_id: TimetableId::new(*id),
                    timetable_name: existing.name.clone(),
                });
            }
        }

        let id = match timetable.id {
            Some(id) => id.value(),
            None => store.next_id,
        };
        store.next_id = store.next_id.max(id + 1);

        let mut stored = timetable.clone();
        stored.id = Some(TimetableId::new(id));
        store.timetables.insert(id, stored);

        Ok(TimetableMetadata {
            timetable_id: TimetableId::new(id),
            timetable_name: timetable.name.clone(),
        })
    }

    async fn list_timetables(&self) -> RepositoryResult<Vec<TimetableInfo>> {
        let store = self.store.read();
        let mut ids: Vec<i64> = store.timetables.keys().copied().collect();
        ids.sort_unstable();

        Ok(ids
            .into_iter()
            .map(|id| {
                let timetable = &store.timetables[&id];
                TimetableInfo {
                    timetable_id: TimetableId::new(id),
                    school_id: timetable.school_id,
                    timetable_name: timetable.name.clone(),
                    class_name: timetable.class_name.clone(),
                }
            })
            .collect())
    }

    async fn get_timetable(&self, timetable_id: TimetableId) -> RepositoryResult<Timetable> {
        self.store
            .read()
            .timetables
            .get(&timetable_id.value())
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Timetable {} not found", timetable_id),
                    ErrorContext::new("get_timetable")
                        .with_entity("timetable")
                        .with_entity_id(timetable_id),
                )
            })
    }

    async fn delete_timetable(&self, timetable_id: TimetableId) -> RepositoryResult<usize> {
        let removed = self
            .store
            .write()
            .timetables
            .remove(&timetable_id.value());
        Ok(usize::from(removed.is_some()))
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl AssignmentRepository for LocalRepository {
    async fn fetch_assignments_by_timetable(
        &self,
        timetable_id: TimetableId,
    ) -> RepositoryResult<Vec<Assignment>> {
        let store = self.store.read();
        Ok(store
            .timetables
            .get(&timetable_id.value())
            .map(|t| t.assignments_for(timetable_id))
            .unwrap_or_default())
    }

    async fn fetch_assignments_by_school(
        &self,
        school_id: SchoolId,
    ) -> RepositoryResult<Vec<Assignment>> {
        let store = self.store.read();
        let mut ids: Vec<i64> = store
            .timetables
            .iter()
            .filter(|(_, t)| t.school_id == school_id)
            .map(|(id, _)| *id)
            .collect();
        // Timetable id order keeps school-wide fetches reproducible.
        ids.sort_unstable();

        Ok(ids
            .into_iter()
            .flat_map(|id| store.timetables[&id].assignments_for(TimetableId::new(id)))
            .collect())
    }
}
