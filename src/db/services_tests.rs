#[cfg(test)]
mod tests {
    use crate::api::{ClassId, SchoolId, TeacherId, TimetableId};
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::RepositoryError;
    use crate::db::services::{
        delete_timetable, get_assignments_for_school, get_assignments_for_timetable,
        get_timetable, health_check, list_timetables, store_timetable,
    };
    use crate::models::{Session, Timetable, Weekday};

    fn session(teacher: i64, subject: &str, day: Weekday, start: &str, end: &str) -> Session {
        Session {
            teacher_id: TeacherId::new(teacher),
            teacher_name: format!("Teacher {}", teacher),
            subject_name: subject.to_string(),
            day,
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
        }
    }

    fn timetable(name: &str, sessions: Vec<Session>) -> Timetable {
        Timetable {
            id: None,
            school_id: SchoolId::new(1),
            name: name.to_string(),
            class_id: ClassId::new(10),
            class_name: "5A".to_string(),
            checksum: format!("checksum_{}", name),
            sessions,
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = LocalRepository::new();
        assert!(health_check(&repo).await.unwrap());
    }

    #[tokio::test]
    async fn test_store_rejects_empty_name() {
        let repo = LocalRepository::new();
        let result = store_timetable(&repo, &timetable("  ", vec![])).await;
        assert!(matches!(
            result,
            Err(RepositoryError::ValidationError { .. })
        ));
    }

    #[tokio::test]
    async fn test_store_and_get_roundtrip() {
        let repo = LocalRepository::new();
        let stored = timetable(
            "5A weekly",
            vec![session(100, "Mathematics", Weekday::Monday, "08:00", "09:00")],
        );
        let metadata = store_timetable(&repo, &stored).await.unwrap();

        let fetched = get_timetable(&repo, metadata.timetable_id).await.unwrap();
        assert_eq!(fetched.name, "5A weekly");
        assert_eq!(fetched.id, Some(metadata.timetable_id));
        assert_eq!(fetched.sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_list_timetables() {
        let repo = LocalRepository::new();
        store_timetable(&repo, &timetable("first", vec![])).await.unwrap();
        store_timetable(&repo, &timetable("second", vec![])).await.unwrap();

        let infos = list_timetables(&repo).await.unwrap();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].timetable_name, "first");
        assert_eq!(infos[1].timetable_name, "second");
    }

    #[tokio::test]
    async fn test_assignment_fetches() {
        let repo = LocalRepository::new();
        let metadata = store_timetable(
            &repo,
            &timetable(
                "5A weekly",
                vec![
                    session(100, "Mathematics", Weekday::Monday, "08:00", "09:00"),
                    session(101, "English", Weekday::Tuesday, "10:00", "11:00"),
                ],
            ),
        )
        .await
        .unwrap();

        let scoped = get_assignments_for_timetable(&repo, metadata.timetable_id)
            .await
            .unwrap();
        assert_eq!(scoped.len(), 2);
        assert!(scoped.iter().all(|a| a.timetable_id == metadata.timetable_id));

        let school_wide = get_assignments_for_school(&repo, SchoolId::new(1))
            .await
            .unwrap();
        assert_eq!(school_wide.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_then_fetch_is_empty() {
        let repo = LocalRepository::new();
        let metadata = store_timetable(
            &repo,
            &timetable(
                "5A weekly",
                vec![session(100, "Mathematics", Weekday::Monday, "08:00", "09:00")],
            ),
        )
        .await
        .unwrap();

        assert_eq!(delete_timetable(&repo, metadata.timetable_id).await.unwrap(), 1);
        let scoped = get_assignments_for_timetable(&repo, metadata.timetable_id)
            .await
            .unwrap();
        assert!(scoped.is_empty());
        assert!(get_timetable(&repo, TimetableId::new(metadata.timetable_id.value()))
            .await
            .is_err());
    }
}
