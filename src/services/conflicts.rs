//! Timetable conflict-detection engine.
//!
//! A read-only analysis pass over weekly schedule assignments. Given the
//! assignments of one timetable under review and the assignments of the
//! whole school, it reports teacher double-bookings, long back-to-back
//! teaching runs, daily overload, and same-day subject repetition.
//!
//! The engine is a pure function of its two input snapshots: no I/O, no
//! shared state, one pass per invocation. School-wide data is consulted
//! because a teacher may appear in several class timetables, but every
//! reported conflict involves at least one session of the reviewed
//! timetable.

use std::collections::BTreeMap;

use crate::api::{SchoolId, TeacherId, TimetableId};
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::{Assignment, TimeOfDay, Weekday};
use crate::routes::conflicts::{Conflict, ConflictDetails, ConflictType};

/// Back-to-back session count at which a consecutive-load warning starts.
pub(crate) const CONSECUTIVE_RUN_THRESHOLD: usize = 3;

/// Session count per day at which a teacher-day is flagged as overloaded.
pub(crate) const DAILY_SESSION_LIMIT: usize = 6;

/// Same-day occurrences of one subject at which clustering is flagged.
pub(crate) const SUBJECT_REPEAT_THRESHOLD: usize = 2;

/// Half-open interval overlap test.
///
/// Two sessions that share only a boundary (one ends at 09:00, the next
/// starts at 09:00) do not overlap.
pub fn intervals_overlap(s1: TimeOfDay, e1: TimeOfDay, s2: TimeOfDay, e2: TimeOfDay) -> bool {
    s1 < e2 && s2 < e1
}

/// Assignments of one school grouped by teacher, then weekday, each leaf
/// sorted ascending by start time. BTreeMaps keep iteration deterministic,
/// which makes repeated analysis of unchanged input byte-identical.
type TeacherDayGroups<'a> = BTreeMap<TeacherId, BTreeMap<Weekday, Vec<&'a Assignment>>>;

/// Timetable-scoped assignments grouped by weekday, then subject label,
/// leaves kept in original collection order.
type DaySubjectGroups<'a> = BTreeMap<Weekday, BTreeMap<&'a str, Vec<&'a Assignment>>>;

/// Group school-wide assignments by (teacher, weekday).
///
/// Each leaf is sorted by start time with a stable sort, so equal start
/// times keep their input order. Every detector over teacher-days relies on
/// this ordering; none re-sorts.
pub(crate) fn group_by_teacher_day(assignments: &[Assignment]) -> TeacherDayGroups<'_> {
    let mut groups: TeacherDayGroups = BTreeMap::new();
    for assignment in assignments {
        groups
            .entry(assignment.teacher_id)
            .or_default()
            .entry(assignment.day)
            .or_default()
            .push(assignment);
    }
    for days in groups.values_mut() {
        for sessions in days.values_mut() {
            sessions.sort_by_key(|assignment| assignment.start_time);
        }
    }
    groups
}

/// Group the reviewed timetable's assignments by (weekday, subject).
///
/// Leaves are left in collection order: clustering reports list periods as
/// they appear in the timetable, not sorted.
pub(crate) fn group_by_day_subject(assignments: &[Assignment]) -> DaySubjectGroups<'_> {
    let mut groups: DaySubjectGroups = BTreeMap::new();
    for assignment in assignments {
        groups
            .entry(assignment.day)
            .or_default()
            .entry(assignment.subject_name.as_str())
            .or_default()
            .push(assignment);
    }
    groups
}

fn in_reviewed(assignment: &Assignment, reviewed: TimetableId) -> bool {
    assignment.timetable_id == reviewed
}

/// Find overlapping session pairs for the same teacher on the same day.
///
/// Every overlapping pair with at least one member in the reviewed
/// timetable yields its own record; a session overlapping three others
/// produces three distinct conflicts. The pairwise scan is O(n²) per
/// teacher-day, which is fine for the session counts a single teacher can
/// physically have in one day; a sweep over sorted starts is the upgrade
/// path if that assumption ever breaks.
fn detect_double_bookings(reviewed: TimetableId, groups: &TeacherDayGroups) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for days in groups.values() {
        for (day, sessions) in days {
            for i in 0..sessions.len() {
                for j in (i + 1)..sessions.len() {
                    let first = sessions[i];
                    let second = sessions[j];

                    if !intervals_overlap(
                        first.start_time,
                        first.end_time,
                        second.start_time,
                        second.end_time,
                    ) {
                        continue;
                    }
                    if !in_reviewed(first, reviewed) && !in_reviewed(second, reviewed) {
                        continue;
                    }

                    conflicts.push(Conflict {
                        kind: ConflictType::TeacherDoubleBooking,
                        severity: ConflictType::TeacherDoubleBooking.severity(),
                        message: format!(
                            "{} is double-booked on {}: {} at {} overlaps {} at {}",
                            first.teacher_name,
                            day,
                            first.class_name,
                            first.start_time,
                            second.class_name,
                            second.start_time
                        ),
                        details: ConflictDetails {
                            teacher_id: Some(first.teacher_id),
                            teacher_name: Some(first.teacher_name.clone()),
                            day: *day,
                            periods: vec![first.start_time, second.start_time],
                            class_names: Some(vec![
                                first.class_name.clone(),
                                second.class_name.clone(),
                            ]),
                            subject_name: None,
                        },
                    });
                }
            }
        }
    }

    conflicts
}

/// Find runs of three or more back-to-back sessions per teacher-day.
///
/// A session continues a run when its start equals the previous session's
/// end exactly. A warning is emitted at every run length from the threshold
/// upward, so a run of five yields warnings at lengths 3, 4 and 5; the
/// repetition is intentional and callers must not collapse it.
fn detect_consecutive_load(reviewed: TimetableId, groups: &TeacherDayGroups) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for days in groups.values() {
        for (day, sessions) in days {
            let mut run_length = 1usize;
            for i in 1..sessions.len() {
                if sessions[i].start_time == sessions[i - 1].end_time {
                    run_length += 1;
                } else {
                    run_length = 1;
                }

                if run_length < CONSECUTIVE_RUN_THRESHOLD {
                    continue;
                }

                // The current run is the last `run_length` sorted entries.
                let run = &sessions[i + 1 - run_length..=i];
                if !run.iter().any(|a| in_reviewed(a, reviewed)) {
                    continue;
                }

                let teacher = run[0];
                conflicts.push(Conflict {
                    kind: ConflictType::TeacherConsecutive,
                    severity: ConflictType::TeacherConsecutive.severity(),
                    message: format!(
                        "{} has {} back-to-back sessions on {}",
                        teacher.teacher_name, run_length, day
                    ),
                    details: ConflictDetails {
                        teacher_id: Some(teacher.teacher_id),
                        teacher_name: Some(teacher.teacher_name.clone()),
                        day: *day,
                        periods: run.iter().map(|a| a.start_time).collect(),
                        class_names: None,
                        subject_name: None,
                    },
                });
            }
        }
    }

    conflicts
}

/// Flag teacher-days with six or more sessions.
fn detect_daily_overload(reviewed: TimetableId, groups: &TeacherDayGroups) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for days in groups.values() {
        for (day, sessions) in days {
            if sessions.len() < DAILY_SESSION_LIMIT {
                continue;
            }
            if !sessions.iter().any(|a| in_reviewed(a, reviewed)) {
                continue;
            }

            let teacher = sessions[0];
            conflicts.push(Conflict {
                kind: ConflictType::TeacherOverload,
                severity: ConflictType::TeacherOverload.severity(),
                message: format!(
                    "{} has {} sessions on {}",
                    teacher.teacher_name,
                    sessions.len(),
                    day
                ),
                details: ConflictDetails {
                    teacher_id: Some(teacher.teacher_id),
                    teacher_name: Some(teacher.teacher_name.clone()),
                    day: *day,
                    periods: sessions.iter().map(|a| a.start_time).collect(),
                    class_names: None,
                    subject_name: None,
                },
            });
        }
    }

    conflicts
}

/// Flag subjects appearing twice or more on one day of the reviewed
/// timetable. Only timetable-scoped sessions count; the rest of the school
/// never contributes here.
fn detect_subject_clustering(groups: &DaySubjectGroups) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (day, subjects) in groups {
        for (subject, sessions) in subjects {
            if sessions.len() < SUBJECT_REPEAT_THRESHOLD {
                continue;
            }

            conflicts.push(Conflict {
                kind: ConflictType::SubjectClustering,
                severity: ConflictType::SubjectClustering.severity(),
                message: format!(
                    "{} is scheduled {} times on {}",
                    subject,
                    sessions.len(),
                    day
                ),
                details: ConflictDetails {
                    teacher_id: None,
                    teacher_name: None,
                    day: *day,
                    periods: sessions.iter().map(|a| a.start_time).collect(),
                    class_names: None,
                    subject_name: Some((*subject).to_string()),
                },
            });
        }
    }

    conflicts
}

/// Run every detector and return one ordered conflict list.
///
/// Detector order is fixed: double-booking, consecutive load, daily
/// overload, subject clustering. Within each detector, iteration follows
/// the grouping order (teacher→day, or day→subject). The order is stable
/// across calls with unchanged input; callers should read no priority into
/// it beyond severity.
///
/// An empty reviewed set returns an empty list without running any
/// detector: a timetable with no sessions has nothing to conflict.
pub fn check_conflicts(
    reviewed: TimetableId,
    timetable_assignments: &[Assignment],
    school_assignments: &[Assignment],
) -> Vec<Conflict> {
    if timetable_assignments.is_empty() {
        return Vec::new();
    }

    // Groupings are built once and shared by the detectors.
    let teacher_days = group_by_teacher_day(school_assignments);
    let day_subjects = group_by_day_subject(timetable_assignments);

    let mut conflicts = detect_double_bookings(reviewed, &teacher_days);
    conflicts.extend(detect_consecutive_load(reviewed, &teacher_days));
    conflicts.extend(detect_daily_overload(reviewed, &teacher_days));
    conflicts.extend(detect_subject_clustering(&day_subjects));
    conflicts
}

/// Check a timetable for conflicts, fetching the inputs from the repository.
///
/// The two fetches are the only suspension points; everything after them is
/// the synchronous [`check_conflicts`] pass. The school-wide fetch is
/// skipped entirely when the reviewed timetable has no sessions.
pub async fn timetable_conflicts(
    repo: &dyn FullRepository,
    timetable_id: TimetableId,
    school_id: SchoolId,
) -> RepositoryResult<Vec<Conflict>> {
    let reviewed = repo.fetch_assignments_by_timetable(timetable_id).await?;
    if reviewed.is_empty() {
        return Ok(Vec::new());
    }

    let school_wide = repo.fetch_assignments_by_school(school_id).await?;
    Ok(check_conflicts(timetable_id, &reviewed, &school_wide))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ClassId, SchoolId, TeacherId, TimetableId};
    use crate::routes::conflicts::Severity;

    fn assignment(
        timetable: i64,
        teacher: i64,
        class_name: &str,
        subject: &str,
        day: Weekday,
        start: &str,
        end: &str,
    ) -> Assignment {
        Assignment {
            timetable_id: TimetableId::new(timetable),
            school_id: SchoolId::new(1),
            teacher_id: TeacherId::new(teacher),
            teacher_name: format!("Teacher {}", teacher),
            class_id: ClassId::new(timetable * 10),
            class_name: class_name.to_string(),
            subject_name: subject.to_string(),
            day,
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
        }
    }

    fn starts(conflict: &Conflict) -> Vec<String> {
        conflict
            .details
            .periods
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_overlap_half_open() {
        let t = |s: &str| s.parse::<TimeOfDay>().unwrap();
        assert!(intervals_overlap(t("08:00"), t("09:00"), t("08:30"), t("09:30")));
        assert!(intervals_overlap(t("08:00"), t("10:00"), t("08:30"), t("09:00")));
        // Boundary touch is not overlap.
        assert!(!intervals_overlap(t("08:00"), t("09:00"), t("09:00"), t("10:00")));
        assert!(!intervals_overlap(t("08:00"), t("09:00"), t("10:00"), t("11:00")));
    }

    #[test]
    fn test_overlap_symmetry() {
        let t = |s: &str| s.parse::<TimeOfDay>().unwrap();
        let cases = [
            ("08:00", "09:00", "08:30", "09:30"),
            ("08:00", "09:00", "09:00", "10:00"),
            ("08:00", "12:00", "09:00", "10:00"),
            ("08:00", "08:30", "11:00", "11:45"),
        ];
        for (s1, e1, s2, e2) in cases {
            assert_eq!(
                intervals_overlap(t(s1), t(e1), t(s2), t(e2)),
                intervals_overlap(t(s2), t(e2), t(s1), t(e1)),
                "symmetry failed for {} {} / {} {}",
                s1,
                e1,
                s2,
                e2
            );
        }
    }

    #[test]
    fn test_grouping_sorts_by_start_time() {
        let assignments = vec![
            assignment(1, 100, "5A", "Maths", Weekday::Monday, "10:00", "11:00"),
            assignment(1, 100, "5A", "English", Weekday::Monday, "08:00", "09:00"),
            assignment(1, 100, "5A", "Arts", Weekday::Tuesday, "09:00", "10:00"),
        ];
        let groups = group_by_teacher_day(&assignments);
        let monday = &groups[&TeacherId::new(100)][&Weekday::Monday];
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].subject_name, "English");
        assert_eq!(monday[1].subject_name, "Maths");
    }

    #[test]
    fn test_day_subject_grouping_keeps_collection_order() {
        let assignments = vec![
            assignment(1, 100, "5A", "Maths", Weekday::Monday, "13:00", "14:00"),
            assignment(1, 101, "5A", "Maths", Weekday::Monday, "08:00", "09:00"),
        ];
        let groups = group_by_day_subject(&assignments);
        let maths = &groups[&Weekday::Monday]["Maths"];
        // Not sorted by start: collection order is preserved.
        assert_eq!(maths[0].start_time.to_string(), "13:00");
        assert_eq!(maths[1].start_time.to_string(), "08:00");
    }

    #[test]
    fn test_double_booking_detected_across_timetables() {
        let reviewed = TimetableId::new(1);
        let school = vec![
            assignment(1, 100, "5A", "Maths", Weekday::Monday, "08:00", "09:00"),
            assignment(2, 100, "6B", "Maths", Weekday::Monday, "08:30", "09:30"),
        ];
        let timetable: Vec<Assignment> = school
            .iter()
            .filter(|a| a.timetable_id == reviewed)
            .cloned()
            .collect();

        let conflicts = check_conflicts(reviewed, &timetable, &school);
        assert_eq!(conflicts.len(), 1);
        let conflict = &conflicts[0];
        assert_eq!(conflict.kind, ConflictType::TeacherDoubleBooking);
        assert_eq!(conflict.severity, Severity::Error);
        assert_eq!(starts(conflict), vec!["08:00", "08:30"]);
        assert_eq!(
            conflict.details.class_names,
            Some(vec!["5A".to_string(), "6B".to_string()])
        );
    }

    #[test]
    fn test_double_booking_ignored_between_other_timetables() {
        // Both colliding sessions live outside the reviewed timetable: the
        // clash is real but belongs to someone else's review.
        let reviewed = TimetableId::new(1);
        let timetable = vec![assignment(
            1, 999, "5A", "Arts", Weekday::Friday, "08:00", "09:00",
        )];
        let school = vec![
            timetable[0].clone(),
            assignment(2, 100, "6B", "Maths", Weekday::Monday, "08:00", "09:00"),
            assignment(3, 100, "7C", "Maths", Weekday::Monday, "08:30", "09:30"),
        ];

        let conflicts = check_conflicts(reviewed, &timetable, &school);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_triple_booking_yields_three_pairwise_conflicts() {
        let reviewed = TimetableId::new(1);
        let school = vec![
            assignment(1, 100, "5A", "Maths", Weekday::Monday, "08:00", "09:00"),
            assignment(1, 100, "5A", "English", Weekday::Monday, "08:00", "09:00"),
            assignment(1, 100, "5A", "Arts", Weekday::Monday, "08:00", "09:00"),
        ];

        let conflicts = check_conflicts(reviewed, &school, &school);
        let double_bookings = conflicts
            .iter()
            .filter(|c| c.kind == ConflictType::TeacherDoubleBooking)
            .count();
        assert_eq!(double_bookings, 3);
    }

    #[test]
    fn test_boundary_touch_is_not_double_booking_but_counts_as_consecutive() {
        let reviewed = TimetableId::new(1);
        let school = vec![
            assignment(1, 100, "5A", "Maths", Weekday::Monday, "08:00", "09:00"),
            assignment(1, 100, "5A", "English", Weekday::Monday, "09:00", "10:00"),
            assignment(1, 100, "5A", "Arts", Weekday::Monday, "10:00", "11:00"),
        ];

        let conflicts = check_conflicts(reviewed, &school, &school);
        assert!(conflicts
            .iter()
            .all(|c| c.kind != ConflictType::TeacherDoubleBooking));

        let consecutive: Vec<_> = conflicts
            .iter()
            .filter(|c| c.kind == ConflictType::TeacherConsecutive)
            .collect();
        assert_eq!(consecutive.len(), 1);
        assert_eq!(starts(consecutive[0]), vec!["08:00", "09:00", "10:00"]);
    }

    #[test]
    fn test_consecutive_warnings_are_cumulative() {
        let reviewed = TimetableId::new(1);
        let school = vec![
            assignment(1, 100, "5A", "Maths", Weekday::Monday, "08:00", "09:00"),
            assignment(1, 100, "5A", "English", Weekday::Monday, "09:00", "10:00"),
            assignment(1, 100, "5A", "Arts", Weekday::Monday, "10:00", "11:00"),
            assignment(1, 100, "5A", "Science", Weekday::Monday, "11:00", "12:00"),
            assignment(1, 100, "5A", "History", Weekday::Monday, "12:00", "13:00"),
        ];

        let conflicts = check_conflicts(reviewed, &school, &school);
        let consecutive: Vec<_> = conflicts
            .iter()
            .filter(|c| c.kind == ConflictType::TeacherConsecutive)
            .collect();
        // Run of 5: one warning each at lengths 3, 4 and 5.
        assert_eq!(consecutive.len(), 3);
        assert_eq!(consecutive[0].details.periods.len(), 3);
        assert_eq!(consecutive[1].details.periods.len(), 4);
        assert_eq!(consecutive[2].details.periods.len(), 5);
    }

    #[test]
    fn test_gap_resets_consecutive_run() {
        let reviewed = TimetableId::new(1);
        let school = vec![
            assignment(1, 100, "5A", "Maths", Weekday::Monday, "08:00", "09:00"),
            assignment(1, 100, "5A", "English", Weekday::Monday, "09:00", "10:00"),
            // 15 minute gap: the run restarts here.
            assignment(1, 100, "5A", "Arts", Weekday::Monday, "10:15", "11:00"),
            assignment(1, 100, "5A", "Science", Weekday::Monday, "11:00", "12:00"),
        ];

        let conflicts = check_conflicts(reviewed, &school, &school);
        assert!(conflicts
            .iter()
            .all(|c| c.kind != ConflictType::TeacherConsecutive));
    }

    #[test]
    fn test_overload_flagged_at_six_sessions() {
        let reviewed = TimetableId::new(1);
        let hours = [
            ("08:00", "08:45"),
            ("09:00", "09:45"),
            ("10:00", "10:45"),
            ("11:00", "11:45"),
            ("12:00", "12:45"),
            ("13:00", "13:45"),
        ];
        let school: Vec<Assignment> = hours
            .iter()
            .map(|(start, end)| {
                assignment(1, 100, "5A", "Maths", Weekday::Tuesday, start, end)
            })
            .collect();

        let conflicts = check_conflicts(reviewed, &school, &school);
        let overload: Vec<_> = conflicts
            .iter()
            .filter(|c| c.kind == ConflictType::TeacherOverload)
            .collect();
        assert_eq!(overload.len(), 1);
        assert_eq!(overload[0].details.periods.len(), 6);
        // Every session has a gap before the next: no consecutive warnings.
        assert!(conflicts
            .iter()
            .all(|c| c.kind != ConflictType::TeacherConsecutive));
    }

    #[test]
    fn test_five_sessions_is_not_overload() {
        let reviewed = TimetableId::new(1);
        let school: Vec<Assignment> = (8..13)
            .map(|h| {
                assignment(
                    1,
                    100,
                    "5A",
                    "Maths",
                    Weekday::Monday,
                    &format!("{:02}:00", h),
                    &format!("{:02}:45", h),
                )
            })
            .collect();

        let conflicts = check_conflicts(reviewed, &school, &school);
        assert!(conflicts
            .iter()
            .all(|c| c.kind != ConflictType::TeacherOverload));
    }

    #[test]
    fn test_subject_clustering_in_reviewed_timetable() {
        let reviewed = TimetableId::new(1);
        let timetable = vec![
            assignment(1, 100, "5A", "Mathematics", Weekday::Monday, "08:00", "09:00"),
            assignment(1, 101, "5A", "English", Weekday::Monday, "09:15", "10:00"),
            assignment(1, 100, "5A", "Mathematics", Weekday::Monday, "13:00", "14:00"),
        ];

        let conflicts = check_conflicts(reviewed, &timetable, &timetable);
        let clustering: Vec<_> = conflicts
            .iter()
            .filter(|c| c.kind == ConflictType::SubjectClustering)
            .collect();
        assert_eq!(clustering.len(), 1);
        assert_eq!(clustering[0].severity, Severity::Info);
        assert_eq!(
            clustering[0].details.subject_name,
            Some("Mathematics".to_string())
        );
        assert_eq!(starts(clustering[0]), vec!["08:00", "13:00"]);
    }

    #[test]
    fn test_clustering_ignores_other_timetables() {
        // The same subject on the same day in another class's timetable
        // must not pad the reviewed timetable's count.
        let reviewed = TimetableId::new(1);
        let timetable = vec![assignment(
            1, 100, "5A", "Mathematics", Weekday::Monday, "08:00", "09:00",
        )];
        let school = vec![
            timetable[0].clone(),
            assignment(2, 101, "6B", "Mathematics", Weekday::Monday, "13:00", "14:00"),
        ];

        let conflicts = check_conflicts(reviewed, &timetable, &school);
        assert!(conflicts
            .iter()
            .all(|c| c.kind != ConflictType::SubjectClustering));
    }

    #[test]
    fn test_empty_timetable_returns_empty() {
        let school = vec![assignment(
            2, 100, "6B", "Maths", Weekday::Monday, "08:00", "09:00",
        )];
        let conflicts = check_conflicts(TimetableId::new(1), &[], &school);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_benign_timetable_returns_empty() {
        let reviewed = TimetableId::new(1);
        let school = vec![
            assignment(1, 100, "5A", "Maths", Weekday::Monday, "08:00", "09:00"),
            assignment(1, 101, "5A", "English", Weekday::Tuesday, "10:00", "11:00"),
        ];
        let conflicts = check_conflicts(reviewed, &school, &school);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_detector_output_order() {
        // One conflict of each kind; the aggregator must keep the fixed
        // detector order regardless of input order.
        let reviewed = TimetableId::new(1);
        let mut school = vec![
            // Clustering (and nothing else): two far-apart Arts sessions by
            // different teachers on friday.
            assignment(1, 104, "5A", "Arts", Weekday::Friday, "08:00", "09:00"),
            assignment(1, 105, "5A", "Arts", Weekday::Friday, "13:00", "14:00"),
            // Double booking for teacher 100 on monday.
            assignment(1, 100, "5A", "Maths", Weekday::Monday, "08:00", "09:00"),
            assignment(2, 100, "6B", "Maths", Weekday::Monday, "08:30", "09:30"),
            // Consecutive run of three for teacher 101 on tuesday.
            assignment(1, 101, "5A", "English", Weekday::Tuesday, "08:00", "09:00"),
            assignment(1, 101, "5A", "History", Weekday::Tuesday, "09:00", "10:00"),
            assignment(1, 101, "5A", "Civics", Weekday::Tuesday, "10:00", "11:00"),
        ];
        // Overload: six gapped wednesday sessions for teacher 102, each a
        // different subject so clustering stays out of the picture.
        let subjects = ["Science", "Maths", "English", "History", "Civics", "Geography"];
        for (h, subject) in [8, 9, 10, 11, 12, 13].into_iter().zip(subjects) {
            school.push(assignment(
                1,
                102,
                "5A",
                subject,
                Weekday::Wednesday,
                &format!("{:02}:00", h),
                &format!("{:02}:45", h),
            ));
        }
        let timetable: Vec<Assignment> = school
            .iter()
            .filter(|a| a.timetable_id == reviewed)
            .cloned()
            .collect();

        let kinds: Vec<ConflictType> = check_conflicts(reviewed, &timetable, &school)
            .iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ConflictType::TeacherDoubleBooking,
                ConflictType::TeacherConsecutive,
                ConflictType::TeacherOverload,
                ConflictType::SubjectClustering,
            ]
        );
    }

    #[test]
    fn test_check_conflicts_is_deterministic() {
        let reviewed = TimetableId::new(1);
        let school = vec![
            assignment(1, 103, "5A", "Maths", Weekday::Monday, "08:00", "09:00"),
            assignment(2, 103, "6B", "Maths", Weekday::Monday, "08:30", "09:30"),
            assignment(1, 100, "5A", "English", Weekday::Monday, "09:00", "10:00"),
            assignment(1, 100, "5A", "English", Weekday::Monday, "10:00", "11:00"),
            assignment(1, 100, "5A", "English", Weekday::Monday, "11:00", "12:00"),
        ];
        let timetable: Vec<Assignment> = school
            .iter()
            .filter(|a| a.timetable_id == reviewed)
            .cloned()
            .collect();

        let first = check_conflicts(reviewed, &timetable, &school);
        let second = check_conflicts(reviewed, &timetable, &school);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
