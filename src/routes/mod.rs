pub mod conflicts;
pub mod landing;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Test that all route module constants are accessible
        assert_eq!(
            super::conflicts::GET_CONFLICT_REPORT,
            "get_conflict_report"
        );
        assert_eq!(super::landing::LIST_TIMETABLES, "list_timetables");
        assert_eq!(super::landing::POST_TIMETABLE, "store_timetable");
    }
}
