#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tutordesk::db::availability::{Availability, AvailabilityWindow};

    struct AvailabilityTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for AvailabilityTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            AvailabilityTestContext { _temp_dir: temp_dir }
        }
    }

    fn window(teacher_id: Option<i64>, from: &str, to: &str) -> AvailabilityWindow {
        AvailabilityWindow {
            id: None,
            teacher_id,
            available_from: NaiveTime::parse_from_str(from, "%H:%M").unwrap(),
            available_to: NaiveTime::parse_from_str(to, "%H:%M").unwrap(),
        }
    }

    #[test_context(AvailabilityTestContext)]
    #[test]
    fn test_insert_and_fetch_window(_ctx: &mut AvailabilityTestContext) {
        let mut availability = Availability::new().unwrap();
        let id = availability.insert(&window(Some(1), "09:00", "17:00")).unwrap();

        let fetched = availability.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.teacher_id, Some(1));
        assert_eq!(fetched.available_from.format("%H:%M").to_string(), "09:00");
        assert_eq!(fetched.available_to.format("%H:%M").to_string(), "17:00");
    }

    #[test_context(AvailabilityTestContext)]
    #[test]
    fn test_list_for_teacher_ordered_by_start(_ctx: &mut AvailabilityTestContext) {
        let mut availability = Availability::new().unwrap();
        availability.insert(&window(Some(1), "14:00", "20:00")).unwrap();
        availability.insert(&window(Some(1), "08:00", "12:00")).unwrap();
        availability.insert(&window(Some(2), "09:00", "17:00")).unwrap();

        let windows = availability.list_for_teacher(1).unwrap();
        assert_eq!(windows.len(), 2);
        assert!(windows[0].available_from < windows[1].available_from);
    }

    #[test_context(AvailabilityTestContext)]
    #[test]
    fn test_attach_claims_unowned_window(_ctx: &mut AvailabilityTestContext) {
        let mut availability = Availability::new().unwrap();
        let id = availability.insert(&window(None, "09:00", "17:00")).unwrap();

        availability.attach(id, 7).unwrap();
        let fetched = availability.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.teacher_id, Some(7));

        assert!(availability.attach(999, 7).is_err());
    }
}
