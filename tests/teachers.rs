#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tutordesk::db::teachers::{rating_in_range, Teacher, Teachers};

    struct TeacherTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TeacherTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TeacherTestContext { _temp_dir: temp_dir }
        }
    }

    fn sample_teacher() -> Teacher {
        Teacher {
            id: None,
            name: "Alice".to_string(),
            surname: "Morgan".to_string(),
            subjects: "math,physics".to_string(),
            description: Some("Specialist in the exact sciences".to_string()),
            rating: 4.8,
            phone: "123456789".to_string(),
            hourly_rate: 50,
            currency: "EUR".to_string(),
            email: "alice.morgan@example.com".to_string(),
        }
    }

    #[test]
    fn test_rating_band() {
        assert!(rating_in_range(0.0));
        assert!(rating_in_range(5.0));
        assert!(rating_in_range(3.3));
        assert!(!rating_in_range(-0.1));
        assert!(!rating_in_range(5.1));
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_insert_and_fetch_teacher(_ctx: &mut TeacherTestContext) {
        let mut teachers = Teachers::new().unwrap();
        let id = teachers.insert(&sample_teacher()).unwrap();

        let fetched = teachers.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.name, "Alice");
        assert_eq!(fetched.surname, "Morgan");
        assert_eq!(fetched.subjects, "math,physics");
        assert_eq!(fetched.rating, 4.8);
        assert_eq!(fetched.hourly_rate, 50);

        let by_email = teachers.get_by_email("alice.morgan@example.com").unwrap().unwrap();
        assert_eq!(by_email.id, Some(id));

        assert!(teachers.get_by_id(999).unwrap().is_none());
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_rating_out_of_range_rejected(_ctx: &mut TeacherTestContext) {
        let mut teachers = Teachers::new().unwrap();
        let mut teacher = sample_teacher();
        teacher.rating = 5.5;

        assert!(teachers.insert(&teacher).is_err());
        assert!(teachers.list().unwrap().is_empty());
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_unknown_subject_rejected(_ctx: &mut TeacherTestContext) {
        let mut teachers = Teachers::new().unwrap();
        let mut teacher = sample_teacher();
        teacher.subjects = "math,alchemy".to_string();

        let err = teachers.insert(&teacher).unwrap_err();
        assert!(err.to_string().contains("alchemy"));
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_subject_list_whitespace_tolerated(_ctx: &mut TeacherTestContext) {
        let mut teachers = Teachers::new().unwrap();
        let mut teacher = sample_teacher();
        teacher.subjects = "math, physics".to_string();

        assert!(teachers.insert(&teacher).is_ok());
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_duplicate_email_rejected(_ctx: &mut TeacherTestContext) {
        let mut teachers = Teachers::new().unwrap();
        teachers.insert(&sample_teacher()).unwrap();

        let mut second = sample_teacher();
        second.name = "Alicia".to_string();
        assert!(teachers.insert(&second).is_err());
        assert_eq!(teachers.list().unwrap().len(), 1);
    }
}
