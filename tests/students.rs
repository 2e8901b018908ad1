#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tutordesk::db::students::{Student, Students};

    struct StudentTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StudentTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StudentTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_insert_and_fetch_student(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();
        let id = students
            .insert(&Student {
                id: None,
                name: "Olivia".to_string(),
                surname: "Bennett".to_string(),
                email: "olivia.bennett@example.com".to_string(),
            })
            .unwrap();

        let fetched = students.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.name, "Olivia");
        assert_eq!(fetched.email, "olivia.bennett@example.com");
        assert!(students.get_by_id(999).unwrap().is_none());

        assert_eq!(students.list().unwrap().len(), 1);
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_duplicate_email_rejected_by_schema(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();
        let student = Student {
            id: None,
            name: "Olivia".to_string(),
            surname: "Bennett".to_string(),
            email: "olivia.bennett@example.com".to_string(),
        };
        students.insert(&student).unwrap();
        assert!(students.insert(&student).is_err());
    }
}
