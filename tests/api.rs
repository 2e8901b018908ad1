#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use tower::ServiceExt;
    use tutordesk::db::db::Db;
    use tutordesk::db::seed;
    use tutordesk::db::teachers::Teachers;
    use tutordesk::server::router;

    struct ApiTestContext {
        _temp_dir: TempDir,
    }

    impl AsyncTestContext for ApiTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            let mut db = Db::new().unwrap();
            seed::run(&mut db.conn).unwrap();

            ApiTestContext { _temp_dir: temp_dir }
        }
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, payload: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn body_json(body: Body) -> Value {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_teacher_list(_ctx: &mut ApiTestContext) {
        let response = router().oneshot(get("/teacher-list")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let teachers = body_json(response.into_body()).await;
        let teachers = teachers.as_array().unwrap();
        assert_eq!(teachers.len(), 5);
        assert_eq!(teachers[0]["name"], "Alice");
        assert_eq!(teachers[0]["subjects"], "math,physics");
        // Listing is trimmed to summary fields
        assert!(teachers[0].get("email").is_none());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_teacher_details(_ctx: &mut ApiTestContext) {
        let response = router().oneshot(get("/teacher-details/2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let teacher = body_json(response.into_body()).await;
        assert_eq!(teacher["name"], "Brian");
        assert_eq!(teacher["surname"], "Foster");
        assert_eq!(teacher["email"], "brian.foster@example.com");
        assert_eq!(teacher["hourly_rate"], 60);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_teacher_details_not_found(_ctx: &mut ApiTestContext) {
        let response = router().oneshot(get("/teacher-details/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response.into_body()).await;
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_book_lesson_then_conflict(_ctx: &mut ApiTestContext) {
        let payload = json!({ "student_id": 1, "teacher_id": 1, "timestamp": "2024-12-18 10:00" });

        let response = router().oneshot(post_json("/book-lesson", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["message"], "lesson booked");
        assert!(body["lesson_id"].as_i64().unwrap() > 0);

        // Same teacher and timestamp again
        let response = router().oneshot(post_json("/book-lesson", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_book_lesson_missing_field(_ctx: &mut ApiTestContext) {
        let payload = json!({ "student_id": 1, "teacher_id": 1 });
        let response = router().oneshot(post_json("/book-lesson", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response.into_body()).await;
        assert!(body["error"].as_str().unwrap().contains("timestamp"));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_book_lesson_bad_timestamp(_ctx: &mut ApiTestContext) {
        let payload = json!({ "student_id": 1, "teacher_id": 1, "timestamp": "18.12.2024 10:00" });
        let response = router().oneshot(post_json("/book-lesson", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    fn new_teacher_payload() -> Value {
        json!({
            "name": "Adam",
            "surname": "Newman",
            "subjects": "math, physics",
            "description": "Patient explainer",
            "rating": 4.2,
            "phone": "555123456",
            "hourly_rate": 40,
            "currency": "EUR",
            "email": "adam.newman@example.com",
            "availability_id": 3,
        })
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_add_teacher(_ctx: &mut ApiTestContext) {
        let response = router().oneshot(post_json("/add-teacher", &new_teacher_payload())).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response.into_body()).await;
        assert_eq!(body["message"], "teacher added");
        let teacher_id = body["teacher_id"].as_i64().unwrap();
        assert_eq!(teacher_id, 6);

        let mut teachers = Teachers::new().unwrap();
        let stored = teachers.get_by_id(teacher_id).unwrap().unwrap();
        assert_eq!(stored.email, "adam.newman@example.com");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_add_teacher_missing_field(_ctx: &mut ApiTestContext) {
        let mut payload = new_teacher_payload();
        payload.as_object_mut().unwrap().remove("name");

        let response = router().oneshot(post_json("/add-teacher", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response.into_body()).await;
        assert!(body["error"].as_str().unwrap().contains("name"));

        // Nothing persisted
        let mut teachers = Teachers::new().unwrap();
        assert_eq!(teachers.list().unwrap().len(), 5);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_add_teacher_invalid_rating(_ctx: &mut ApiTestContext) {
        let mut payload = new_teacher_payload();
        payload["rating"] = json!(7.5);

        let response = router().oneshot(post_json("/add-teacher", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_add_teacher_unknown_subject(_ctx: &mut ApiTestContext) {
        let mut payload = new_teacher_payload();
        payload["subjects"] = json!("math, astrology");

        let response = router().oneshot(post_json("/add-teacher", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response.into_body()).await;
        assert!(body["error"].as_str().unwrap().contains("astrology"));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_add_teacher_unknown_availability(_ctx: &mut ApiTestContext) {
        let mut payload = new_teacher_payload();
        payload["availability_id"] = json!(999);

        let response = router().oneshot(post_json("/add-teacher", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_add_teacher_duplicate_email(_ctx: &mut ApiTestContext) {
        let mut payload = new_teacher_payload();
        payload["email"] = json!("alice.morgan@example.com");

        let response = router().oneshot(post_json("/add-teacher", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_get_lessons(_ctx: &mut ApiTestContext) {
        let uri = "/get-lessons?student_id=1&start=2024-12-09%2000:00&end=2024-12-12%2023:59";
        let response = router().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let lessons = body_json(response.into_body()).await;
        let lessons = lessons.as_array().unwrap();
        assert_eq!(lessons.len(), 3);
        assert_eq!(lessons[0]["timestamp"], "2024-12-09 12:00");
        assert_eq!(lessons[0]["teacher_name"], "Alice");
        assert_eq!(lessons[0]["subject"], "math");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_get_lessons_empty_range(_ctx: &mut ApiTestContext) {
        let uri = "/get-lessons?student_id=1&start=2025-01-01%2000:00&end=2025-01-31%2023:59";
        let response = router().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_get_lessons_missing_params(_ctx: &mut ApiTestContext) {
        let response = router().oneshot(get("/get-lessons?student_id=1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_get_lessons_bad_timestamp(_ctx: &mut ApiTestContext) {
        let uri = "/get-lessons?student_id=1&start=whenever&end=2024-12-12%2023:59";
        let response = router().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_get_lessons_unknown_student(_ctx: &mut ApiTestContext) {
        let uri = "/get-lessons?student_id=999&start=2024-12-09%2000:00&end=2024-12-12%2023:59";
        let response = router().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
