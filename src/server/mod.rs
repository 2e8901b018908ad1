//! REST API layer for tutordesk using Axum.
//!
//! Five HTTP/JSON endpoints over the lesson store: teacher listing and
//! detail, lesson booking with a conflict check, teacher creation against
//! a pre-existing availability window, and per-student lesson queries.
//! Requests carry an `Authorization` header in the sample client; the
//! server deliberately never inspects it.

pub mod error;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;

/// Builds the application router with the five booking routes.
pub fn router() -> Router {
    Router::new()
        .route("/teacher-list", get(handlers::teacher_list))
        .route("/teacher-details/:id", get(handlers::teacher_details))
        .route("/book-lesson", post(handlers::book_lesson))
        .route("/add-teacher", post(handlers::add_teacher))
        .route("/get-lessons", get(handlers::get_lessons))
}
