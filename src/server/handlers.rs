//! Request handlers for the five booking endpoints.
//!
//! Each handler opens its own repository (and therefore its own SQLite
//! connection), does synchronous DB work and maps failures through
//! [`ApiError`]. Field presence is checked by hand on `Option` fields so
//! a missing field yields 400 with the field name, matching the wire
//! contract rather than the extractor's default rejection.

use crate::db::availability::Availability;
use crate::db::lessons::{BookingOutcome, Lessons, TIMESTAMP_FORMAT};
use crate::db::students::Students;
use crate::db::subjects;
use crate::db::teachers::{self, Teacher, Teachers};
use crate::server::error::ApiError;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Teacher row trimmed to the listing fields.
#[derive(Serialize)]
pub struct TeacherSummary {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub subjects: String,
}

/// `GET /teacher-list`
pub async fn teacher_list() -> Result<Json<Vec<TeacherSummary>>, ApiError> {
    let mut teachers = Teachers::new()?;
    let summaries = teachers
        .list()?
        .into_iter()
        .map(|t| TeacherSummary {
            id: t.id.unwrap_or_default(),
            name: t.name,
            surname: t.surname,
            subjects: t.subjects,
        })
        .collect();
    Ok(Json(summaries))
}

/// `GET /teacher-details/{id}`
pub async fn teacher_details(Path(id): Path<i64>) -> Result<Json<Teacher>, ApiError> {
    let mut teachers = Teachers::new()?;
    let teacher = teachers.get_by_id(id)?.ok_or(ApiError::TeacherNotFound)?;
    Ok(Json(teacher))
}

#[derive(Deserialize)]
pub struct BookLessonRequest {
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub timestamp: Option<String>,
}

/// `POST /book-lesson`
///
/// Rejects only an exact (teacher, timestamp) collision; back-to-back
/// overlapping lessons pass. No existence check on teacher or student.
pub async fn book_lesson(Json(payload): Json<BookLessonRequest>) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let student_id = payload.student_id.ok_or(ApiError::MissingField("student_id"))?;
    let teacher_id = payload.teacher_id.ok_or(ApiError::MissingField("teacher_id"))?;
    let raw_timestamp = payload.timestamp.ok_or(ApiError::MissingField("timestamp"))?;

    let scheduled_at = NaiveDateTime::parse_from_str(&raw_timestamp, TIMESTAMP_FORMAT).map_err(|_| ApiError::InvalidTimestamp)?;

    let mut lessons = Lessons::new()?;
    match lessons.book(teacher_id, student_id, scheduled_at)? {
        BookingOutcome::Booked(id) => Ok((
            StatusCode::CREATED,
            Json(json!({ "message": "lesson booked", "lesson_id": id })),
        )),
        BookingOutcome::SlotTaken => Err(ApiError::SlotTaken),
    }
}

#[derive(Deserialize)]
pub struct AddTeacherRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub subjects: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub phone: Option<String>,
    pub hourly_rate: Option<i64>,
    pub currency: Option<String>,
    pub email: Option<String>,
    /// Pre-existing availability window the new teacher claims.
    pub availability_id: Option<i64>,
}

/// `POST /add-teacher`
pub async fn add_teacher(Json(payload): Json<AddTeacherRequest>) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let name = payload.name.ok_or(ApiError::MissingField("name"))?;
    let surname = payload.surname.ok_or(ApiError::MissingField("surname"))?;
    let subjects_list = payload.subjects.ok_or(ApiError::MissingField("subjects"))?;
    let description = payload.description.ok_or(ApiError::MissingField("description"))?;
    let rating = payload.rating.ok_or(ApiError::MissingField("rating"))?;
    let phone = payload.phone.ok_or(ApiError::MissingField("phone"))?;
    let hourly_rate = payload.hourly_rate.ok_or(ApiError::MissingField("hourly_rate"))?;
    let currency = payload.currency.ok_or(ApiError::MissingField("currency"))?;
    let email = payload.email.ok_or(ApiError::MissingField("email"))?;
    let availability_id = payload.availability_id.ok_or(ApiError::MissingField("availability_id"))?;

    if !teachers::rating_in_range(rating) {
        return Err(ApiError::RatingOutOfRange);
    }
    if let Some(unknown) = subjects::first_unknown(&subjects_list) {
        return Err(ApiError::UnknownSubject(unknown));
    }

    let mut availability = Availability::new()?;
    availability.get_by_id(availability_id)?.ok_or(ApiError::AvailabilityNotFound)?;

    let mut repo = Teachers::new()?;
    if repo.get_by_email(&email)?.is_some() {
        return Err(ApiError::DuplicateEmail);
    }

    let teacher_id = repo.insert(&Teacher {
        id: None,
        name,
        surname,
        subjects: subjects_list,
        description: Some(description),
        rating,
        phone,
        hourly_rate,
        currency,
        email,
    })?;
    availability.attach(availability_id, teacher_id)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "teacher added", "teacher_id": teacher_id })),
    ))
}

#[derive(Deserialize)]
pub struct GetLessonsParams {
    pub student_id: Option<i64>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// One row of the lesson listing, with wire-formatted timestamp.
#[derive(Serialize)]
pub struct LessonEntry {
    pub lesson_id: i64,
    pub teacher_id: i64,
    pub teacher_name: String,
    pub teacher_surname: String,
    pub student_id: i64,
    pub timestamp: String,
    pub subject_id: i64,
    pub subject: String,
}

/// `GET /get-lessons?student_id&start&end`
///
/// Parameter and lookup failures answer with a bare status code and an
/// empty body; a valid query with no matching lessons is 200, also with
/// an empty body.
pub async fn get_lessons(Query(params): Query<GetLessonsParams>) -> Result<Response, ApiError> {
    let (Some(student_id), Some(raw_start), Some(raw_end)) = (params.student_id, params.start, params.end) else {
        return Ok(StatusCode::BAD_REQUEST.into_response());
    };
    let Ok(start) = NaiveDateTime::parse_from_str(&raw_start, TIMESTAMP_FORMAT) else {
        return Ok(StatusCode::BAD_REQUEST.into_response());
    };
    let Ok(end) = NaiveDateTime::parse_from_str(&raw_end, TIMESTAMP_FORMAT) else {
        return Ok(StatusCode::BAD_REQUEST.into_response());
    };

    let mut students = Students::new()?;
    if students.get_by_id(student_id)?.is_none() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let mut lessons = Lessons::new()?;
    let found = lessons.fetch_for_student(student_id, start, end)?;
    if found.is_empty() {
        return Ok(StatusCode::OK.into_response());
    }

    let entries: Vec<LessonEntry> = found
        .into_iter()
        .map(|l| LessonEntry {
            lesson_id: l.lesson_id,
            teacher_id: l.teacher_id,
            teacher_name: l.teacher_name,
            teacher_surname: l.teacher_surname,
            student_id: l.student_id,
            timestamp: l.scheduled_at.format(TIMESTAMP_FORMAT).to_string(),
            subject_id: l.subject_id,
            subject: l.subject,
        })
        .collect();
    Ok(Json(entries).into_response())
}
