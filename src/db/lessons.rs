use crate::db::db::Db;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

/// Wire and storage format for lesson timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Subject every booking made through the HTTP surface is filed under.
// Original behavior: the booking endpoint does not take a subject.
pub const BOOKING_SUBJECT_ID: i64 = 1;

const SCHEMA_LESSONS: &str = "CREATE TABLE IF NOT EXISTS lessons (
    id INTEGER PRIMARY KEY,
    teacher_id INTEGER NOT NULL,
    student_id INTEGER NOT NULL,
    subject_id INTEGER NOT NULL,
    scheduled_at TIMESTAMP NOT NULL,
    FOREIGN KEY (teacher_id) REFERENCES teachers(id) ON DELETE CASCADE,
    FOREIGN KEY (student_id) REFERENCES students(id) ON DELETE CASCADE,
    FOREIGN KEY (subject_id) REFERENCES subjects(id) ON DELETE CASCADE
)";
const INSERT_LESSON: &str = "INSERT INTO lessons (teacher_id, student_id, subject_id, scheduled_at) VALUES (?1, ?2, ?3, ?4)";
const COUNT_SLOT: &str = "SELECT COUNT(*) FROM lessons WHERE teacher_id = ?1 AND scheduled_at = ?2";
const SELECT_STUDENT_RANGE: &str = "
    SELECT l.id, l.teacher_id, t.name, t.surname, l.student_id, l.scheduled_at, l.subject_id, s.name
    FROM lessons l
    JOIN teachers t ON t.id = l.teacher_id
    JOIN subjects s ON s.id = l.subject_id
    WHERE l.student_id = ?1 AND l.scheduled_at >= ?2 AND l.scheduled_at <= ?3
    ORDER BY l.scheduled_at
";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Option<i64>,
    pub teacher_id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub scheduled_at: NaiveDateTime,
}

/// A student's lesson joined with teacher and subject fields, as returned
/// by the lesson listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StudentLesson {
    pub lesson_id: i64,
    pub teacher_id: i64,
    pub teacher_name: String,
    pub teacher_surname: String,
    pub student_id: i64,
    pub scheduled_at: NaiveDateTime,
    pub subject_id: i64,
    pub subject: String,
}

/// Result of a booking attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Booked(i64),
    SlotTaken,
}

pub struct Lessons {
    conn: Connection,
}

impl Lessons {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_LESSONS, [])?;
        Ok(Self { conn: db.conn })
    }

    pub fn insert(&mut self, lesson: &Lesson) -> Result<i64> {
        self.conn.execute(
            INSERT_LESSON,
            params![
                lesson.teacher_id,
                lesson.student_id,
                lesson.subject_id,
                lesson.scheduled_at.format(TIMESTAMP_FORMAT).to_string()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Whether a lesson with this exact (teacher, timestamp) pair exists.
    ///
    /// Exact-match only: overlapping lessons at different timestamps are
    /// not considered a conflict.
    pub fn is_slot_taken(&mut self, teacher_id: i64, scheduled_at: NaiveDateTime) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            COUNT_SLOT,
            params![teacher_id, scheduled_at.format(TIMESTAMP_FORMAT).to_string()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Books a lesson unless the teacher already has one at this exact
    /// timestamp.
    pub fn book(&mut self, teacher_id: i64, student_id: i64, scheduled_at: NaiveDateTime) -> Result<BookingOutcome> {
        if self.is_slot_taken(teacher_id, scheduled_at)? {
            return Ok(BookingOutcome::SlotTaken);
        }

        let lesson = Lesson {
            id: None,
            teacher_id,
            student_id,
            subject_id: BOOKING_SUBJECT_ID,
            scheduled_at,
        };
        let id = self.insert(&lesson)?;
        Ok(BookingOutcome::Booked(id))
    }

    /// Lessons for one student within an inclusive timestamp range.
    pub fn fetch_for_student(&mut self, student_id: i64, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<StudentLesson>> {
        let mut stmt = self.conn.prepare(SELECT_STUDENT_RANGE)?;
        let lesson_iter = stmt.query_map(
            params![
                student_id,
                start.format(TIMESTAMP_FORMAT).to_string(),
                end.format(TIMESTAMP_FORMAT).to_string()
            ],
            |row| {
                Ok(StudentLesson {
                    lesson_id: row.get(0)?,
                    teacher_id: row.get(1)?,
                    teacher_name: row.get(2)?,
                    teacher_surname: row.get(3)?,
                    student_id: row.get(4)?,
                    scheduled_at: parse_timestamp(row, 5)?,
                    subject_id: row.get(6)?,
                    subject: row.get(7)?,
                })
            },
        )?;

        let mut lessons = Vec::new();
        for lesson in lesson_iter {
            lessons.push(lesson?);
        }
        Ok(lessons)
    }
}

pub(crate) fn parse_timestamp(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(idx)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e)))
}
