//! Read-only reporting queries over the lesson store.
//!
//! Seven independent aggregate/filter passes used by the `stats` command.
//! Each is a single SQL statement; none mutates state. Weekday arithmetic
//! uses SQLite's `strftime('%w', ...)` (0 = Sunday .. 6 = Saturday).

use crate::db::db::Db;
use crate::db::lessons::parse_timestamp;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use rusqlite::{params, Connection, OptionalExtension};

/// Availability windows starting at or before this hour count as
/// "daytime" for the weekday student report.
const AVAILABILITY_CUTOFF: &str = "17:00";

const COUNT_WEEKDAY_STUDENTS: &str = "
    SELECT COUNT(DISTINCT l.student_id)
    FROM lessons l
    JOIN teacher_availability a ON a.teacher_id = l.teacher_id
    WHERE a.available_from <= ?1
      AND strftime('%w', l.scheduled_at) BETWEEN '1' AND '5'
";
const COUNT_WEEKEND_TEACHERS: &str = "
    SELECT COUNT(DISTINCT teacher_id)
    FROM lessons
    WHERE strftime('%w', scheduled_at) IN ('0', '6')
";
const SELECT_TOP_STUDENT: &str = "
    SELECT s.id, s.name, s.surname, s.email, COUNT(l.id) AS lesson_count
    FROM lessons l
    JOIN students s ON s.id = l.student_id
    GROUP BY l.student_id
    ORDER BY lesson_count DESC
    LIMIT 1
";
const SELECT_TOP_SUBJECT: &str = "
    SELECT s.name, COUNT(l.id) AS lesson_count
    FROM lessons l
    JOIN subjects s ON s.id = l.subject_id
    GROUP BY l.subject_id
    ORDER BY lesson_count DESC
    LIMIT 1
";
const COUNT_LESSONS_FOR_SUBJECT: &str = "
    SELECT COUNT(*)
    FROM lessons l
    JOIN subjects s ON s.id = l.subject_id
    WHERE s.name = ?1
";
const COUNT_LESSONS_ON_WEEKDAY: &str = "SELECT COUNT(*) FROM lessons WHERE strftime('%w', scheduled_at) = ?1";
const SELECT_TEACHER_DAY: &str = "
    SELECT l.id, s.name, l.student_id, l.scheduled_at
    FROM lessons l
    JOIN subjects s ON s.id = l.subject_id
    WHERE l.teacher_id = ?1 AND DATE(l.scheduled_at) = ?2
    ORDER BY l.scheduled_at
";

/// The student with the most lessons.
#[derive(Debug, Clone)]
pub struct TopStudent {
    pub student_id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub lesson_count: i64,
}

/// The subject with the most lessons.
#[derive(Debug, Clone)]
pub struct TopSubject {
    pub name: String,
    pub lesson_count: i64,
}

/// One lesson from a teacher's day schedule.
#[derive(Debug, Clone)]
pub struct TeacherDayLesson {
    pub lesson_id: i64,
    pub subject: String,
    pub student_id: i64,
    pub scheduled_at: NaiveDateTime,
}

pub struct Reports {
    conn: Connection,
}

impl Reports {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Distinct students with weekday lessons whose teacher has an
    /// availability window opening at or before 17:00.
    pub fn weekday_student_count(&mut self) -> Result<i64> {
        let count = self
            .conn
            .query_row(COUNT_WEEKDAY_STUDENTS, params![AVAILABILITY_CUTOFF], |row| row.get(0))?;
        Ok(count)
    }

    /// Distinct teachers giving lessons on Saturday or Sunday.
    pub fn weekend_teacher_count(&mut self) -> Result<i64> {
        let count = self.conn.query_row(COUNT_WEEKEND_TEACHERS, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Student with the most lessons, `None` on an empty store.
    pub fn top_student(&mut self) -> Result<Option<TopStudent>> {
        self.conn
            .query_row(SELECT_TOP_STUDENT, [], |row| {
                Ok(TopStudent {
                    student_id: row.get(0)?,
                    name: row.get(1)?,
                    surname: row.get(2)?,
                    email: row.get(3)?,
                    lesson_count: row.get(4)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Subject with the most lessons, `None` on an empty store.
    pub fn top_subject(&mut self) -> Result<Option<TopSubject>> {
        self.conn
            .query_row(SELECT_TOP_SUBJECT, [], |row| {
                Ok(TopSubject {
                    name: row.get(0)?,
                    lesson_count: row.get(1)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Lesson count for one subject name.
    pub fn lessons_for_subject(&mut self, subject: &str) -> Result<i64> {
        let count = self.conn.query_row(COUNT_LESSONS_FOR_SUBJECT, params![subject], |row| row.get(0))?;
        Ok(count)
    }

    /// Lesson count on one weekday across all weeks.
    pub fn lessons_on_weekday(&mut self, weekday: Weekday) -> Result<i64> {
        let day = weekday.num_days_from_sunday().to_string();
        let count = self.conn.query_row(COUNT_LESSONS_ON_WEEKDAY, params![day], |row| row.get(0))?;
        Ok(count)
    }

    /// A teacher's lessons on one calendar day, ordered by time.
    pub fn teacher_lessons_on_day(&mut self, teacher_id: i64, day: NaiveDate) -> Result<Vec<TeacherDayLesson>> {
        let day_str = day.format("%Y-%m-%d").to_string();
        let mut stmt = self.conn.prepare(SELECT_TEACHER_DAY)?;
        let lesson_iter = stmt.query_map(params![teacher_id, day_str], |row| {
            Ok(TeacherDayLesson {
                lesson_id: row.get(0)?,
                subject: row.get(1)?,
                student_id: row.get(2)?,
                scheduled_at: parse_timestamp(row, 3)?,
            })
        })?;

        let mut lessons = Vec::new();
        for lesson in lesson_iter {
            lessons.push(lesson?);
        }
        Ok(lessons)
    }
}
