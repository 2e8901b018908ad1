use crate::db::db::Db;
use crate::db::subjects;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 5.0;

const SCHEMA_TEACHERS: &str = "CREATE TABLE IF NOT EXISTS teachers (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    surname TEXT NOT NULL,
    subjects TEXT NOT NULL,
    description TEXT,
    rating REAL NOT NULL,
    phone TEXT NOT NULL,
    hourly_rate INTEGER NOT NULL,
    currency TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
)";
const INSERT_TEACHER: &str = "INSERT INTO teachers (name, surname, subjects, description, rating, phone, hourly_rate, currency, email)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_ALL_TEACHERS: &str = "SELECT id, name, surname, subjects, description, rating, phone, hourly_rate, currency, email
    FROM teachers ORDER BY id";
const SELECT_TEACHER_BY_ID: &str = "SELECT id, name, surname, subjects, description, rating, phone, hourly_rate, currency, email
    FROM teachers WHERE id = ?1";
const SELECT_TEACHER_BY_EMAIL: &str = "SELECT id, name, surname, subjects, description, rating, phone, hourly_rate, currency, email
    FROM teachers WHERE email = ?1";

/// Returns whether a rating lies within the permitted [0.0, 5.0] band.
pub fn rating_in_range(rating: f64) -> bool {
    (RATING_MIN..=RATING_MAX).contains(&rating)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: Option<i64>,
    pub name: String,
    pub surname: String,
    /// Comma-separated list of taught subjects, each from the allowed set.
    pub subjects: String,
    pub description: Option<String>,
    pub rating: f64,
    pub phone: String,
    pub hourly_rate: i64,
    pub currency: String,
    pub email: String,
}

impl Teacher {
    /// Checks the row invariants: rating band and the subject list.
    pub fn validate(&self) -> Result<()> {
        if !rating_in_range(self.rating) {
            return Err(msg_error_anyhow!(Message::RatingOutOfRange(self.rating)));
        }
        if let Some(unknown) = subjects::first_unknown(&self.subjects) {
            return Err(msg_error_anyhow!(Message::UnknownSubject(unknown)));
        }
        Ok(())
    }
}

pub struct Teachers {
    conn: Connection,
}

impl Teachers {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TEACHERS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a teacher after validating rating, subjects and email
    /// uniqueness.
    pub fn insert(&mut self, teacher: &Teacher) -> Result<i64> {
        teacher.validate()?;
        if self.get_by_email(&teacher.email)?.is_some() {
            return Err(msg_error_anyhow!(Message::DuplicateTeacherEmail(teacher.email.clone())));
        }

        self.conn.execute(
            INSERT_TEACHER,
            params![
                teacher.name,
                teacher.surname,
                teacher.subjects,
                teacher.description,
                teacher.rating,
                teacher.phone,
                teacher.hourly_rate,
                teacher.currency,
                teacher.email
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn list(&mut self) -> Result<Vec<Teacher>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TEACHERS)?;
        let teacher_iter = stmt.query_map([], Self::map_row)?;

        let mut teachers = Vec::new();
        for teacher in teacher_iter {
            teachers.push(teacher?);
        }
        Ok(teachers)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Teacher>> {
        self.conn
            .query_row(SELECT_TEACHER_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_email(&mut self, email: &str) -> Result<Option<Teacher>> {
        self.conn
            .query_row(SELECT_TEACHER_BY_EMAIL, params![email], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Teacher> {
        Ok(Teacher {
            id: row.get(0)?,
            name: row.get(1)?,
            surname: row.get(2)?,
            subjects: row.get(3)?,
            description: row.get(4)?,
            rating: row.get(5)?,
            phone: row.get(6)?,
            hourly_rate: row.get(7)?,
            currency: row.get(8)?,
            email: row.get(9)?,
        })
    }
}
