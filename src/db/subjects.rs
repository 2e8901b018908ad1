use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

/// Fixed closed list of subject names valid across the system.
///
/// Every subject row and every subject a teacher lists must come from
/// this set.
pub const ALLOWED_SUBJECTS: &[&str] = &["math", "physics", "chemistry", "history", "civics", "biology", "geography"];

const SCHEMA_SUBJECTS: &str = "CREATE TABLE IF NOT EXISTS subjects (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
)";
const INSERT_SUBJECT: &str = "INSERT INTO subjects (name) VALUES (?1)";
const SELECT_ALL_SUBJECTS: &str = "SELECT id, name FROM subjects ORDER BY id";
const SELECT_SUBJECT_BY_ID: &str = "SELECT id, name FROM subjects WHERE id = ?1";
const SELECT_SUBJECT_BY_NAME: &str = "SELECT id, name FROM subjects WHERE name = ?1";

/// Returns whether a subject name belongs to the allowed set.
pub fn is_allowed(name: &str) -> bool {
    ALLOWED_SUBJECTS.contains(&name)
}

/// Finds the first entry of a comma-separated subject list that is not
/// in the allowed set, if any.
pub fn first_unknown(subject_list: &str) -> Option<String> {
    subject_list
        .split(',')
        .map(str::trim)
        .find(|subject| !is_allowed(subject))
        .map(str::to_string)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: Option<i64>,
    pub name: String,
}

impl Subject {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
        }
    }
}

pub struct Subjects {
    conn: Connection,
}

impl Subjects {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_SUBJECTS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a subject, rejecting names outside the allowed set.
    pub fn insert(&mut self, subject: &Subject) -> Result<i64> {
        if !is_allowed(&subject.name) {
            return Err(msg_error_anyhow!(Message::UnknownSubject(subject.name.clone())));
        }
        self.conn.execute(INSERT_SUBJECT, params![subject.name])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn list(&mut self) -> Result<Vec<Subject>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_SUBJECTS)?;
        let subject_iter = stmt.query_map([], |row| {
            Ok(Subject {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut subjects = Vec::new();
        for subject in subject_iter {
            subjects.push(subject?);
        }
        Ok(subjects)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Subject>> {
        self.conn
            .query_row(SELECT_SUBJECT_BY_ID, params![id], |row| {
                Ok(Subject {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Subject>> {
        self.conn
            .query_row(SELECT_SUBJECT_BY_NAME, params![name], |row| {
                Ok(Subject {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }
}
