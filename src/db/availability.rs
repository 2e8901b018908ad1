use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveTime;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

/// Storage format for availability times.
pub const TIME_FORMAT: &str = "%H:%M";

const SCHEMA_AVAILABILITY: &str = "CREATE TABLE IF NOT EXISTS teacher_availability (
    id INTEGER PRIMARY KEY,
    teacher_id INTEGER,
    available_from TIME NOT NULL,
    available_to TIME NOT NULL,
    FOREIGN KEY (teacher_id) REFERENCES teachers(id) ON DELETE CASCADE
)";
const INSERT_WINDOW: &str = "INSERT INTO teacher_availability (teacher_id, available_from, available_to) VALUES (?1, ?2, ?3)";
const SELECT_WINDOW_BY_ID: &str = "SELECT id, teacher_id, available_from, available_to FROM teacher_availability WHERE id = ?1";
const SELECT_WINDOWS_BY_TEACHER: &str =
    "SELECT id, teacher_id, available_from, available_to FROM teacher_availability WHERE teacher_id = ?1 ORDER BY available_from";
const ATTACH_WINDOW: &str = "UPDATE teacher_availability SET teacher_id = ?2 WHERE id = ?1";

/// A per-teacher open interval of tutoring hours.
///
/// Windows are seeded without enforcement against bookings; their only
/// runtime use is as the attachment target when a new teacher is added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub id: Option<i64>,
    /// Owning teacher; `None` until a teacher is attached.
    pub teacher_id: Option<i64>,
    pub available_from: NaiveTime,
    pub available_to: NaiveTime,
}

pub struct Availability {
    conn: Connection,
}

impl Availability {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_AVAILABILITY, [])?;
        Ok(Self { conn: db.conn })
    }

    pub fn insert(&mut self, window: &AvailabilityWindow) -> Result<i64> {
        self.conn.execute(
            INSERT_WINDOW,
            params![
                window.teacher_id,
                window.available_from.format(TIME_FORMAT).to_string(),
                window.available_to.format(TIME_FORMAT).to_string()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<AvailabilityWindow>> {
        self.conn
            .query_row(SELECT_WINDOW_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn list_for_teacher(&mut self, teacher_id: i64) -> Result<Vec<AvailabilityWindow>> {
        let mut stmt = self.conn.prepare(SELECT_WINDOWS_BY_TEACHER)?;
        let window_iter = stmt.query_map(params![teacher_id], Self::map_row)?;

        let mut windows = Vec::new();
        for window in window_iter {
            windows.push(window?);
        }
        Ok(windows)
    }

    /// Re-assigns an existing window to a teacher.
    ///
    /// The original seeding leaves windows attachable; adding a teacher
    /// claims one by id, overwriting any previous owner.
    pub fn attach(&mut self, window_id: i64, teacher_id: i64) -> Result<()> {
        let affected = self.conn.execute(ATTACH_WINDOW, params![window_id, teacher_id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::AvailabilityNotFound(window_id)));
        }
        Ok(())
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<AvailabilityWindow> {
        Ok(AvailabilityWindow {
            id: row.get(0)?,
            teacher_id: row.get(1)?,
            available_from: parse_time(row, 2)?,
            available_to: parse_time(row, 3)?,
        })
    }
}

fn parse_time(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<NaiveTime> {
    let raw: String = row.get(idx)?;
    NaiveTime::parse_from_str(&raw, TIME_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e)))
}
