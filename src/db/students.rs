use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const SCHEMA_STUDENTS: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    surname TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
)";
const INSERT_STUDENT: &str = "INSERT INTO students (name, surname, email) VALUES (?1, ?2, ?3)";
const SELECT_ALL_STUDENTS: &str = "SELECT id, name, surname, email FROM students ORDER BY id";
const SELECT_STUDENT_BY_ID: &str = "SELECT id, name, surname, email FROM students WHERE id = ?1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Option<i64>,
    pub name: String,
    pub surname: String,
    pub email: String,
}

pub struct Students {
    conn: Connection,
}

impl Students {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_STUDENTS, [])?;
        Ok(Self { conn: db.conn })
    }

    pub fn insert(&mut self, student: &Student) -> Result<i64> {
        self.conn
            .execute(INSERT_STUDENT, params![student.name, student.surname, student.email])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn list(&mut self) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_STUDENTS)?;
        let student_iter = stmt.query_map([], |row| {
            Ok(Student {
                id: row.get(0)?,
                name: row.get(1)?,
                surname: row.get(2)?,
                email: row.get(3)?,
            })
        })?;

        let mut students = Vec::new();
        for student in student_iter {
            students.push(student?);
        }
        Ok(students)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Student>> {
        self.conn
            .query_row(SELECT_STUDENT_BY_ID, params![id], |row| {
                Ok(Student {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    surname: row.get(2)?,
                    email: row.get(3)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }
}
