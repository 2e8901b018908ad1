//! Destructive sample-data population.
//!
//! Clears every table and rebuilds the store with a fixed dataset: five
//! subjects, five teachers, three students, four availability windows and
//! sixteen lessons spread across December 2024. Row ids are deterministic
//! (1-based, insertion order) because the tables are emptied first; the
//! reporting tests and the sample client rely on that.

use anyhow::Result;
use rusqlite::{params, Connection};

/// Row counts written by the seed routine.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSummary {
    pub subjects: usize,
    pub teachers: usize,
    pub students: usize,
    pub windows: usize,
    pub lessons: usize,
}

const SEED_SUBJECTS: &[&str] = &["math", "physics", "chemistry", "history", "biology"];

// (name, surname, subjects, description, rating, phone, hourly_rate, currency, email)
const SEED_TEACHERS: &[(&str, &str, &str, &str, f64, &str, i64, &str, &str)] = &[
    (
        "Alice",
        "Morgan",
        "math,physics",
        "Specialist in the exact sciences",
        4.8,
        "123456789",
        50,
        "EUR",
        "alice.morgan@example.com",
    ),
    (
        "Brian",
        "Foster",
        "chemistry,biology",
        "Teaching is a passion",
        4.5,
        "987654321",
        60,
        "EUR",
        "brian.foster@example.com",
    ),
    (
        "Clara",
        "Hayes",
        "history",
        "Historian by vocation",
        4.7,
        "456789123",
        45,
        "EUR",
        "clara.hayes@example.com",
    ),
    (
        "Daniel",
        "Reed",
        "math,biology",
        "Maths and biology enthusiast",
        4.9,
        "321654987",
        55,
        "EUR",
        "daniel.reed@example.com",
    ),
    (
        "Emma",
        "Walsh",
        "physics,chemistry",
        "Understanding is the key",
        4.6,
        "789123456",
        65,
        "EUR",
        "emma.walsh@example.com",
    ),
];

// (name, surname, email)
const SEED_STUDENTS: &[(&str, &str, &str)] = &[
    ("Olivia", "Bennett", "olivia.bennett@example.com"),
    ("Jacob", "Turner", "jacob.turner@example.com"),
    ("Zoe", "Parker", "zoe.parker@example.com"),
];

// (teacher_id, available_from, available_to); teacher 5 has no window
const SEED_WINDOWS: &[(i64, &str, &str)] = &[(1, "09:00", "17:00"), (2, "08:00", "16:00"), (3, "14:00", "20:00"), (4, "08:00", "13:00")];

// (subject_id, teacher_id, student_id, scheduled_at)
const SEED_LESSONS: &[(i64, i64, i64, &str)] = &[
    (5, 2, 1, "2024-12-04 10:00"),
    (5, 2, 2, "2024-12-09 11:00"),
    (1, 1, 1, "2024-12-09 12:00"),
    (1, 1, 2, "2024-12-09 13:00"),
    (1, 1, 1, "2024-12-10 14:00"),
    (3, 2, 2, "2024-12-10 15:00"),
    (1, 4, 2, "2024-12-10 16:00"),
    (5, 2, 2, "2024-12-11 10:00"),
    (3, 2, 2, "2024-12-11 11:00"),
    (2, 5, 1, "2024-12-12 12:00"),
    (4, 3, 2, "2024-12-12 13:00"),
    (1, 1, 2, "2024-12-13 14:00"),
    (5, 4, 1, "2024-12-14 15:00"),
    (1, 4, 3, "2024-12-14 16:00"),
    (1, 4, 2, "2024-12-14 17:00"),
    (5, 4, 2, "2024-12-16 18:00"),
];

/// Drops all rows and repopulates the store with the fixed dataset.
pub fn run(conn: &mut Connection) -> Result<SeedSummary> {
    let tx = conn.transaction()?;

    // Children first to keep foreign keys satisfied
    tx.execute("DELETE FROM lessons", [])?;
    tx.execute("DELETE FROM teacher_availability", [])?;
    tx.execute("DELETE FROM teachers", [])?;
    tx.execute("DELETE FROM students", [])?;
    tx.execute("DELETE FROM subjects", [])?;

    for name in SEED_SUBJECTS {
        tx.execute("INSERT INTO subjects (name) VALUES (?1)", params![name])?;
    }

    for (name, surname, subjects, description, rating, phone, hourly_rate, currency, email) in SEED_TEACHERS {
        tx.execute(
            "INSERT INTO teachers (name, surname, subjects, description, rating, phone, hourly_rate, currency, email)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![name, surname, subjects, description, rating, phone, hourly_rate, currency, email],
        )?;
    }

    for (name, surname, email) in SEED_STUDENTS {
        tx.execute(
            "INSERT INTO students (name, surname, email) VALUES (?1, ?2, ?3)",
            params![name, surname, email],
        )?;
    }

    for (teacher_id, from, to) in SEED_WINDOWS {
        tx.execute(
            "INSERT INTO teacher_availability (teacher_id, available_from, available_to) VALUES (?1, ?2, ?3)",
            params![teacher_id, from, to],
        )?;
    }

    for (subject_id, teacher_id, student_id, scheduled_at) in SEED_LESSONS {
        tx.execute(
            "INSERT INTO lessons (teacher_id, student_id, subject_id, scheduled_at) VALUES (?1, ?2, ?3, ?4)",
            params![teacher_id, student_id, subject_id, scheduled_at],
        )?;
    }

    tx.commit()?;

    Ok(SeedSummary {
        subjects: SEED_SUBJECTS.len(),
        teachers: SEED_TEACHERS.len(),
        students: SEED_STUDENTS.len(),
        windows: SEED_WINDOWS.len(),
        lessons: SEED_LESSONS.len(),
    })
}
