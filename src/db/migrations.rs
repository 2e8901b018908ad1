//! Database schema migration management and versioning.
//!
//! Tracks applied schema versions in a `migrations` table and applies any
//! pending migrations inside a transaction during database initialization.
//! Entity modules additionally ensure their own tables exist, so a database
//! created by an older binary still works after an upgrade.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema migration with its transformation function.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Function that applies the schema changes within a transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all known migrations, applied in version order.
///
/// Each migration runs in its own transaction and is recorded in the
/// `migrations` table on success, so a failed migration leaves the
/// database at the last good version.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    fn register_migrations(&mut self) {
        // Version 1: the full relational model for lesson scheduling.
        // Subjects, teachers, students, lessons and per-teacher
        // availability windows, plus indices for the lookups the
        // booking flow and the reporting queries perform.
        self.add_migration(1, "create_scheduling_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS subjects (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS teachers (
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
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS students (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    surname TEXT NOT NULL,
                    email TEXT NOT NULL UNIQUE
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS lessons (
                    id INTEGER PRIMARY KEY,
                    teacher_id INTEGER NOT NULL,
                    student_id INTEGER NOT NULL,
                    subject_id INTEGER NOT NULL,
                    scheduled_at TIMESTAMP NOT NULL,
                    FOREIGN KEY (teacher_id) REFERENCES teachers(id) ON DELETE CASCADE,
                    FOREIGN KEY (student_id) REFERENCES students(id) ON DELETE CASCADE,
                    FOREIGN KEY (subject_id) REFERENCES subjects(id) ON DELETE CASCADE
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS teacher_availability (
                    id INTEGER PRIMARY KEY,
                    teacher_id INTEGER,
                    available_from TIME NOT NULL,
                    available_to TIME NOT NULL,
                    FOREIGN KEY (teacher_id) REFERENCES teachers(id) ON DELETE CASCADE
                )",
                [],
            )?;

            // Booking conflict check looks up (teacher, timestamp) pairs
            tx.execute(
                "CREATE INDEX IF NOT EXISTS idx_lessons_teacher_time ON lessons(teacher_id, scheduled_at)",
                [],
            )?;
            // Student lesson listing filters by student and range
            tx.execute("CREATE INDEX IF NOT EXISTS idx_lessons_student ON lessons(student_id)", [])?;
            tx.execute(
                "CREATE INDEX IF NOT EXISTS idx_availability_teacher ON teacher_availability(teacher_id)",
                [],
            )?;

            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all migrations newer than the current database version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = get_db_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));
        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            let tx = conn.transaction()?;
            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            tx.commit()?;

            msg_debug!(Message::MigrationCompleted(migration.version));
        }
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Returns the applied migrations as (version, name) pairs in order.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String)>> {
        let mut stmt = conn.prepare("SELECT version, name FROM migrations ORDER BY version")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut history = Vec::new();
        for row in rows {
            history.push(row?);
        }
        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensures the schema is current, applying pending migrations if needed.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Returns the highest applied migration version, 0 for a fresh database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    let version: u32 = conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| row.get(0))?;
    Ok(version)
}

/// Checks whether any registered migration has not been applied yet.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = get_db_version(conn)?;
    Ok(manager.migrations.iter().any(|m| m.version > current))
}
