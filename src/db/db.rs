use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "tutordesk.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database and applies pending migrations.
    pub fn new() -> Result<Db> {
        let mut conn = Self::open()?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the database without running migrations.
    ///
    /// Used by migration tooling and tests that drive the
    /// `MigrationManager` themselves.
    pub fn new_without_migrations() -> Result<Connection> {
        Self::open()
    }

    fn open() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn: Connection = Connection::open(db_file_path)?;

        Ok(conn)
    }
}
