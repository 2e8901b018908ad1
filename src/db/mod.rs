//! Database layer for the tutordesk application.
//!
//! A complete persistence layer built on SQLite with one module per
//! entity, a versioned migration bootstrap and a set of read-only
//! reporting queries. Repository structs own their connection; each
//! surface (command or HTTP handler) opens its own short-lived one.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tutordesk::db::{db::Db, teachers::Teachers};
//!
//! # fn main() -> anyhow::Result<()> {
//! let db = Db::new()?;
//! let mut teachers = Teachers::new()?;
//! let all = teachers.list()?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Subject catalog with the fixed allowed-name set.
pub mod subjects;

/// Teacher records with rating and subject-list validation.
pub mod teachers;

/// Student records.
pub mod students;

/// Lesson booking, conflict checks and per-student listings.
pub mod lessons;

/// Per-teacher availability windows.
pub mod availability;

/// Destructive sample-data population.
pub mod seed;

/// Read-only reporting queries.
pub mod reports;
