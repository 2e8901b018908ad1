//! # tutordesk
//!
//! A small tutoring-lesson scheduling service: SQLite-backed records of
//! subjects, teachers, students, availability windows and booked lessons,
//! an HTTP/JSON API for listing teachers and booking lessons, reporting
//! queries over the schedule, and a CLI wrapping all of it.
//!
//! ## Structure
//!
//! - [`commands`] - CLI subcommands (`init`, `seed`, `serve`, `teachers`, `stats`, `probe`)
//! - [`db`] - SQLite repositories, migrations, seed data and reports
//! - [`libs`] - configuration, storage paths, messaging and table views
//! - [`server`] - the Axum router, handlers and API error mapping

pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
