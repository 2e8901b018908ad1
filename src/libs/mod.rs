//! Shared infrastructure for the tutordesk application.
//!
//! Holds the pieces every surface (CLI commands, HTTP server, tests) leans
//! on: configuration loading, platform data paths, the central message
//! catalog and terminal table rendering.

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod view;
