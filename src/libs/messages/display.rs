//! Display implementation for tutordesk application messages.
//!
//! Converts the structured `Message` enum into human-readable text for
//! terminal output. All user-facing message text lives in this one place,
//! which keeps wording consistent and makes a later localization pass a
//! single-file change.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === SEED MESSAGES ===
            Message::SeedStarting => "Rebuilding the database with sample data...".to_string(),
            Message::SeedCompleted {
                subjects,
                teachers,
                students,
                windows,
                lessons,
            } => format!(
                "Seed completed: {} subjects, {} teachers, {} students, {} availability windows, {} lessons",
                subjects, teachers, students, windows, lessons
            ),

            // === SERVER MESSAGES ===
            Message::ServerListening(addr) => format!("Listening on http://{}", addr),
            Message::ServerStopped => "Server stopped".to_string(),

            // === BOOKING MESSAGES ===
            Message::LessonBooked(id) => format!("Lesson booked with ID: {}", id),
            Message::SlotTaken => "The requested slot is already taken".to_string(),
            Message::InvalidTimestamp(raw) => format!("Invalid timestamp '{}', expected format YYYY-MM-DD HH:MM", raw),

            // === TEACHER MESSAGES ===
            Message::TeacherAdded(id) => format!("Teacher added with ID: {}", id),
            Message::TeacherNotFound(id) => format!("Teacher with ID {} not found", id),
            Message::RatingOutOfRange(rating) => format!("Rating {} is out of range, must be within 0.0 and 5.0", rating),
            Message::UnknownSubject(name) => format!("Unknown subject: {}", name),
            Message::DuplicateTeacherEmail(email) => format!("A teacher with email {} already exists", email),
            Message::AvailabilityNotFound(id) => format!("Availability window with ID {} not found", id),

            // === STUDENT MESSAGES ===
            Message::StudentNotFound(id) => format!("Student with ID {} not found", id),

            // === REPORT MESSAGES ===
            Message::StatsHeader => "📚 Lesson statistics".to_string(),
            Message::WeekdayStudentCount(count) => format!("Students with weekday lessons: {}", count),
            Message::WeekendTeacherCount(count) => format!("Teachers with weekend lessons: {}", count),
            Message::TopStudent {
                name,
                surname,
                email,
                lessons,
            } => format!("Most active student: {} {} <{}> with {} lessons", name, surname, email, lessons),
            Message::NoStudentsRecorded => "No students with lessons recorded".to_string(),
            Message::TopSubject(name, count) => format!("Most popular subject: {} ({} lessons)", name, count),
            Message::NoLessonsRecorded => "No lessons recorded".to_string(),
            Message::LessonsForSubject(name, count) => format!("Lessons in {}: {}", name, count),
            Message::LessonsOnWeekday(weekday, count) => format!("Lessons on {}: {}", weekday, count),
            Message::TeacherDayHeader(id, date) => format!("Lessons for teacher {} on {}:", id, date),
            Message::NoLessonsForTeacherDay(id, date) => format!("No lessons for teacher {} on {}", id, date),

            // === PROBE MESSAGES ===
            Message::ProbeTarget(url) => format!("Probing server at {}", url),
            Message::ProbeCase(case) => format!("### {} ###", case),
            Message::ProbeResponse(status, body) => format!("Status {}: {}", status, body),
            Message::ProbeEmptyResponse(status) => format!("Status {} with empty body", status),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigModuleServer => "Server configuration".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbConnectionFailed => "Failed to connect to database".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),

            // === PROMPTS ===
            Message::PromptServerHost => "Host to bind the HTTP server to".to_string(),
            Message::PromptServerPort => "Port to bind the HTTP server to".to_string(),
        };
        write!(f, "{}", message)
    }
}
