#[derive(Debug, Clone)]
pub enum Message {
    // === SEED MESSAGES ===
    SeedStarting,
    SeedCompleted {
        subjects: usize,
        teachers: usize,
        students: usize,
        windows: usize,
        lessons: usize,
    },

    // === SERVER MESSAGES ===
    ServerListening(String), // address
    ServerStopped,

    // === BOOKING MESSAGES ===
    LessonBooked(i64),  // lesson id
    SlotTaken,
    InvalidTimestamp(String), // raw input

    // === TEACHER MESSAGES ===
    TeacherAdded(i64), // teacher id
    TeacherNotFound(i64),
    RatingOutOfRange(f64),
    UnknownSubject(String),
    DuplicateTeacherEmail(String),
    AvailabilityNotFound(i64),

    // === STUDENT MESSAGES ===
    StudentNotFound(i64),

    // === REPORT MESSAGES ===
    StatsHeader,
    WeekdayStudentCount(i64),
    WeekendTeacherCount(i64),
    TopStudent {
        name: String,
        surname: String,
        email: String,
        lessons: i64,
    },
    NoStudentsRecorded,
    TopSubject(String, i64),        // name, lesson count
    NoLessonsRecorded,
    LessonsForSubject(String, i64), // name, count
    LessonsOnWeekday(String, i64),  // weekday, count
    TeacherDayHeader(i64, String),  // teacher id, date
    NoLessonsForTeacherDay(i64, String),

    // === PROBE MESSAGES ===
    ProbeTarget(String),            // base url
    ProbeCase(String),              // endpoint description
    ProbeResponse(u16, String),     // status, body
    ProbeEmptyResponse(u16),        // status

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigModuleServer,

    // === DATABASE MESSAGES ===
    DbConnectionFailed,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,

    // === PROMPTS ===
    PromptServerHost,
    PromptServerPort,
}
