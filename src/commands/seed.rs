use crate::db::db::Db;
use crate::db::seed;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    msg_print!(Message::SeedStarting);
    let mut db = Db::new()?;
    let summary = seed::run(&mut db.conn)?;
    msg_success!(Message::SeedCompleted {
        subjects: summary.subjects,
        teachers: summary.teachers,
        students: summary.students,
        windows: summary.windows,
        lessons: summary.lessons,
    });
    Ok(())
}
