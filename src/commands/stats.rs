use crate::db::reports::Reports;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Weekday};
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Subject for the per-subject lesson count
    #[arg(long, default_value = "math")]
    subject: String,
    /// Weekday for the per-weekday lesson count
    #[arg(long, default_value = "wednesday")]
    weekday: String,
    /// Teacher whose day schedule is printed
    #[arg(long, default_value_t = 4)]
    teacher_id: i64,
    /// Day of the teacher schedule (YYYY-MM-DD)
    #[arg(long, default_value = "2024-12-14")]
    date: NaiveDate,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let weekday: Weekday = args
        .weekday
        .parse()
        .map_err(|_| anyhow!("unrecognized weekday: {}", args.weekday))?;

    let mut reports = Reports::new()?;

    msg_print!(Message::StatsHeader, true);
    msg_info!(Message::WeekdayStudentCount(reports.weekday_student_count()?));
    msg_info!(Message::WeekendTeacherCount(reports.weekend_teacher_count()?));

    match reports.top_student()? {
        Some(top) => msg_info!(Message::TopStudent {
            name: top.name,
            surname: top.surname,
            email: top.email,
            lessons: top.lesson_count,
        }),
        None => msg_info!(Message::NoStudentsRecorded),
    }
    match reports.top_subject()? {
        Some(top) => msg_info!(Message::TopSubject(top.name, top.lesson_count)),
        None => msg_info!(Message::NoLessonsRecorded),
    }

    msg_info!(Message::LessonsForSubject(
        args.subject.clone(),
        reports.lessons_for_subject(&args.subject)?
    ));
    msg_info!(Message::LessonsOnWeekday(args.weekday.clone(), reports.lessons_on_weekday(weekday)?));

    let day_lessons = reports.teacher_lessons_on_day(args.teacher_id, args.date)?;
    if day_lessons.is_empty() {
        msg_info!(Message::NoLessonsForTeacherDay(args.teacher_id, args.date.to_string()));
    } else {
        msg_print!(Message::TeacherDayHeader(args.teacher_id, args.date.to_string()), true);
        View::day_lessons(&day_lessons)?;
    }

    Ok(())
}
