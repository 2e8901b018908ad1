use crate::db::reports::TeacherDayLesson;
use crate::db::teachers::Teacher;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn teachers(teachers: &Vec<Teacher>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "SURNAME", "SUBJECTS", "RATING", "RATE"]);
        for teacher in teachers {
            table.add_row(row![
                teacher.id.unwrap_or(0),
                teacher.name,
                teacher.surname,
                teacher.subjects,
                teacher.rating,
                format!("{} {}", teacher.hourly_rate, teacher.currency)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn day_lessons(lessons: &Vec<TeacherDayLesson>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["LESSON ID", "TIME", "SUBJECT", "STUDENT ID"]);
        for lesson in lessons {
            table.add_row(row![
                lesson.lesson_id,
                lesson.scheduled_at.format("%H:%M"),
                lesson.subject,
                lesson.student_id
            ]);
        }
        table.printstd();

        Ok(())
    }
}
