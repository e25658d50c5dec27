use clap::Subcommand;
use std::path::PathBuf;

use super::{confirmer, print_table};
use crate::models::grades::requests::ScoreField;
use crate::models::{Notification, Outcome};
use crate::runtime::StartupContext;
use crate::services::GradeScreen;
use crate::services::grades::report::{SUMMARY_LABEL, format_average};
use crate::services::grades::{ExportFormat, ReportLabels};

#[derive(Subcommand, Debug)]
pub enum GradeCommand {
    /// List the grades of a course with the course average
    List {
        #[arg(long)]
        course: i64,
    },
    /// Record a grade for a student
    Add {
        #[arg(long)]
        course: i64,
        #[arg(long)]
        student: i64,
        #[arg(long)]
        exam: f64,
        #[arg(long)]
        coursework: f64,
    },
    /// Change the scores of an existing grade
    Set {
        id: i64,
        #[arg(long)]
        course: i64,
        #[arg(long)]
        exam: Option<f64>,
        #[arg(long)]
        coursework: Option<f64>,
    },
    /// Delete a grade
    Delete {
        id: i64,
        #[arg(long)]
        course: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Write a grade report for a course
    Export {
        #[arg(long)]
        course: i64,
        /// xlsx, csv or pdf
        #[arg(long, default_value = "xlsx")]
        format: ExportFormat,
        /// ids, names or roster
        #[arg(long, default_value = "ids")]
        labels: ReportLabels,
        /// Output directory, defaults to the configured export directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl GradeCommand {
    fn course(&self) -> i64 {
        match self {
            GradeCommand::List { course }
            | GradeCommand::Add { course, .. }
            | GradeCommand::Set { course, .. }
            | GradeCommand::Delete { course, .. }
            | GradeCommand::Export { course, .. } => *course,
        }
    }
}

pub async fn run(cmd: GradeCommand, ctx: &mut StartupContext) -> Outcome {
    let mut screen = GradeScreen::new(ctx.store.clone(), ctx.notifier.clone());

    // 课程与花名册是所有成绩操作的前提
    let loaded = screen.load().await;
    if !loaded.is_completed() {
        return loaded;
    }
    let loaded = screen.select_course(cmd.course()).await;
    if !loaded.is_completed() {
        return loaded;
    }

    match cmd {
        GradeCommand::List { .. } => {
            let footer = screen
                .course_average()
                .map(|avg| format!("{SUMMARY_LABEL}: {}", format_average(avg)));
            print_table(screen.rows(), footer);
            Outcome::Completed
        }
        GradeCommand::Add {
            student,
            exam,
            coursework,
            ..
        } => {
            screen.begin_create(Some(student));
            if let Some(form) = screen.view_mut().draft_form_mut() {
                form.exam_score = Some(exam);
                form.coursework_score = Some(coursework);
            }
            screen.submit().await
        }
        GradeCommand::Set {
            id,
            exam,
            coursework,
            ..
        } => {
            if exam.is_none() && coursework.is_none() {
                ctx.notifier
                    .notify(Notification::warning("Nothing to change: pass --exam or --coursework"));
                return Outcome::Invalid;
            }
            let edits = [(ScoreField::Exam, exam), (ScoreField::Coursework, coursework)];
            for (field, value) in edits {
                let Some(value) = value else { continue };
                if !screen.set_score(id, field, value) {
                    return Outcome::Ignored;
                }
            }
            screen.save(id).await
        }
        GradeCommand::Delete { id, yes, .. } => screen.delete(id, confirmer(yes).as_ref()).await,
        GradeCommand::Export {
            format,
            labels,
            out,
            ..
        } => {
            let dir = out.unwrap_or_else(|| ctx.export_dir.clone());
            if let Err(e) = tokio::fs::create_dir_all(&dir).await {
                ctx.notifier.notify(Notification::error(format!(
                    "Error exporting grades: cannot create {}: {e}",
                    dir.display()
                )));
                return Outcome::Failed;
            }
            screen.export(format, labels, &dir).await
        }
    }
}
