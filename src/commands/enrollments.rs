use clap::{Args, Subcommand};

use super::{add_record, confirmer, edit_record, list_and_print, show};
use crate::models::Outcome;
use crate::models::enrollments::entities::{Enrollment, EnrollmentStatus};
use crate::models::enrollments::requests::EnrollmentForm;
use crate::runtime::StartupContext;
use crate::services::EnrollmentScreen;

#[derive(Subcommand, Debug)]
pub enum EnrollmentCommand {
    /// List enrollments with student and course names
    List,
    /// Print one enrollment as JSON
    Show { id: i64 },
    /// Enroll a student; the date defaults to today and the status to active
    Add(EnrollmentArgs),
    /// Change fields of an existing enrollment
    Edit {
        id: i64,
        #[command(flatten)]
        fields: EnrollmentArgs,
    },
    /// Delete an enrollment
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct EnrollmentArgs {
    #[arg(long)]
    pub student: Option<i64>,
    #[arg(long)]
    pub course: Option<i64>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// active, inactive, completed or suspended
    #[arg(long)]
    pub status: Option<EnrollmentStatus>,
    #[arg(long)]
    pub grade: Option<f64>,
    #[arg(long)]
    pub teacher: Option<i64>,
}

impl From<EnrollmentArgs> for EnrollmentForm {
    fn from(args: EnrollmentArgs) -> Self {
        Self {
            student_id: args.student,
            course_id: args.course,
            enrollment_date: args.date,
            status: args.status,
            grade: args.grade,
            teacher_id: args.teacher,
        }
    }
}

pub async fn run(cmd: EnrollmentCommand, ctx: &mut StartupContext) -> Outcome {
    let mut screen = EnrollmentScreen::new(ctx.store.clone(), ctx.notifier.clone());
    match cmd {
        EnrollmentCommand::List => list_and_print!(screen),
        EnrollmentCommand::Show { id } => show::<Enrollment>(ctx, id).await,
        EnrollmentCommand::Add(fields) => add_record!(screen, EnrollmentForm::from(fields)),
        EnrollmentCommand::Edit { id, fields } => {
            edit_record!(screen, id, EnrollmentForm::from(fields))
        }
        EnrollmentCommand::Delete { id, yes } => screen.delete(id, confirmer(yes).as_ref()).await,
    }
}
