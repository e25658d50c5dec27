use clap::{Args, Subcommand};

use super::{add_record, confirmer, edit_record, list_and_print, show};
use crate::models::Outcome;
use crate::models::students::entities::Student;
use crate::models::students::requests::StudentForm;
use crate::runtime::StartupContext;
use crate::services::StudentScreen;

#[derive(Subcommand, Debug)]
pub enum StudentCommand {
    /// List all students
    List,
    /// Print one student as JSON
    Show { id: i64 },
    /// Create a student
    Add(StudentArgs),
    /// Change fields of an existing student
    Edit {
        id: i64,
        #[command(flatten)]
        fields: StudentArgs,
    },
    /// Delete a student
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct StudentArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub enrollment_date: Option<String>,
}

impl From<StudentArgs> for StudentForm {
    fn from(args: StudentArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            enrollment_date: args.enrollment_date,
        }
    }
}

pub async fn run(cmd: StudentCommand, ctx: &mut StartupContext) -> Outcome {
    let mut screen = StudentScreen::new(ctx.store.clone(), ctx.notifier.clone());
    match cmd {
        StudentCommand::List => list_and_print!(screen),
        StudentCommand::Show { id } => show::<Student>(ctx, id).await,
        StudentCommand::Add(fields) => add_record!(screen, StudentForm::from(fields)),
        StudentCommand::Edit { id, fields } => edit_record!(screen, id, StudentForm::from(fields)),
        StudentCommand::Delete { id, yes } => screen.delete(id, confirmer(yes).as_ref()).await,
    }
}
