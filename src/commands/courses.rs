use clap::{Args, Subcommand};

use super::{add_record, confirmer, edit_record, list_and_print, show};
use crate::models::Outcome;
use crate::models::courses::entities::Course;
use crate::models::courses::requests::CourseForm;
use crate::runtime::StartupContext;
use crate::services::CourseScreen;

#[derive(Subcommand, Debug)]
pub enum CourseCommand {
    /// List all courses
    List,
    /// Print one course as JSON
    Show { id: i64 },
    /// Create a course
    Add(CourseArgs),
    /// Change fields of an existing course
    Edit {
        id: i64,
        #[command(flatten)]
        fields: CourseArgs,
    },
    /// Delete a course
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct CourseArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub credits: Option<f64>,
    #[arg(long)]
    pub department: Option<String>,
    /// Workload in hours
    #[arg(long)]
    pub hours: Option<f64>,
}

impl From<CourseArgs> for CourseForm {
    fn from(args: CourseArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            credits: args.credits,
            department: args.department,
            hours: args.hours,
        }
    }
}

pub async fn run(cmd: CourseCommand, ctx: &mut StartupContext) -> Outcome {
    let mut screen = CourseScreen::new(ctx.store.clone(), ctx.notifier.clone());
    match cmd {
        CourseCommand::List => list_and_print!(screen),
        CourseCommand::Show { id } => show::<Course>(ctx, id).await,
        CourseCommand::Add(fields) => add_record!(screen, CourseForm::from(fields)),
        CourseCommand::Edit { id, fields } => edit_record!(screen, id, CourseForm::from(fields)),
        CourseCommand::Delete { id, yes } => screen.delete(id, confirmer(yes).as_ref()).await,
    }
}
