use clap::{Args, Subcommand};

use super::{add_record, confirmer, edit_record, list_and_print, show};
use crate::models::Outcome;
use crate::models::classes::entities::Class;
use crate::models::classes::requests::ClassForm;
use crate::runtime::StartupContext;
use crate::services::ClassScreen;

#[derive(Subcommand, Debug)]
pub enum ClassCommand {
    /// List all classes with their course
    List,
    /// Print one class as JSON
    Show { id: i64 },
    /// Create a class
    Add(ClassArgs),
    /// Change fields of an existing class
    Edit {
        id: i64,
        #[command(flatten)]
        fields: ClassArgs,
    },
    /// Delete a class
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ClassArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub course: Option<i64>,
}

impl From<ClassArgs> for ClassForm {
    fn from(args: ClassArgs) -> Self {
        Self {
            name: args.name,
            course_id: args.course,
        }
    }
}

pub async fn run(cmd: ClassCommand, ctx: &mut StartupContext) -> Outcome {
    let mut screen = ClassScreen::new(ctx.store.clone(), ctx.notifier.clone());
    match cmd {
        ClassCommand::List => list_and_print!(screen),
        ClassCommand::Show { id } => show::<Class>(ctx, id).await,
        ClassCommand::Add(fields) => add_record!(screen, ClassForm::from(fields)),
        ClassCommand::Edit { id, fields } => edit_record!(screen, id, ClassForm::from(fields)),
        ClassCommand::Delete { id, yes } => screen.delete(id, confirmer(yes).as_ref()).await,
    }
}
