use clap::{Args, Subcommand};

use super::{add_record, confirmer, edit_record, list_and_print, show};
use crate::models::Outcome;
use crate::models::teachers::entities::Teacher;
use crate::models::teachers::requests::TeacherForm;
use crate::runtime::StartupContext;
use crate::services::TeacherScreen;

#[derive(Subcommand, Debug)]
pub enum TeacherCommand {
    /// List all teachers
    List,
    /// Print one teacher as JSON
    Show { id: i64 },
    /// Create a teacher
    Add(TeacherArgs),
    /// Change fields of an existing teacher
    Edit {
        id: i64,
        #[command(flatten)]
        fields: TeacherArgs,
    },
    /// Delete a teacher
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct TeacherArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub specialization: Option<String>,
    /// National tax id
    #[arg(long)]
    pub tax_id: Option<String>,
}

impl From<TeacherArgs> for TeacherForm {
    fn from(args: TeacherArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.phone,
            department: args.department,
            specialization: args.specialization,
            tax_id: args.tax_id,
        }
    }
}

pub async fn run(cmd: TeacherCommand, ctx: &mut StartupContext) -> Outcome {
    let mut screen = TeacherScreen::new(ctx.store.clone(), ctx.notifier.clone());
    match cmd {
        TeacherCommand::List => list_and_print!(screen),
        TeacherCommand::Show { id } => show::<Teacher>(ctx, id).await,
        TeacherCommand::Add(fields) => add_record!(screen, TeacherForm::from(fields)),
        TeacherCommand::Edit { id, fields } => edit_record!(screen, id, TeacherForm::from(fields)),
        TeacherCommand::Delete { id, yes } => screen.delete(id, confirmer(yes).as_ref()).await,
    }
}
