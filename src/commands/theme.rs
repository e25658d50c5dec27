use clap::Subcommand;

use crate::models::{Notification, Outcome};
use crate::runtime::StartupContext;
use crate::services::system::Theme;

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Print the current theme
    Show,
    /// Switch to the given theme
    Set { theme: Theme },
    /// Switch between light and dark
    Toggle,
}

pub async fn run(cmd: ThemeCommand, ctx: &mut StartupContext) -> Outcome {
    let changed = match cmd {
        ThemeCommand::Show => {
            println!("{}", ctx.theme.current());
            return Outcome::Completed;
        }
        ThemeCommand::Set { theme } => ctx.theme.set(theme).await,
        ThemeCommand::Toggle => ctx.theme.toggle().await,
    };

    match changed {
        Ok(theme) => {
            ctx.notifier
                .notify(Notification::success(format!("Theme set to {theme}")));
            Outcome::Completed
        }
        Err(e) => {
            ctx.notifier.notify(Notification::error(format!(
                "Error saving theme: {}",
                e.message()
            )));
            Outcome::Failed
        }
    }
}
