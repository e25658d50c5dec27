//! 命令行界面
//!
//! 每个子命令对应一个管理界面，命令只负责参数转换和输出，业务逻辑在
//! `services` 中。

pub mod classes;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod students;
pub mod teachers;
pub mod theme;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::settings::{Panel, Style};
use tabled::{Table, Tabled};

use crate::models::{Notification, Outcome, Record};
use crate::runtime::StartupContext;
use crate::services::confirm::{Confirm, FixedAnswer, StdinConfirm};
use crate::storage::RecordStoreExt;

#[derive(Parser, Debug)]
#[command(
    name = "edurecords",
    version,
    about = "Administration console for the school records service."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage students
    #[command(subcommand)]
    Students(students::StudentCommand),
    /// Manage teachers
    #[command(subcommand)]
    Teachers(teachers::TeacherCommand),
    /// Manage courses
    #[command(subcommand)]
    Courses(courses::CourseCommand),
    /// Manage classes
    #[command(subcommand)]
    Classes(classes::ClassCommand),
    /// Manage enrollments
    #[command(subcommand)]
    Enrollments(enrollments::EnrollmentCommand),
    /// Record and export grades for a course
    #[command(subcommand)]
    Grades(grades::GradeCommand),
    /// Show or change the interface theme
    #[command(subcommand)]
    Theme(theme::ThemeCommand),
}

impl Cli {
    pub async fn run(self, ctx: &mut StartupContext) -> Outcome {
        match self.command {
            Command::Students(cmd) => students::run(cmd, ctx).await,
            Command::Teachers(cmd) => teachers::run(cmd, ctx).await,
            Command::Courses(cmd) => courses::run(cmd, ctx).await,
            Command::Classes(cmd) => classes::run(cmd, ctx).await,
            Command::Enrollments(cmd) => enrollments::run(cmd, ctx).await,
            Command::Grades(cmd) => grades::run(cmd, ctx).await,
            Command::Theme(cmd) => theme::run(cmd, ctx).await,
        }
    }
}

/// `--yes` 跳过交互确认
pub(crate) fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(StdinConfirm)
    }
}

pub(crate) fn print_table<T: Tabled>(rows: Vec<T>, footer: Option<String>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    if let Some(footer) = footer {
        table.with(Panel::footer(footer));
    }
    println!("{table}");
}

/// 输出单条记录的 JSON
pub(crate) async fn show<R: Record>(ctx: &StartupContext, id: i64) -> Outcome {
    match ctx.store.get_record::<R>(id).await {
        Ok(record) => print_json(&record),
        Err(e) => {
            ctx.notifier.notify(Notification::error(format!(
                "Error loading {}: {}",
                R::RESOURCE.singular(),
                e.message()
            )));
            Outcome::Failed
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Outcome {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            Outcome::Completed
        }
        Err(e) => {
            tracing::error!("Failed to render record: {}", e);
            Outcome::Failed
        }
    }
}

/// 列表命令：加载成功后打印表格
macro_rules! list_and_print {
    ($screen:expr) => {{
        let outcome = $screen.load().await;
        if outcome.is_completed() {
            $crate::commands::print_table($screen.rows(), None);
        }
        outcome
    }};
}

/// 新建：以默认草稿为基础合并命令行字段后提交
macro_rules! add_record {
    ($screen:expr, $patch:expr) => {{
        $screen.view_mut().begin_create();
        if let Some(form) = $screen.view_mut().draft_form_mut() {
            $crate::models::RecordForm::merge(form, $patch);
        }
        $screen.submit().await
    }};
}

/// 编辑：先加载列表，再以现有记录为基础合并命令行字段
macro_rules! edit_record {
    ($screen:expr, $id:expr, $patch:expr) => {{
        let loaded = $screen.load().await;
        if !loaded.is_completed() {
            return loaded;
        }
        if !$screen.view_mut().begin_edit($id) {
            return $crate::models::Outcome::Ignored;
        }
        if let Some(form) = $screen.view_mut().draft_form_mut() {
            $crate::models::RecordForm::merge(form, $patch);
        }
        $screen.submit().await
    }};
}

pub(crate) use {add_record, edit_record, list_and_print};
