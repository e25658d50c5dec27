//! 成绩管理界面
//!
//! 先并发加载课程与学生花名册，再按所选课程获取成绩。报表与导出只在当前课程
//! 的成绩成功加载之后才可用。

pub mod export;
pub mod pdf;
pub mod report;

use futures_util::future::try_join;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use super::confirm::Confirm;
use super::labels::student_name;
use super::notifier::Notifier;
use super::view_model::ViewModel;
use crate::errors::RecordsError;
use crate::models::courses::entities::Course;
use crate::models::grades::entities::Grade;
use crate::models::grades::requests::{ScoreField, ScoreUpdate};
use crate::models::grades::responses::GradeRow;
use crate::models::students::entities::Student;
use crate::models::{Notification, Outcome, Resource, display_id, format_number};
use crate::storage::{RecordStore, RecordStoreExt};
use crate::utils::validate::{SCORE_MAX, SCORE_MIN, score_in_range};

pub use export::{ExportFormat, file_name};
pub use report::{GradeReport, ReportLabels, RosterEntry, RowSource};

/// 课程名称未知时使用的范围名称
pub const FALLBACK_SCOPE: &str = "Report";

pub struct GradeScreen {
    view: ViewModel<Grade>,
    courses: Vec<Course>,
    students: Vec<Student>,
    course_id: Option<i64>,
    // 成绩列表对应的课程；与 course_id 不同时报表不可用
    loaded_course: Option<i64>,
}

impl GradeScreen {
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            view: ViewModel::new(store, notifier),
            courses: Vec::new(),
            students: Vec::new(),
            course_id: None,
            loaded_course: None,
        }
    }

    pub fn view(&self) -> &ViewModel<Grade> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewModel<Grade> {
        &mut self.view
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn course_id(&self) -> Option<i64> {
        self.course_id
    }

    /// 并发获取课程与花名册，任一失败则保留原状态
    pub async fn load(&mut self) -> Outcome {
        let store = self.view.store().clone();
        let joined = try_join(
            store.list_records::<Course>(),
            store.list_records::<Student>(),
        )
        .await;

        match joined {
            Ok((courses, students)) => {
                self.courses = courses;
                self.students = students;
                Outcome::Completed
            }
            Err(e) => {
                self.view
                    .report_failure("Error loading courses and students".to_string(), &e);
                Outcome::Failed
            }
        }
    }

    /// 选择课程范围并获取该课程的成绩
    pub async fn select_course(&mut self, course_id: i64) -> Outcome {
        self.course_id = Some(course_id);
        self.view
            .set_filter(Some(Arc::new(move |g: &Grade| g.course_id == Some(course_id))));
        self.load_grades().await
    }

    pub async fn load_grades(&mut self) -> Outcome {
        let Some(course_id) = self.course_id else {
            return Outcome::Ignored;
        };
        let outcome = self.view.load().await;
        if outcome.is_completed() {
            self.loaded_course = Some(course_id);
        }
        outcome
    }

    /// 当前课程的成绩已成功加载
    pub fn is_scope_loaded(&self) -> bool {
        self.course_id.is_some() && self.loaded_course == self.course_id
    }

    /// 行内修改已加载成绩的一项分数；超出 0-10 只告警
    pub fn set_score(&mut self, grade_id: i64, field: ScoreField, value: f64) -> bool {
        let notifier = self.view.notifier().clone();
        let Some(grade) = self
            .view
            .records_mut()
            .iter_mut()
            .find(|g| g.id == Some(grade_id))
        else {
            notifier.notify(Notification::warning(format!(
                "Grade {grade_id} is not in the loaded list"
            )));
            return false;
        };

        if !score_in_range(value) {
            warn!("Score {} for grade {} is out of range", value, grade_id);
            notifier.notify(Notification::warning(format!(
                "Score {} is outside the expected range {}-{}",
                format_number(value),
                format_number(SCORE_MIN),
                format_number(SCORE_MAX)
            )));
        }

        match field {
            ScoreField::Exam => grade.exam_score = value,
            ScoreField::Coursework => grade.coursework_score = value,
        }
        true
    }

    /// 只提交两项分数，成功后重新获取
    pub async fn save(&mut self, grade_id: i64) -> Outcome {
        let Some(grade) = self.view.find(grade_id) else {
            self.view.notifier().notify(Notification::warning(format!(
                "Grade {grade_id} is not in the loaded list"
            )));
            return Outcome::Ignored;
        };
        let update = ScoreUpdate::from(grade);

        let result = match serde_json::to_value(&update) {
            Ok(body) => {
                self.view
                    .store()
                    .update(Resource::Grades, grade_id, body)
                    .await
            }
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(_) => {
                self.view
                    .notifier()
                    .notify(Notification::success("Grade updated successfully"));
                self.load_grades().await;
                Outcome::Completed
            }
            Err(e) => {
                self.view.report_failure("Error saving grade".to_string(), &e);
                Outcome::Failed
            }
        }
    }

    /// 新建成绩草稿，课程默认取当前范围
    pub fn begin_create(&mut self, student_id: Option<i64>) {
        self.view.begin_create();
        let course_id = self.course_id;
        if let Some(form) = self.view.draft_form_mut() {
            form.course_id = course_id;
            form.student_id = student_id;
        }
    }

    pub async fn submit(&mut self) -> Outcome {
        let outcome = self.view.persist_draft().await;
        if outcome.is_completed() {
            self.load_grades().await;
        }
        outcome
    }

    pub async fn delete(&mut self, id: i64, confirm: &dyn Confirm) -> Outcome {
        let outcome = self.view.remove(id, confirm).await;
        if outcome.is_completed() {
            self.load_grades().await;
        }
        outcome
    }

    pub fn roster(&self) -> Vec<RosterEntry> {
        RosterEntry::from_students(&self.students)
    }

    pub fn scope_name(&self) -> String {
        self.course_id
            .and_then(|id| self.courses.iter().find(|c| c.id == Some(id)))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| FALLBACK_SCOPE.to_string())
    }

    pub fn rows(&self) -> Vec<GradeRow> {
        self.view
            .records()
            .iter()
            .map(|g| GradeRow {
                id: display_id(g.id),
                student: student_name(&self.students, g.student_id),
                exam: format_number(g.exam_score),
                coursework: format_number(g.coursework_score),
                average: report::format_average(g.average()),
            })
            .collect()
    }

    /// 当前范围的课程平均分；未加载时为 None
    pub fn course_average(&self) -> Option<f64> {
        self.report(ReportLabels::Ids)
            .map(|r| r.overall_average())
    }

    /// 范围未成功加载时不提供报表
    pub fn report(&self, labels: ReportLabels) -> Option<GradeReport> {
        if !self.is_scope_loaded() {
            return None;
        }
        let roster = self.roster();
        Some(GradeReport::build(
            self.scope_name(),
            self.view.records(),
            labels.source(&roster),
        ))
    }

    /// 生成报表文件写入 `dir`，文件名由课程名称决定
    pub async fn export(&self, format: ExportFormat, labels: ReportLabels, dir: &Path) -> Outcome {
        let notifier = self.view.notifier();
        let Some(report) = self.report(labels) else {
            notifier.notify(Notification::warning(
                "Load the course grades before exporting",
            ));
            return Outcome::Ignored;
        };

        let path = dir.join(file_name(&report.scope, format));
        let written = match export::render(&report, format) {
            Ok(bytes) => tokio::fs::write(&path, bytes)
                .await
                .map_err(RecordsError::from),
            Err(e) => Err(e),
        };

        match written {
            Ok(()) => {
                info!("Grade report written to {}", path.display());
                notifier.notify(Notification::success(format!(
                    "Grade report written to {}",
                    path.display()
                )));
                Outcome::Completed
            }
            Err(e) => {
                self.view
                    .report_failure("Error exporting grades".to_string(), &e);
                Outcome::Failed
            }
        }
    }
}
