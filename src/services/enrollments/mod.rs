use futures_util::future::try_join3;
use std::sync::Arc;

use super::confirm::Confirm;
use super::labels::{course_name, student_name};
use super::notifier::Notifier;
use super::view_model::ViewModel;
use crate::models::courses::entities::Course;
use crate::models::enrollments::entities::Enrollment;
use crate::models::enrollments::responses::EnrollmentRow;
use crate::models::students::entities::Student;
use crate::models::{Outcome, PLACEHOLDER, display_id, display_number};
use crate::storage::{RecordStore, RecordStoreExt};
use crate::utils::validate::parse_date;

/// 选课管理界面
pub struct EnrollmentScreen {
    view: ViewModel<Enrollment>,
    students: Vec<Student>,
    courses: Vec<Course>,
}

impl EnrollmentScreen {
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            view: ViewModel::new(store, notifier),
            students: Vec::new(),
            courses: Vec::new(),
        }
    }

    pub fn view(&self) -> &ViewModel<Enrollment> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewModel<Enrollment> {
        &mut self.view
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// 选课、学生、课程三个列表同时获取，全部成功才更新
    pub async fn load(&mut self) -> Outcome {
        let store = self.view.store().clone();
        let joined = try_join3(
            self.view.fetch(),
            store.list_records::<Student>(),
            store.list_records::<Course>(),
        )
        .await;

        match joined {
            Ok((enrollments, students, courses)) => {
                self.view.apply(enrollments);
                self.students = students;
                self.courses = courses;
                Outcome::Completed
            }
            Err(e) => {
                self.view
                    .report_failure("Error loading enrollments".to_string(), &e);
                Outcome::Failed
            }
        }
    }

    pub async fn submit(&mut self) -> Outcome {
        let outcome = self.view.persist_draft().await;
        if outcome.is_completed() {
            self.load().await;
        }
        outcome
    }

    pub async fn delete(&mut self, id: i64, confirm: &dyn Confirm) -> Outcome {
        let outcome = self.view.remove(id, confirm).await;
        if outcome.is_completed() {
            self.load().await;
        }
        outcome
    }

    pub fn rows(&self) -> Vec<EnrollmentRow> {
        self.view
            .records()
            .iter()
            .map(|e| EnrollmentRow {
                id: display_id(e.id),
                student: student_name(&self.students, e.student_id),
                course: course_name(&self.courses, e.course_id),
                enrollment_date: parse_date(&e.enrollment_date)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
                status: e.effective_status().to_string(),
                grade: display_number(e.grade),
            })
            .collect()
    }
}
