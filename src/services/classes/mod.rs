use futures_util::future::try_join;
use std::sync::Arc;

use super::confirm::Confirm;
use super::labels::course_name;
use super::notifier::Notifier;
use super::view_model::ViewModel;
use crate::models::classes::entities::Class;
use crate::models::classes::responses::ClassRow;
use crate::models::courses::entities::Course;
use crate::models::{Outcome, display_id};
use crate::storage::{RecordStore, RecordStoreExt};

/// 班级管理界面，课程列表仅用于显示课程名
pub struct ClassScreen {
    view: ViewModel<Class>,
    courses: Vec<Course>,
}

impl ClassScreen {
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            view: ViewModel::new(store, notifier),
            courses: Vec::new(),
        }
    }

    pub fn view(&self) -> &ViewModel<Class> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewModel<Class> {
        &mut self.view
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// 班级与课程同时获取，任一失败则整体放弃
    pub async fn load(&mut self) -> Outcome {
        let store = self.view.store().clone();
        match try_join(self.view.fetch(), store.list_records::<Course>()).await {
            Ok((classes, courses)) => {
                self.view.apply(classes);
                self.courses = courses;
                Outcome::Completed
            }
            Err(e) => {
                self.view.report_failure("Error loading classes".to_string(), &e);
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

    pub fn rows(&self) -> Vec<ClassRow> {
        self.view
            .records()
            .iter()
            .map(|class| ClassRow {
                id: display_id(class.id),
                name: class.name.clone(),
                course: course_name(&self.courses, class.course_id),
            })
            .collect()
    }
}
