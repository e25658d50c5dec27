use std::sync::Arc;

use super::confirm::Confirm;
use super::notifier::Notifier;
use super::view_model::ViewModel;
use crate::models::Outcome;
use crate::models::courses::entities::Course;
use crate::models::courses::responses::CourseRow;
use crate::storage::RecordStore;

/// 课程管理界面
pub struct CourseScreen {
    view: ViewModel<Course>,
}

impl CourseScreen {
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            view: ViewModel::new(store, notifier),
        }
    }

    pub fn view(&self) -> &ViewModel<Course> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewModel<Course> {
        &mut self.view
    }

    pub async fn load(&mut self) -> Outcome {
        self.view.load().await
    }

    pub async fn submit(&mut self) -> Outcome {
        self.view.submit().await
    }

    pub async fn delete(&mut self, id: i64, confirm: &dyn Confirm) -> Outcome {
        self.view.delete(id, confirm).await
    }

    pub fn rows(&self) -> Vec<CourseRow> {
        self.view.records().iter().map(CourseRow::from).collect()
    }
}
