use std::sync::Arc;

use super::confirm::Confirm;
use super::notifier::Notifier;
use super::view_model::ViewModel;
use crate::models::Outcome;
use crate::models::teachers::entities::Teacher;
use crate::models::teachers::responses::TeacherRow;
use crate::storage::RecordStore;

/// 教师管理界面
pub struct TeacherScreen {
    view: ViewModel<Teacher>,
}

impl TeacherScreen {
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            view: ViewModel::new(store, notifier),
        }
    }

    pub fn view(&self) -> &ViewModel<Teacher> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewModel<Teacher> {
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

    pub fn rows(&self) -> Vec<TeacherRow> {
        self.view.records().iter().map(TeacherRow::from).collect()
    }
}
