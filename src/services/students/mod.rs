use std::sync::Arc;

use super::confirm::Confirm;
use super::notifier::Notifier;
use super::view_model::ViewModel;
use crate::models::Outcome;
use crate::models::students::entities::Student;
use crate::models::students::responses::StudentRow;
use crate::storage::RecordStore;

/// 学生管理界面
pub struct StudentScreen {
    view: ViewModel<Student>,
}

impl StudentScreen {
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            view: ViewModel::new(store, notifier),
        }
    }

    pub fn view(&self) -> &ViewModel<Student> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewModel<Student> {
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

    pub fn rows(&self) -> Vec<StudentRow> {
        self.view.records().iter().map(StudentRow::from).collect()
    }
}
