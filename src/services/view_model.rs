//! 单个界面的视图状态
//!
//! 持有最近一次成功获取的记录列表和一份编辑草稿。每次变更成功后丢弃草稿并
//! 重新获取列表，不做乐观合并。请求失败时保留原有列表，只发出提示。

use std::sync::Arc;
use tracing::error;

use super::confirm::Confirm;
use super::notifier::Notifier;
use crate::errors::{RecordsError, Result};
use crate::models::{Draft, Notification, Outcome, Record, RecordForm};
use crate::storage::{RecordStore, RecordStoreExt};

/// 获取后按作用域过滤记录
pub type RecordFilter<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

pub struct ViewModel<R: Record> {
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
    records: Vec<R>,
    draft: Option<Draft<R::Form>>,
    filter: Option<RecordFilter<R>>,
    loaded: bool,
}

impl<R: Record> ViewModel<R> {
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            records: Vec::new(),
            draft: None,
            filter: None,
            loaded: false,
        }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut Vec<R> {
        &mut self.records
    }

    pub fn find(&self, id: i64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    /// 至少成功加载过一次
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn set_filter(&mut self, filter: Option<RecordFilter<R>>) {
        self.filter = filter;
    }

    /// 获取列表但不改变视图状态
    pub async fn fetch(&self) -> Result<Vec<R>> {
        self.store.list_records::<R>().await
    }

    /// 用新获取的列表替换当前状态
    pub(crate) fn apply(&mut self, records: Vec<R>) {
        self.records = match &self.filter {
            Some(filter) => records.into_iter().filter(|r| filter(r)).collect(),
            None => records,
        };
        self.loaded = true;
    }

    pub async fn load(&mut self) -> Outcome {
        match self.fetch().await {
            Ok(records) => {
                self.apply(records);
                Outcome::Completed
            }
            Err(e) => {
                self.report_failure(format!("Error loading {}", R::RESOURCE.path()), &e);
                Outcome::Failed
            }
        }
    }

    pub fn begin_create(&mut self) {
        self.draft = Some(Draft::New(R::Form::default()));
    }

    /// 进入编辑状态；记录不在当前列表中时返回 false
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(record) = self.find(id) else {
            self.notifier.notify(Notification::warning(format!(
                "{} {id} is not in the loaded list",
                R::RESOURCE.title()
            )));
            return false;
        };
        let form = R::Form::from_record(record);
        self.draft = Some(Draft::Editing { id, form });
        true
    }

    pub fn draft(&self) -> Option<&Draft<R::Form>> {
        self.draft.as_ref()
    }

    pub fn draft_form_mut(&mut self) -> Option<&mut R::Form> {
        self.draft.as_mut().map(Draft::form_mut)
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// 校验并提交草稿，不重新加载
    pub async fn persist_draft(&mut self) -> Outcome {
        let Some(draft) = self.draft.as_ref() else {
            return Outcome::Ignored;
        };

        if let Err(e) = draft.form().validate() {
            self.notifier
                .notify(Notification::warning(e.message().to_string()));
            return Outcome::Invalid;
        }

        let title = R::RESOURCE.title();
        let result = match draft.editing_id() {
            Some(id) => self
                .store
                .update_record(id, draft.form())
                .await
                .map(|_| format!("{title} updated successfully")),
            None => self
                .store
                .create_record(draft.form())
                .await
                .map(|_| format!("{title} created successfully")),
        };

        match result {
            Ok(message) => {
                self.draft = None;
                self.notifier.notify(Notification::success(message));
                Outcome::Completed
            }
            Err(e) => {
                self.report_failure(format!("Error saving {}", R::RESOURCE.singular()), &e);
                Outcome::Failed
            }
        }
    }

    /// 提交草稿，成功后重新获取列表
    pub async fn submit(&mut self) -> Outcome {
        let outcome = self.persist_draft().await;
        if outcome.is_completed() {
            self.load().await;
        }
        outcome
    }

    /// 确认后删除，不重新加载
    pub async fn remove(&mut self, id: i64, confirm: &dyn Confirm) -> Outcome {
        let prompt = format!("Delete {} {id}?", R::RESOURCE.singular());
        if !confirm.confirm(&prompt) {
            return Outcome::Declined;
        }

        match self.store.delete_record::<R>(id).await {
            Ok(()) => {
                if self.draft.as_ref().and_then(Draft::editing_id) == Some(id) {
                    self.draft = None;
                }
                self.notifier.notify(Notification::success(format!(
                    "{} deleted successfully",
                    R::RESOURCE.title()
                )));
                Outcome::Completed
            }
            Err(e) => {
                self.report_failure(format!("Error deleting {}", R::RESOURCE.singular()), &e);
                Outcome::Failed
            }
        }
    }

    /// 确认后删除，成功后重新获取列表
    pub async fn delete(&mut self, id: i64, confirm: &dyn Confirm) -> Outcome {
        let outcome = self.remove(id, confirm).await;
        if outcome.is_completed() {
            self.load().await;
        }
        outcome
    }

    pub(crate) fn report_failure(&self, context: String, err: &RecordsError) {
        error!("{}: {}", context, err);
        self.notifier
            .notify(Notification::error(format!("{context}: {}", err.message())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationLevel;
    use crate::models::courses::entities::Course;
    use crate::models::courses::requests::CourseForm;
    use crate::services::confirm::FixedAnswer;
    use crate::services::notifier::RecordingNotifier;
    use crate::storage::MemoryRecordStore;

    fn setup() -> (ViewModel<Course>, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let store: Arc<dyn RecordStore> = Arc::new(MemoryRecordStore::new());
        (ViewModel::new(store, notifier.clone()), notifier)
    }

    #[tokio::test]
    async fn test_create_discards_draft_and_refetches() {
        let (mut vm, notifier) = setup();
        vm.begin_create();
        vm.draft_form_mut().unwrap().name = Some("Math".into());

        assert_eq!(vm.submit().await, Outcome::Completed);
        assert!(vm.draft().is_none());
        assert_eq!(vm.records().len(), 1);
        assert_eq!(vm.records()[0].name, "Math");
        assert_eq!(
            notifier.last(),
            Some(Notification::success("Course created successfully"))
        );
    }

    #[tokio::test]
    async fn test_invalid_draft_is_kept_and_warned() {
        let (mut vm, notifier) = setup();
        vm.begin_create();

        assert_eq!(vm.submit().await, Outcome::Invalid);
        assert!(vm.draft().is_some());
        let last = notifier.last().unwrap();
        assert_eq!(last.level, NotificationLevel::Warning);
        assert_eq!(last.message, "Course name is required");
        assert!(!vm.is_loaded());
    }

    #[tokio::test]
    async fn test_edit_selects_update_by_id() {
        let (mut vm, _) = setup();
        vm.begin_create();
        vm.draft_form_mut().unwrap().name = Some("Math".into());
        vm.submit().await;
        let id = vm.records()[0].id.unwrap();

        assert!(vm.begin_edit(id));
        assert_eq!(vm.draft().and_then(Draft::editing_id), Some(id));
        vm.draft_form_mut().unwrap().merge(CourseForm {
            credits: Some(4.0),
            ..Default::default()
        });
        assert_eq!(vm.submit().await, Outcome::Completed);
        assert_eq!(vm.records().len(), 1);
        assert_eq!(vm.records()[0].credits, Some(4.0));
    }

    #[tokio::test]
    async fn test_declined_delete_is_noop() {
        let (mut vm, notifier) = setup();
        vm.begin_create();
        vm.draft_form_mut().unwrap().name = Some("Math".into());
        vm.submit().await;
        notifier.clear();

        let id = vm.records()[0].id.unwrap();
        assert_eq!(vm.delete(id, &FixedAnswer(false)).await, Outcome::Declined);
        assert_eq!(vm.records().len(), 1);
        assert!(notifier.all().is_empty());

        assert_eq!(vm.delete(id, &FixedAnswer(true)).await, Outcome::Completed);
        assert!(vm.records().is_empty());
    }

    #[tokio::test]
    async fn test_filter_scopes_records() {
        let (mut vm, _) = setup();
        for name in ["Math", "History", "Music"] {
            vm.begin_create();
            vm.draft_form_mut().unwrap().name = Some(name.into());
            vm.submit().await;
        }
        vm.set_filter(Some(Arc::new(|c: &Course| c.name.starts_with('M'))));
        vm.load().await;
        let names: Vec<_> = vm.records().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Math", "Music"]);
    }
}
