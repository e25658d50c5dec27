#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rust_edurecords::errors::{RecordsError, Result};
use rust_edurecords::models::Resource;
use rust_edurecords::storage::{MemoryRecordStore, RecordStore};

/// 内存存储外加可控的失败：指定资源的列表请求返回 500
#[derive(Default)]
pub struct ScriptedStore {
    pub inner: MemoryRecordStore,
    failing: Mutex<Vec<Resource>>,
    calls: AtomicUsize,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, resource: Resource) {
        self.failing.lock().unwrap().push(resource);
    }

    pub fn recover(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, resource: Resource) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.lock().unwrap().contains(&resource) {
            return Err(RecordsError::from_status(500, "Internal Server Error", "boom"));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for ScriptedStore {
    async fn list(&self, resource: Resource) -> Result<Vec<Value>> {
        self.check(resource)?;
        self.inner.list(resource).await
    }

    async fn get(&self, resource: Resource, id: i64) -> Result<Value> {
        self.check(resource)?;
        self.inner.get(resource, id).await
    }

    async fn create(&self, resource: Resource, body: Value) -> Result<Option<Value>> {
        self.check(resource)?;
        self.inner.create(resource, body).await
    }

    async fn update(&self, resource: Resource, id: i64, body: Value) -> Result<Option<Value>> {
        self.check(resource)?;
        self.inner.update(resource, id, body).await
    }

    async fn delete(&self, resource: Resource, id: i64) -> Result<()> {
        self.check(resource)?;
        self.inner.delete(resource, id).await
    }
}
