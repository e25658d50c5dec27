//! 进程内记录服务
//!
//! 与远端服务契约一致：按资源递增分配 ID，PUT 合并字段，未知 ID 返回 404。
//! 用于测试和离线演示。

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::debug;

use super::RecordStore;
use crate::errors::{RecordsError, Result};
use crate::models::common::Resource;

#[derive(Debug, Default)]
struct Collection {
    next_id: i64,
    items: BTreeMap<i64, Map<String, Value>>,
}

#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    collections: RwLock<HashMap<Resource, Collection>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置数据，返回分配的 ID
    pub async fn seed(&self, resource: Resource, body: Value) -> Result<i64> {
        let created = self.create(resource, body).await?;
        created
            .as_ref()
            .and_then(|v| v.get("id"))
            .and_then(Value::as_i64)
            .ok_or_else(|| RecordsError::serialization("Seeded record has no id"))
    }

    fn not_found(resource: Resource, id: i64) -> RecordsError {
        RecordsError::from_status(
            404,
            "Not Found",
            &format!("{} {id} not found", resource.singular()),
        )
    }
}

fn as_object(resource: Resource, body: Value) -> Result<Map<String, Value>> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(RecordsError::from_status(
            400,
            "Bad Request",
            &format!("{} body must be a JSON object, got {other}", resource.singular()),
        )),
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list(&self, resource: Resource) -> Result<Vec<Value>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(&resource)
            .map(|c| c.items.values().cloned().map(Value::Object).collect())
            .unwrap_or_default())
    }

    async fn get(&self, resource: Resource, id: i64) -> Result<Value> {
        let guard = self.collections.read().await;
        guard
            .get(&resource)
            .and_then(|c| c.items.get(&id))
            .cloned()
            .map(Value::Object)
            .ok_or_else(|| Self::not_found(resource, id))
    }

    async fn create(&self, resource: Resource, body: Value) -> Result<Option<Value>> {
        let mut map = as_object(resource, body)?;
        let mut guard = self.collections.write().await;
        let collection = guard.entry(resource).or_default();
        collection.next_id += 1;
        let id = collection.next_id;
        map.insert("id".to_string(), Value::from(id));
        collection.items.insert(id, map.clone());
        debug!("memory store: created {} {}", resource.singular(), id);
        Ok(Some(Value::Object(map)))
    }

    async fn update(&self, resource: Resource, id: i64, body: Value) -> Result<Option<Value>> {
        let patch = as_object(resource, body)?;
        let mut guard = self.collections.write().await;
        let item = guard
            .get_mut(&resource)
            .and_then(|c| c.items.get_mut(&id))
            .ok_or_else(|| Self::not_found(resource, id))?;
        for (key, value) in patch {
            if key != "id" {
                item.insert(key, value);
            }
        }
        Ok(Some(Value::Object(item.clone())))
    }

    async fn delete(&self, resource: Resource, id: i64) -> Result<()> {
        let mut guard = self.collections.write().await;
        guard
            .get_mut(&resource)
            .and_then(|c| c.items.remove(&id))
            .map(|_| ())
            .ok_or_else(|| Self::not_found(resource, id))
    }
}
