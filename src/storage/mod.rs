//! 记录服务访问层
//!
//! `RecordStore` 对应远端 REST 服务的五种操作；`RecordStoreExt` 在其上提供
//! 类型化的记录读写。

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{RecordsError, Result};
use crate::models::common::{Record, RecordForm, Resource};

pub mod http_store;
pub mod memory_store;
pub mod register;

pub use http_store::HttpRecordStore;
pub use memory_store::MemoryRecordStore;

#[async_trait]
pub trait RecordStore: Send + Sync {
    // 列出集合
    async fn list(&self, resource: Resource) -> Result<Vec<Value>>;
    // 获取单条记录
    async fn get(&self, resource: Resource, id: i64) -> Result<Value>;
    // 创建记录，服务端可能不返回响应体
    async fn create(&self, resource: Resource, body: Value) -> Result<Option<Value>>;
    // 部分更新记录
    async fn update(&self, resource: Resource, id: i64, body: Value) -> Result<Option<Value>>;
    // 删除记录
    async fn delete(&self, resource: Resource, id: i64) -> Result<()>;
}

/// 类型化的记录读写
#[async_trait]
pub trait RecordStoreExt: RecordStore {
    async fn list_records<R: Record>(&self) -> Result<Vec<R>> {
        let values = self.list(R::RESOURCE).await?;
        values
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(RecordsError::from))
            .collect()
    }

    async fn get_record<R: Record>(&self, id: i64) -> Result<R> {
        let value = self.get(R::RESOURCE, id).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn create_record<F: RecordForm>(&self, form: &F) -> Result<Option<F::Record>> {
        let body = form.to_body()?;
        let created = self.create(F::Record::RESOURCE, body).await?;
        decode_optional(created)
    }

    async fn update_record<F: RecordForm>(&self, id: i64, form: &F) -> Result<Option<F::Record>> {
        let body = form.to_body()?;
        let updated = self.update(F::Record::RESOURCE, id, body).await?;
        decode_optional(updated)
    }

    async fn delete_record<R: Record>(&self, id: i64) -> Result<()> {
        self.delete(R::RESOURCE, id).await
    }
}

impl<T: RecordStore + ?Sized> RecordStoreExt for T {}

/// 响应体无法解析为记录时按空成功处理
fn decode_optional<R: Record>(value: Option<Value>) -> Result<Option<R>> {
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// 根据配置创建存储后端
pub fn create_store(config: &AppConfig) -> Result<Arc<dyn RecordStore>> {
    let store_type = config.store.store_type.as_str();
    let constructor = register::get_store_plugin(store_type).ok_or_else(|| {
        RecordsError::store_plugin_not_found(format!("Unknown store type: {store_type}"))
    })?;
    constructor(config)
}
