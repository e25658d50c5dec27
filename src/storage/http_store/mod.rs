//! 基于 reqwest 的远端记录服务实现
//!
//! 所有请求都带 `Content-Type: application/json`；非 2xx 响应统一转换为
//! `RecordsError::Api`，响应体原样保留。不做超时与重试。

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, error};

use super::RecordStore;
use crate::config::normalize_base_url;
use crate::errors::{RecordsError, Result};
use crate::models::common::Resource;

#[derive(Clone)]
pub struct HttpRecordStore {
    client: Client,
    base_url: String,
}

impl HttpRecordStore {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build().map_err(|e| {
            RecordsError::configuration(format!("Failed to construct HTTP client: {e}"))
        })?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, method: Method, path: String, body: Option<Value>) -> Result<Option<Value>> {
        debug!("{} {}", method, path);

        let mut builder = self
            .client
            .request(method.clone(), self.url(&path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(&body)?);
        }

        let response = builder.send().await.map_err(|e| {
            error!("{} {} failed: {}", method, path, e);
            RecordsError::network(format!("{method} {path}: {e}"))
        })?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let err = RecordsError::from_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                &text,
            );
            error!("{} {} returned {}", method, path, err.message());
            return Err(err);
        }

        Ok(parse_body(&text))
    }
}

/// 空响应体或无法解析的响应体都视为空成功
pub(crate) fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn list(&self, resource: Resource) -> Result<Vec<Value>> {
        match self
            .send(Method::GET, resource.collection_path(), None)
            .await?
        {
            Some(Value::Array(items)) => Ok(items),
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(other) => Err(RecordsError::serialization(format!(
                "Expected a JSON array from {}, got {other}",
                resource.collection_path()
            ))),
        }
    }

    async fn get(&self, resource: Resource, id: i64) -> Result<Value> {
        self.send(Method::GET, resource.item_path(id), None)
            .await?
            .ok_or_else(|| {
                RecordsError::not_found(format!("{} {id} returned no body", resource.singular()))
            })
    }

    async fn create(&self, resource: Resource, body: Value) -> Result<Option<Value>> {
        self.send(Method::POST, resource.collection_path(), Some(body))
            .await
    }

    async fn update(&self, resource: Resource, id: i64, body: Value) -> Result<Option<Value>> {
        self.send(Method::PUT, resource.item_path(id), Some(body))
            .await
    }

    async fn delete(&self, resource: Resource, id: i64) -> Result<()> {
        self.send(Method::DELETE, resource.item_path(id), None)
            .await
            .map(|_| ())
    }
}
