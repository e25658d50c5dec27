//! 界面主题偏好
//!
//! 当前主题由 `ThemePreference` 显式持有；启动时从持久化存储读取，每次修改
//! 通过 `set` 写回。读取失败时使用默认的浅色主题。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

/// 主题持久化钩子
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// 没有保存过偏好时返回 None
    async fn read(&self) -> Result<Option<Theme>>;
    async fn write(&self, theme: Theme) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// 以 JSON 文件保存主题：`{"theme":"dark"}`
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn read(&self) -> Result<Option<Theme>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let file: ThemeFile = serde_json::from_slice(&bytes)?;
                Ok(Some(file.theme))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_vec(&ThemeFile { theme })?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }
}

pub struct ThemePreference {
    current: Theme,
    store: Box<dyn PreferenceStore>,
}

impl ThemePreference {
    /// 读取已保存的主题；文件缺失或损坏时使用默认值
    pub async fn load(store: Box<dyn PreferenceStore>) -> Self {
        let current = match store.read().await {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Failed to read theme preference, using default: {}", e);
                Theme::default()
            }
        };
        Self { current, store }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// 唯一的修改入口，写入失败时不改变当前主题
    pub async fn set(&mut self, theme: Theme) -> Result<Theme> {
        self.store.write(theme).await?;
        debug!("Theme changed: {} -> {}", self.current, theme);
        self.current = theme;
        Ok(theme)
    }

    pub async fn toggle(&mut self) -> Result<Theme> {
        self.set(self.current.toggled()).await
    }
}
