use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::notifier::{ConsoleNotifier, Notifier};
use crate::services::system::{FilePreferenceStore, ThemePreference};
use crate::storage::register::debug_store_registry;
use crate::storage::{RecordStore, create_store};

pub struct StartupContext {
    pub store: Arc<dyn RecordStore>,
    pub notifier: Arc<dyn Notifier>,
    pub theme: ThemePreference,
    pub export_dir: PathBuf,
}

/// 命令执行前的准备：创建存储后端、提示通道，读取主题偏好
pub async fn prepare_startup(config: &AppConfig) -> Result<StartupContext> {
    info!(
        "Using {} record store ({})",
        config.store.store_type, config.api.base_url
    );
    debug_store_registry();
    let store = create_store(config)?;

    let theme = ThemePreference::load(Box::new(FilePreferenceStore::new(
        &config.ui.theme_file,
    )))
    .await;
    debug!("Theme preference: {}", theme.current());

    Ok(StartupContext {
        store,
        notifier: Arc::new(ConsoleNotifier),
        theme,
        export_dir: PathBuf::from(&config.export.output_dir),
    })
}
