use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use super::{HttpRecordStore, MemoryRecordStore, RecordStore};
use crate::config::AppConfig;
use crate::errors::Result;

pub type StoreConstructor =
    Arc<dyn Fn(&AppConfig) -> Result<Arc<dyn RecordStore>> + Send + Sync>;

static STORE_REGISTRY: Lazy<RwLock<HashMap<String, StoreConstructor>>> = Lazy::new(|| {
    let mut builtin: HashMap<String, StoreConstructor> = HashMap::new();
    builtin.insert(
        "http".to_string(),
        Arc::new(|config: &AppConfig| {
            let store = HttpRecordStore::new(&config.api.base_url)?;
            Ok(Arc::new(store) as Arc<dyn RecordStore>)
        }),
    );
    builtin.insert(
        "memory".to_string(),
        Arc::new(|_: &AppConfig| Ok(Arc::new(MemoryRecordStore::new()) as Arc<dyn RecordStore>)),
    );
    RwLock::new(builtin)
});

pub fn register_store_plugin<S: Into<String>>(name: S, constructor: StoreConstructor) {
    let name = name.into();
    let mut registry = STORE_REGISTRY
        .write()
        .expect("Store registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_store_plugin(name: &str) -> Option<StoreConstructor> {
    STORE_REGISTRY
        .read()
        .expect("Store registry lock poisoned")
        .get(name)
        .cloned()
}

pub fn debug_store_registry() {
    let registry = STORE_REGISTRY
        .read()
        .expect("Store registry lock poisoned");
    tracing::debug!("Registered store plugins:");
    for key in registry.keys() {
        tracing::debug!(" - {}", key);
    }
}
