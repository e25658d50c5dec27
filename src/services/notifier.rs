//! 用户提示通道
//!
//! 界面服务不向外传播错误，所有结果都以提示形式交给 `Notifier`。

use std::sync::Mutex;
use tracing::{error, info, warn};

use crate::models::{Notification, NotificationLevel};

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// 输出到 stderr，同时写入日志
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info | NotificationLevel::Success => {
                info!(target: "notification", "{}", notification.message)
            }
            NotificationLevel::Warning => warn!(target: "notification", "{}", notification.message),
            NotificationLevel::Error => error!(target: "notification", "{}", notification.message),
        }
        eprintln!("{notification}");
    }
}

/// 记录所有提示，供测试断言
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.all().pop()
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.received.lock() {
            guard.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut guard) = self.received.lock() {
            guard.push(notification);
        }
    }
}
