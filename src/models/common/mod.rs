pub mod draft;
pub mod notification;
pub mod outcome;
pub mod record;
pub mod resource;

pub use draft::Draft;
pub use notification::{Notification, NotificationLevel};
pub use outcome::Outcome;
pub use record::{Record, RecordForm};
pub(crate) use record::null_as_default;
pub use resource::Resource;

/// 缺失引用的占位符
pub const PLACEHOLDER: &str = "-";
