//! 配置管理

mod r#impl;
mod structs;

pub use structs::*;
pub use r#impl::normalize_base_url;
