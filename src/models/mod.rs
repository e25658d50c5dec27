//! 数据模型定义
//!
//! 实体为远端服务返回记录的本地副本；表单为编辑草稿；行为列表显示结构。

pub mod classes;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod students;
pub mod teachers;

pub use common::{Draft, Notification, NotificationLevel, Outcome, PLACEHOLDER, Record, RecordForm, Resource};

/// 数字按最短形式显示：8.0 -> "8"，7.5 -> "7.5"
pub fn format_number(value: f64) -> String {
    value.to_string()
}

pub fn display_id(id: Option<i64>) -> String {
    id.map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn display_opt(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn display_number(value: Option<f64>) -> String {
    value
        .map(format_number)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_helpers() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(7.5), "7.5");
        assert_eq!(display_id(None), "-");
        assert_eq!(display_opt(Some("  ")), "-");
        assert_eq!(display_number(Some(4.0)), "4");
    }
}
