use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::requests::EnrollmentForm;
use crate::models::common::{Record, Resource};

/// 选课状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Inactive,
    Completed,
    Suspended,
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Inactive => "inactive",
            EnrollmentStatus::Completed => "completed",
            EnrollmentStatus::Suspended => "suspended",
        };
        f.write_str(s)
    }
}

impl FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(EnrollmentStatus::Active),
            "inactive" => Ok(EnrollmentStatus::Inactive),
            "completed" => Ok(EnrollmentStatus::Completed),
            "suspended" => Ok(EnrollmentStatus::Suspended),
            other => Err(format!(
                "unknown enrollment status '{other}' (expected active, inactive, completed or suspended)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    // 外键可能为 null，显示为占位符
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::common::null_as_default")]
    pub enrollment_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EnrollmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<i64>,
}

impl Enrollment {
    /// 未设置时按 active 处理
    pub fn effective_status(&self) -> EnrollmentStatus {
        self.status.unwrap_or_default()
    }
}

impl Record for Enrollment {
    const RESOURCE: Resource = Resource::Enrollments;
    type Form = EnrollmentForm;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_text() {
        for status in [
            EnrollmentStatus::Active,
            EnrollmentStatus::Inactive,
            EnrollmentStatus::Completed,
            EnrollmentStatus::Suspended,
        ] {
            assert_eq!(status.to_string().parse::<EnrollmentStatus>(), Ok(status));
        }
        assert!("paused".parse::<EnrollmentStatus>().is_err());
    }

    #[test]
    fn test_missing_status_defaults_to_active() {
        let enrollment: Enrollment = serde_json::from_value(serde_json::json!({
            "id": 5, "studentId": 1, "courseId": 2, "enrollmentDate": "2024-02-01"
        }))
        .unwrap();
        assert_eq!(enrollment.effective_status(), EnrollmentStatus::Active);
    }

    #[test]
    fn test_null_references_deserialize() {
        let enrollment: Enrollment = serde_json::from_value(serde_json::json!({
            "id": 6, "studentId": null, "courseId": null, "enrollmentDate": null
        }))
        .unwrap();
        assert_eq!(enrollment.student_id, None);
        assert_eq!(enrollment.course_id, None);
        assert_eq!(enrollment.enrollment_date, "");
    }
}
