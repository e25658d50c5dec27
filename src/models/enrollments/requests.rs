use serde::Serialize;

use super::entities::{Enrollment, EnrollmentStatus};
use crate::errors::{RecordsError, Result};
use crate::models::common::RecordForm;
use crate::models::common::record::merge_field;
use crate::utils::validate::{is_blank, parse_date, validate_date};

// 选课表单草稿
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnrollmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<i64>,
}

impl Default for EnrollmentForm {
    /// 新草稿默认今天入学、状态 active
    fn default() -> Self {
        Self {
            student_id: None,
            course_id: None,
            enrollment_date: Some(chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()),
            status: Some(EnrollmentStatus::Active),
            grade: None,
            teacher_id: None,
        }
    }
}

impl RecordForm for EnrollmentForm {
    type Record = Enrollment;

    fn from_record(record: &Enrollment) -> Self {
        Self {
            student_id: record.student_id,
            course_id: record.course_id,
            // 服务端可能返回完整时间戳，编辑时只保留日期部分
            enrollment_date: Some(
                parse_date(&record.enrollment_date)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| record.enrollment_date.clone()),
            ),
            status: record.status,
            grade: record.grade,
            teacher_id: record.teacher_id,
        }
    }

    fn merge(&mut self, patch: Self) {
        merge_field(&mut self.student_id, patch.student_id);
        merge_field(&mut self.course_id, patch.course_id);
        merge_field(&mut self.enrollment_date, patch.enrollment_date);
        merge_field(&mut self.status, patch.status);
        merge_field(&mut self.grade, patch.grade);
        merge_field(&mut self.teacher_id, patch.teacher_id);
    }

    fn validate(&self) -> Result<()> {
        if self.student_id.is_none()
            || self.course_id.is_none()
            || is_blank(self.enrollment_date.as_deref())
        {
            return Err(RecordsError::validation("Fill in all required fields"));
        }
        if let Some(date) = self.enrollment_date.as_deref() {
            validate_date(date).map_err(RecordsError::validation)?;
        }
        Ok(())
    }
}

impl EnrollmentForm {
    /// 空补丁，用于合并命令行参数
    pub fn patch() -> Self {
        Self {
            student_id: None,
            course_id: None,
            enrollment_date: None,
            status: None,
            grade: None,
            teacher_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_defaults() {
        let form = EnrollmentForm::default();
        assert_eq!(form.status, Some(EnrollmentStatus::Active));
        assert!(form.enrollment_date.is_some());
        assert_eq!(
            form.validate().unwrap_err().message(),
            "Fill in all required fields"
        );
    }

    #[test]
    fn test_merge_with_empty_patch_is_noop() {
        let mut form = EnrollmentForm {
            student_id: Some(1),
            course_id: Some(2),
            ..EnrollmentForm::default()
        };
        let before = form.clone();
        form.merge(EnrollmentForm::patch());
        assert_eq!(form, before);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let form = EnrollmentForm {
            status: Some(EnrollmentStatus::Suspended),
            ..EnrollmentForm::patch()
        };
        assert_eq!(
            form.to_body().unwrap(),
            serde_json::json!({ "status": "suspended" })
        );
    }
}
