use serde::Serialize;

use super::entities::Student;
use crate::errors::{RecordsError, Result};
use crate::models::common::RecordForm;
use crate::models::common::record::merge_field;
use crate::utils::validate::{is_blank, validate_date, validate_email};

// 学生表单草稿
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<String>,
}

impl RecordForm for StudentForm {
    type Record = Student;

    fn from_record(record: &Student) -> Self {
        Self {
            first_name: Some(record.first_name.clone()),
            last_name: Some(record.last_name.clone()),
            email: record.email.clone(),
            enrollment_date: record.enrollment_date.clone(),
        }
    }

    fn merge(&mut self, patch: Self) {
        merge_field(&mut self.first_name, patch.first_name);
        merge_field(&mut self.last_name, patch.last_name);
        merge_field(&mut self.email, patch.email);
        merge_field(&mut self.enrollment_date, patch.enrollment_date);
    }

    fn validate(&self) -> Result<()> {
        if is_blank(self.first_name.as_deref()) || is_blank(self.last_name.as_deref()) {
            return Err(RecordsError::validation(
                "Student first and last name are required",
            ));
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            validate_email(email).map_err(RecordsError::validation)?;
        }
        if let Some(date) = self.enrollment_date.as_deref().filter(|d| !d.is_empty()) {
            validate_date(date).map_err(RecordsError::validation)?;
        }
        Ok(())
    }
}
