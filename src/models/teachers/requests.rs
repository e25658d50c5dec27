use serde::Serialize;

use super::entities::Teacher;
use crate::errors::{RecordsError, Result};
use crate::models::common::RecordForm;
use crate::models::common::record::merge_field;
use crate::utils::validate::{is_blank, validate_email};

// 教师表单草稿
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(rename = "cpf", skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

impl RecordForm for TeacherForm {
    type Record = Teacher;

    fn from_record(record: &Teacher) -> Self {
        Self {
            name: Some(record.name.clone()),
            email: record.email.clone(),
            phone: record.phone.clone(),
            department: record.department.clone(),
            specialization: record.specialization.clone(),
            tax_id: record.tax_id.clone(),
        }
    }

    fn merge(&mut self, patch: Self) {
        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.email, patch.email);
        merge_field(&mut self.phone, patch.phone);
        merge_field(&mut self.department, patch.department);
        merge_field(&mut self.specialization, patch.specialization);
        merge_field(&mut self.tax_id, patch.tax_id);
    }

    fn validate(&self) -> Result<()> {
        if is_blank(self.name.as_deref()) {
            return Err(RecordsError::validation("Teacher name is required"));
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            validate_email(email).map_err(RecordsError::validation)?;
        }
        Ok(())
    }
}
