use serde::Serialize;

use super::entities::Course;
use crate::errors::{RecordsError, Result};
use crate::models::common::RecordForm;
use crate::models::common::record::merge_field;
use crate::utils::validate::is_blank;

// 课程表单草稿
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
}

impl RecordForm for CourseForm {
    type Record = Course;

    fn from_record(record: &Course) -> Self {
        Self {
            name: Some(record.name.clone()),
            description: record.description.clone(),
            credits: record.credits,
            department: record.department.clone(),
            hours: record.hours,
        }
    }

    fn merge(&mut self, patch: Self) {
        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.description, patch.description);
        merge_field(&mut self.credits, patch.credits);
        merge_field(&mut self.department, patch.department);
        merge_field(&mut self.hours, patch.hours);
    }

    fn validate(&self) -> Result<()> {
        if is_blank(self.name.as_deref()) {
            return Err(RecordsError::validation("Course name is required"));
        }
        Ok(())
    }
}
