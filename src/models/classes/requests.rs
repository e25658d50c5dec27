use serde::Serialize;

use super::entities::Class;
use crate::errors::{RecordsError, Result};
use crate::models::common::RecordForm;
use crate::models::common::record::merge_field;
use crate::utils::validate::is_blank;

// 班级表单草稿
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
}

impl RecordForm for ClassForm {
    type Record = Class;

    fn from_record(record: &Class) -> Self {
        Self {
            name: Some(record.name.clone()),
            course_id: record.course_id,
        }
    }

    fn merge(&mut self, patch: Self) {
        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.course_id, patch.course_id);
    }

    fn validate(&self) -> Result<()> {
        if is_blank(self.name.as_deref()) {
            return Err(RecordsError::validation("Class name is required"));
        }
        Ok(())
    }
}
