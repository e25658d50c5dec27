use serde::{Deserialize, Serialize};

use super::requests::TeacherForm;
use crate::models::common::{Record, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::common::null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    // 税号，接口字段名为 cpf
    #[serde(rename = "cpf", default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

impl Record for Teacher {
    const RESOURCE: Resource = Resource::Teachers;
    type Form = TeacherForm;

    fn id(&self) -> Option<i64> {
        self.id
    }
}
