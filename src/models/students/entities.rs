use serde::{Deserialize, Serialize};

use super::requests::StudentForm;
use crate::models::common::{Record, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    // 名
    #[serde(default, deserialize_with = "crate::models::common::null_as_default")]
    pub first_name: String,
    // 姓
    #[serde(default, deserialize_with = "crate::models::common::null_as_default")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<String>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Record for Student {
    const RESOURCE: Resource = Resource::Students;
    type Form = StudentForm;

    fn id(&self) -> Option<i64> {
        self.id
    }
}
