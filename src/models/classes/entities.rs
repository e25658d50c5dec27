use serde::{Deserialize, Serialize};

use super::requests::ClassForm;
use crate::models::common::{Record, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    // 班级ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    // 班级名称
    #[serde(default, deserialize_with = "crate::models::common::null_as_default")]
    pub name: String,
    // 所属课程
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
}

impl Record for Class {
    const RESOURCE: Resource = Resource::Classes;
    type Form = ClassForm;

    fn id(&self) -> Option<i64> {
        self.id
    }
}
