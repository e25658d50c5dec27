use serde::{Deserialize, Serialize};

use super::requests::CourseForm;
use crate::models::common::{Record, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::common::null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    // 课时
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
}

impl Record for Course {
    const RESOURCE: Resource = Resource::Courses;
    type Form = CourseForm;

    fn id(&self) -> Option<i64> {
        self.id
    }
}
