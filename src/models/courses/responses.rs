use tabled::Tabled;

use super::entities::Course;
use crate::models::{display_id, display_number, display_opt};

// 课程列表行
#[derive(Debug, Clone, Tabled)]
pub struct CourseRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Credits")]
    pub credits: String,
    #[tabled(rename = "Department")]
    pub department: String,
    #[tabled(rename = "Hours")]
    pub hours: String,
}

impl From<&Course> for CourseRow {
    fn from(course: &Course) -> Self {
        Self {
            id: display_id(course.id),
            name: course.name.clone(),
            description: display_opt(course.description.as_deref()),
            credits: display_number(course.credits),
            department: display_opt(course.department.as_deref()),
            hours: display_number(course.hours),
        }
    }
}
