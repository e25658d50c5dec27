use tabled::Tabled;

use super::entities::Teacher;
use crate::models::{display_id, display_opt};

// 教师列表行
#[derive(Debug, Clone, Tabled)]
pub struct TeacherRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Phone")]
    pub phone: String,
    #[tabled(rename = "Department")]
    pub department: String,
    #[tabled(rename = "Specialization")]
    pub specialization: String,
}

impl From<&Teacher> for TeacherRow {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: display_id(teacher.id),
            name: teacher.name.clone(),
            email: display_opt(teacher.email.as_deref()),
            phone: display_opt(teacher.phone.as_deref()),
            department: display_opt(teacher.department.as_deref()),
            specialization: display_opt(teacher.specialization.as_deref()),
        }
    }
}
