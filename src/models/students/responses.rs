use tabled::Tabled;

use super::entities::Student;
use crate::models::{display_id, display_opt};

// 学生列表行
#[derive(Debug, Clone, Tabled)]
pub struct StudentRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Enrolled")]
    pub enrollment_date: String,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            id: display_id(student.id),
            name: student.full_name(),
            email: display_opt(student.email.as_deref()),
            enrollment_date: display_opt(student.enrollment_date.as_deref()),
        }
    }
}
