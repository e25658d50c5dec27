//! 外键到显示名称的解析；缺失引用显示占位符，不报错

use crate::models::PLACEHOLDER;
use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;

pub fn student_name(students: &[Student], id: Option<i64>) -> String {
    id.and_then(|id| students.iter().find(|s| s.id == Some(id)))
        .map(Student::full_name)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn course_name(courses: &[Course], id: Option<i64>) -> String {
    id.and_then(|id| courses.iter().find(|c| c.id == Some(id)))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
