use serde::{Deserialize, Serialize};
use std::fmt;

/// 远端记录服务暴露的资源集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Students,
    Teachers,
    Courses,
    Classes,
    Grades,
    Enrollments,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Students,
        Resource::Teachers,
        Resource::Courses,
        Resource::Classes,
        Resource::Grades,
        Resource::Enrollments,
    ];

    /// 集合路径段，例如 `students`
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Students => "students",
            Resource::Teachers => "teachers",
            Resource::Courses => "courses",
            Resource::Classes => "classes",
            Resource::Grades => "grades",
            Resource::Enrollments => "enrollments",
        }
    }

    /// 单数名称，用于提示信息
    pub fn singular(&self) -> &'static str {
        match self {
            Resource::Students => "student",
            Resource::Teachers => "teacher",
            Resource::Courses => "course",
            Resource::Classes => "class",
            Resource::Grades => "grade",
            Resource::Enrollments => "enrollment",
        }
    }

    /// 首字母大写的单数名称
    pub fn title(&self) -> &'static str {
        match self {
            Resource::Students => "Student",
            Resource::Teachers => "Teacher",
            Resource::Courses => "Course",
            Resource::Classes => "Class",
            Resource::Grades => "Grade",
            Resource::Enrollments => "Enrollment",
        }
    }

    pub fn collection_path(&self) -> String {
        format!("/{}", self.path())
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("/{}/{id}", self.path())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
