use tabled::Tabled;

// 选课列表行，学生与课程名由界面服务解析
#[derive(Debug, Clone, Tabled)]
pub struct EnrollmentRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Student")]
    pub student: String,
    #[tabled(rename = "Course")]
    pub course: String,
    #[tabled(rename = "Enrolled")]
    pub enrollment_date: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Grade")]
    pub grade: String,
}
