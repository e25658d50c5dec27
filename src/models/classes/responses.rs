use tabled::Tabled;

// 班级列表行，课程名由界面服务解析
#[derive(Debug, Clone, Tabled)]
pub struct ClassRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Course")]
    pub course: String,
}
