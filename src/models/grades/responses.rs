use tabled::Tabled;

// 成绩列表行（界面显示）
#[derive(Debug, Clone, Tabled)]
pub struct GradeRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Student")]
    pub student: String,
    #[tabled(rename = "Exam")]
    pub exam: String,
    #[tabled(rename = "Coursework")]
    pub coursework: String,
    #[tabled(rename = "Average")]
    pub average: String,
}
