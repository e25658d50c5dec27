//! 成绩汇总
//!
//! 把某个课程范围内的成绩记录整理成导出用的逻辑表格：每行的平均分由两项成绩
//! 重新计算，总平均分是所有输出行平均分的算术平均，空范围时为 0。
//! 行顺序与输入一致，不排序。

use std::str::FromStr;

use crate::models::PLACEHOLDER;
use crate::models::{display_id, format_number};
use crate::models::grades::entities::{Grade, grade_average};
use crate::models::students::entities::Student;

/// 导出表头，表格与打印文档共用
pub const COLUMNS: [&str; 5] = ["ID", "Student", "Exam", "Coursework", "Average"];

/// 汇总行标签
pub const SUMMARY_LABEL: &str = "Course average";

/// 花名册条目：学生 id 到显示名称
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: i64,
    pub display_name: String,
}

impl RosterEntry {
    /// 没有 id 的学生记录无法被成绩引用，跳过
    pub fn from_students(students: &[Student]) -> Vec<RosterEntry> {
        students
            .iter()
            .filter_map(|s| {
                s.id.map(|id| RosterEntry {
                    id,
                    display_name: s.full_name(),
                })
            })
            .collect()
    }
}

/// 行的来源与学生列的显示方式
#[derive(Debug, Clone, Copy)]
pub enum RowSource<'a> {
    /// 每条成绩一行，学生列显示原始学生 id
    StudentIds,
    /// 每条成绩一行，学生列显示花名册中的姓名
    Named(&'a [RosterEntry]),
    /// 花名册每人一行，没有成绩记录的按 0/0 计
    Roster(&'a [RosterEntry]),
}

/// 命令行选择的行来源，不携带花名册数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportLabels {
    #[default]
    Ids,
    Names,
    Roster,
}

impl ReportLabels {
    pub fn source<'a>(&self, roster: &'a [RosterEntry]) -> RowSource<'a> {
        match self {
            ReportLabels::Ids => RowSource::StudentIds,
            ReportLabels::Names => RowSource::Named(roster),
            ReportLabels::Roster => RowSource::Roster(roster),
        }
    }
}

impl FromStr for ReportLabels {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ids" => Ok(ReportLabels::Ids),
            "names" => Ok(ReportLabels::Names),
            "roster" => Ok(ReportLabels::Roster),
            other => Err(format!("Unknown label mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// 成绩记录 id；花名册中没有记录的成员为 None
    pub grade_id: Option<i64>,
    pub student: String,
    pub exam: f64,
    pub coursework: f64,
}

impl ReportRow {
    fn from_grade(grade: &Grade, student: String) -> Self {
        Self {
            grade_id: grade.id,
            student,
            exam: grade.exam_score,
            coursework: grade.coursework_score,
        }
    }

    pub fn average(&self) -> f64 {
        grade_average(self.exam, self.coursework)
    }

    pub fn id_label(&self) -> String {
        self.grade_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// 按表头顺序输出文本单元格
    pub fn cells(&self) -> [String; 5] {
        [
            self.id_label(),
            self.student.clone(),
            format_number(self.exam),
            format_number(self.coursework),
            format_average(self.average()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    pub scope: String,
    pub rows: Vec<ReportRow>,
}

impl GradeReport {
    pub fn build(scope: impl Into<String>, grades: &[Grade], source: RowSource<'_>) -> Self {
        let rows = match source {
            RowSource::StudentIds => grades
                .iter()
                .map(|g| ReportRow::from_grade(g, display_id(g.student_id)))
                .collect(),
            RowSource::Named(roster) => grades
                .iter()
                .map(|g| {
                    let name = roster
                        .iter()
                        .find(|r| g.student_id == Some(r.id))
                        .map(|r| r.display_name.clone())
                        .unwrap_or_else(|| PLACEHOLDER.to_string());
                    ReportRow::from_grade(g, name)
                })
                .collect(),
            RowSource::Roster(roster) => roster
                .iter()
                .map(|member| {
                    match grades.iter().find(|g| g.student_id == Some(member.id)) {
                        Some(g) => ReportRow::from_grade(g, member.display_name.clone()),
                        None => ReportRow {
                            grade_id: None,
                            student: member.display_name.clone(),
                            exam: 0.0,
                            coursework: 0.0,
                        },
                    }
                })
                .collect(),
        };

        Self {
            scope: scope.into(),
            rows,
        }
    }

    pub fn overall_average(&self) -> f64 {
        let averages: Vec<f64> = self.rows.iter().map(ReportRow::average).collect();
        overall_average(&averages)
    }

    pub fn summary_value(&self) -> String {
        format_average(self.overall_average())
    }

    /// 打印文档与表格共用的汇总文本
    pub fn summary_line(&self) -> String {
        format!("{SUMMARY_LABEL}: {}", self.summary_value())
    }

    pub fn title(&self) -> String {
        format!("Grade Report - {}", self.scope)
    }
}

/// 空输入返回 0，不返回 NaN
pub fn overall_average(averages: &[f64]) -> f64 {
    if averages.is_empty() {
        return 0.0;
    }
    averages.iter().sum::<f64>() / averages.len() as f64
}

pub fn format_average(value: f64) -> String {
    format!("{value:.2}")
}
