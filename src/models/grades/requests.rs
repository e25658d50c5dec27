use serde::Serialize;

use super::entities::Grade;
use crate::errors::{RecordsError, Result};
use crate::models::common::RecordForm;
use crate::models::common::record::merge_field;

// 成绩表单草稿
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
    #[serde(rename = "prova", skip_serializing_if = "Option::is_none")]
    pub exam_score: Option<f64>,
    #[serde(rename = "trabalho", skip_serializing_if = "Option::is_none")]
    pub coursework_score: Option<f64>,
}

impl RecordForm for GradeForm {
    type Record = Grade;

    fn from_record(record: &Grade) -> Self {
        Self {
            student_id: record.student_id,
            course_id: record.course_id,
            exam_score: Some(record.exam_score),
            coursework_score: Some(record.coursework_score),
        }
    }

    fn merge(&mut self, patch: Self) {
        merge_field(&mut self.student_id, patch.student_id);
        merge_field(&mut self.course_id, patch.course_id);
        merge_field(&mut self.exam_score, patch.exam_score);
        merge_field(&mut self.coursework_score, patch.coursework_score);
    }

    fn validate(&self) -> Result<()> {
        if self.student_id.is_none() || self.course_id.is_none() {
            return Err(RecordsError::validation("Student and course are required"));
        }
        if self.exam_score.is_none() || self.coursework_score.is_none() {
            return Err(RecordsError::validation(
                "Exam and coursework scores are required",
            ));
        }
        Ok(())
    }
}

/// 行内改分时只提交两项成绩
#[derive(Debug, Clone, Serialize)]
pub struct ScoreUpdate {
    #[serde(rename = "prova")]
    pub exam_score: f64,
    #[serde(rename = "trabalho")]
    pub coursework_score: f64,
}

impl From<&Grade> for ScoreUpdate {
    fn from(grade: &Grade) -> Self {
        Self {
            exam_score: grade.exam_score,
            coursework_score: grade.coursework_score,
        }
    }
}

/// 行内编辑的成绩项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    Exam,
    Coursework,
}
