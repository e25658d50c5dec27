use serde::{Deserialize, Serialize};

use super::requests::GradeForm;
use crate::models::common::{Record, Resource};

/// 两项成绩的平均值，不做范围裁剪
pub fn grade_average(exam_score: f64, coursework_score: f64) -> f64 {
    (exam_score + coursework_score) / 2.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    // 外键可能为 null，显示为占位符
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub course_id: Option<i64>,
    // 考试成绩
    #[serde(
        rename = "prova",
        alias = "examScore",
        default,
        deserialize_with = "crate::models::common::null_as_default"
    )]
    pub exam_score: f64,
    // 平时作业成绩
    #[serde(
        rename = "trabalho",
        alias = "courseworkScore",
        default,
        deserialize_with = "crate::models::common::null_as_default"
    )]
    pub coursework_score: f64,
    // 服务端可能返回的平均分，仅接收，从不使用也不回传
    #[serde(default, skip_serializing)]
    pub average: Option<f64>,
}

impl Grade {
    /// 始终由两项成绩重新计算
    pub fn average(&self) -> f64 {
        grade_average(self.exam_score, self.coursework_score)
    }
}

impl Record for Grade {
    const RESOURCE: Resource = Resource::Grades;
    type Form = GradeForm;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_ignores_server_value() {
        let grade: Grade = serde_json::from_value(serde_json::json!({
            "id": 1, "studentId": 3, "courseId": 2,
            "prova": 8, "trabalho": 6, "average": 9.9
        }))
        .unwrap();
        assert_eq!(grade.average(), 7.0);
    }

    #[test]
    fn test_accepts_descriptive_score_names() {
        let grade: Grade = serde_json::from_value(serde_json::json!({
            "studentId": 3, "courseId": 2, "examScore": 10, "courseworkScore": 9
        }))
        .unwrap();
        assert_eq!(grade.exam_score, 10.0);
        assert_eq!(grade.coursework_score, 9.0);
    }

    #[test]
    fn test_average_never_serialized() {
        let grade = Grade {
            id: Some(1),
            student_id: Some(3),
            course_id: Some(2),
            exam_score: 8.0,
            coursework_score: 6.0,
            average: Some(7.0),
        };
        let value = serde_json::to_value(&grade).unwrap();
        assert!(value.get("average").is_none());
        assert_eq!(value["prova"], 8.0);
    }

    #[test]
    fn test_out_of_range_scores_are_averaged_as_is() {
        assert_eq!(grade_average(12.0, -2.0), 5.0);
    }

    #[test]
    fn test_null_references_and_scores_are_tolerated() {
        let grade: Grade = serde_json::from_value(serde_json::json!({
            "id": 4, "studentId": null, "courseId": 2, "prova": null, "trabalho": 6
        }))
        .unwrap();
        assert_eq!(grade.student_id, None);
        assert_eq!(grade.course_id, Some(2));
        assert_eq!(grade.exam_score, 0.0);
        assert_eq!(grade.average(), 3.0);
    }
}
