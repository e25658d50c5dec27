mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

use common::ScriptedStore;
use rust_edurecords::models::enrollments::entities::EnrollmentStatus;
use rust_edurecords::models::{Notification, NotificationLevel, Outcome, Resource};
use rust_edurecords::services::grades::{ExportFormat, ReportLabels};
use rust_edurecords::storage::RecordStore;
use rust_edurecords::services::{
    ClassScreen, EnrollmentScreen, FixedAnswer, GradeScreen, RecordingNotifier, StudentScreen,
};

async fn school() -> Arc<ScriptedStore> {
    let store = ScriptedStore::new();
    let seeds = [
        (Resource::Students, json!({"firstName": "Ana", "lastName": "Souza", "email": "ana@escola.edu"})),
        (Resource::Students, json!({"firstName": "Bruno", "lastName": "Lima"})),
        (Resource::Courses, json!({"name": "Math", "credits": 4})),
        (Resource::Courses, json!({"name": "History"})),
        (Resource::Classes, json!({"name": "7A", "courseId": 1})),
        (Resource::Classes, json!({"name": "Orphan", "courseId": 42})),
        (
            Resource::Enrollments,
            json!({"studentId": 1, "courseId": 1, "enrollmentDate": "2024-03-01T00:00:00.000Z"}),
        ),
        (
            Resource::Grades,
            json!({"studentId": 1, "courseId": 1, "prova": 8, "trabalho": 6, "average": 1}),
        ),
        (
            Resource::Grades,
            json!({"studentId": 2, "courseId": 1, "prova": 10, "trabalho": 10}),
        ),
    ];
    for (resource, body) in seeds {
        store.inner.seed(resource, body).await.unwrap();
    }
    Arc::new(store)
}

#[tokio::test]
async fn failed_reload_keeps_previous_list() {
    let store = school().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut screen = EnrollmentScreen::new(store.clone(), notifier.clone());

    assert_eq!(screen.load().await, Outcome::Completed);
    assert_eq!(screen.rows().len(), 1);

    // 任一依赖列表失败，整体放弃
    store.fail(Resource::Students);
    assert_eq!(screen.load().await, Outcome::Failed);
    assert_eq!(screen.rows().len(), 1);
    assert_eq!(screen.students().len(), 2);
    assert_eq!(
        notifier.last(),
        Some(Notification::error(
            "Error loading enrollments: 500 Internal Server Error - boom"
        ))
    );
}

#[tokio::test]
async fn enrollment_rows_resolve_labels() {
    let store = school().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut screen = EnrollmentScreen::new(store, notifier);
    screen.load().await;

    let row = &screen.rows()[0];
    assert_eq!(row.student, "Ana Souza");
    assert_eq!(row.course, "Math");
    assert_eq!(row.enrollment_date, "2024-03-01");
    assert_eq!(row.status, "active");
    assert_eq!(row.grade, "-");
}

#[tokio::test]
async fn enrollment_draft_defaults_and_submit() {
    let store = school().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut screen = EnrollmentScreen::new(store, notifier.clone());
    screen.load().await;

    screen.view_mut().begin_create();
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let form = screen.view_mut().draft_form_mut().unwrap();
    assert_eq!(form.enrollment_date.as_deref(), Some(today.as_str()));
    assert_eq!(form.status, Some(EnrollmentStatus::Active));

    // 缺少学生与课程
    assert_eq!(screen.submit().await, Outcome::Invalid);
    assert_eq!(notifier.last().unwrap().message, "Fill in all required fields");

    let form = screen.view_mut().draft_form_mut().unwrap();
    form.student_id = Some(2);
    form.course_id = Some(2);
    assert_eq!(screen.submit().await, Outcome::Completed);
    assert_eq!(screen.rows().len(), 2);
    assert_eq!(screen.rows()[1].student, "Bruno Lima");
    assert_eq!(
        notifier.last(),
        Some(Notification::success("Enrollment created successfully"))
    );
}

#[tokio::test]
async fn validation_failure_makes_no_request() {
    let store = school().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut screen = StudentScreen::new(store.clone(), notifier.clone());

    screen.view_mut().begin_create();
    screen.view_mut().draft_form_mut().unwrap().first_name = Some("Ana".into());
    let before = store.calls();

    assert_eq!(screen.submit().await, Outcome::Invalid);
    assert_eq!(store.calls(), before);
    let last = notifier.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Warning);
    assert_eq!(last.message, "Student first and last name are required");
}

#[tokio::test]
async fn declined_delete_makes_no_request() {
    let store = school().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut screen = StudentScreen::new(store.clone(), notifier.clone());
    screen.load().await;
    let before = store.calls();

    assert_eq!(screen.delete(1, &FixedAnswer(false)).await, Outcome::Declined);
    assert_eq!(store.calls(), before);
    assert_eq!(screen.rows().len(), 2);
}

#[tokio::test]
async fn failed_delete_keeps_list_and_reports() {
    let store = school().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut screen = StudentScreen::new(store.clone(), notifier.clone());
    screen.load().await;

    assert_eq!(screen.delete(99, &FixedAnswer(true)).await, Outcome::Failed);
    assert_eq!(screen.rows().len(), 2);
    assert_eq!(
        notifier.last().unwrap().message,
        "Error deleting student: 404 Not Found - student 99 not found"
    );
}

#[tokio::test]
async fn class_rows_use_placeholder_for_unknown_course() {
    let store = school().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut screen = ClassScreen::new(store, notifier);
    screen.load().await;

    let courses: Vec<_> = screen.rows().into_iter().map(|r| r.course).collect();
    assert_eq!(courses, ["Math", "-"]);
}

#[tokio::test]
async fn grade_scope_and_average() {
    let store = school().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut screen = GradeScreen::new(store, notifier);
    screen.load().await;
    screen.select_course(1).await;

    let rows = screen.rows();
    assert_eq!(rows[0].average, "7.00");
    assert_eq!(rows[1].average, "10.00");
    assert_eq!(rows[1].student, "Bruno Lima");
    assert_eq!(screen.course_average(), Some(8.5));

    // 另一课程没有成绩
    screen.select_course(2).await;
    assert!(screen.rows().is_empty());
    assert_eq!(screen.course_average(), Some(0.0));
    let roster = screen.report(ReportLabels::Roster).unwrap();
    assert_eq!(roster.rows.len(), 2);
    assert_eq!(roster.summary_value(), "0.00");
}

#[tokio::test]
async fn export_unavailable_until_grades_load() {
    let store = school().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut screen = GradeScreen::new(store.clone(), notifier.clone());
    let dir = tempfile::tempdir().unwrap();

    screen.load().await;
    store.fail(Resource::Grades);
    assert_eq!(screen.select_course(1).await, Outcome::Failed);
    assert!(screen.report(ReportLabels::Ids).is_none());
    assert_eq!(
        screen.export(ExportFormat::Csv, ReportLabels::Ids, dir.path()).await,
        Outcome::Ignored
    );
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    store.recover();
    assert_eq!(screen.load_grades().await, Outcome::Completed);
    assert_eq!(
        screen.export(ExportFormat::Csv, ReportLabels::Names, dir.path()).await,
        Outcome::Completed
    );
    let csv = std::fs::read_to_string(dir.path().join("Grade_Report_Math.csv")).unwrap();
    assert!(csv.contains("1,Ana Souza,8,6,7.00"));
    assert!(csv.contains("Course average,,,,8.50"));
}

#[tokio::test]
async fn failed_score_save_keeps_local_edit() {
    let store = school().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut screen = GradeScreen::new(store.clone(), notifier.clone());
    screen.load().await;
    screen.select_course(1).await;

    assert!(screen.set_score(1, rust_edurecords::models::grades::requests::ScoreField::Exam, 9.0));
    store.fail(Resource::Grades);
    assert_eq!(screen.save(1).await, Outcome::Failed);
    assert_eq!(screen.view().find(1).unwrap().exam_score, 9.0);
    assert!(
        notifier
            .last()
            .unwrap()
            .message
            .starts_with("Error saving grade: 500")
    );

    store.recover();
    assert_eq!(screen.save(1).await, Outcome::Completed);
    let saved = store.inner.get(Resource::Grades, 1).await.unwrap();
    assert_eq!(saved["prova"], 9.0);
    assert_eq!(saved["trabalho"], 6.0);
}

#[tokio::test]
async fn null_student_references_do_not_block_loads_or_export() {
    let store = school().await;
    let orphans = [
        (Resource::Enrollments, json!({"studentId": null, "courseId": 1, "enrollmentDate": null})),
        (Resource::Grades, json!({"studentId": null, "courseId": 1, "prova": null, "trabalho": 4})),
        (Resource::Grades, json!({"studentId": null, "courseId": null, "prova": 5, "trabalho": 5})),
    ];
    for (resource, body) in orphans {
        store.inner.seed(resource, body).await.unwrap();
    }
    let notifier = Arc::new(RecordingNotifier::new());

    let mut enrollments = EnrollmentScreen::new(store.clone(), notifier.clone());
    assert_eq!(enrollments.load().await, Outcome::Completed);
    let rows = enrollments.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].student, "-");
    assert_eq!(rows[1].course, "Math");

    let mut grades = GradeScreen::new(store, notifier.clone());
    assert_eq!(grades.load().await, Outcome::Completed);
    assert_eq!(grades.select_course(1).await, Outcome::Completed);
    let rows = grades.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].student, "-");
    assert_eq!(rows[2].exam, "0");
    assert_eq!(rows[2].average, "2.00");

    // 花名册模式下无学生的成绩不匹配任何成员
    let roster = grades.report(ReportLabels::Roster).unwrap();
    assert_eq!(roster.rows.len(), 2);

    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        grades.export(ExportFormat::Csv, ReportLabels::Ids, dir.path()).await,
        Outcome::Completed
    );
    let csv = std::fs::read_to_string(dir.path().join("Grade_Report_Math.csv")).unwrap();
    assert!(csv.contains("3,-,0,4,2.00"));
    assert!(csv.contains("Course average,,,,6.33"));
}
