use calamine::{Data, Reader, Xlsx};
use lopdf::Document;
use pretty_assertions::assert_eq;
use std::io::Cursor;

use rust_edurecords::models::grades::entities::Grade;
use rust_edurecords::services::grades::export::{SHEET_NAME, render};
use rust_edurecords::services::grades::report::format_average;
use rust_edurecords::services::grades::{ExportFormat, GradeReport, RosterEntry, RowSource};

fn grade(id: i64, student_id: i64, exam: f64, coursework: f64) -> Grade {
    Grade {
        id: Some(id),
        student_id: Some(student_id),
        course_id: Some(1),
        exam_score: exam,
        coursework_score: coursework,
        average: None,
    }
}

fn roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry {
            id: 10,
            display_name: "Ana Souza".into(),
        },
        RosterEntry {
            id: 11,
            display_name: "Bruno Lima".into(),
        },
        RosterEntry {
            id: 12,
            display_name: "Carla Dias".into(),
        },
    ]
}

fn read_sheet(bytes: Vec<u8>) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
    let range = workbook.worksheet_range(SHEET_NAME).unwrap();
    range.rows().map(|row| row.to_vec()).collect()
}

fn text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => panic!("unexpected cell {other:?}"),
    }
}

fn number(cell: &Data) -> f64 {
    match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        other => panic!("unexpected cell {other:?}"),
    }
}

#[test]
fn spreadsheet_round_trip_matches_records() {
    let grades = [
        grade(3, 12, 9.5, 7.0),
        grade(1, 10, 8.0, 6.0),
        grade(2, 11, 10.0, 10.0),
    ];
    let roster = roster();
    let report = GradeReport::build("Math", &grades, RowSource::Named(&roster));
    let rows = read_sheet(render(&report, ExportFormat::Xlsx).unwrap());

    let header: Vec<String> = rows[0].iter().map(text).collect();
    assert_eq!(header, ["ID", "Student", "Exam", "Coursework", "Average"]);

    // 行顺序与记录顺序一致
    let students: Vec<String> = rows[1..4].iter().map(|r| text(&r[1])).collect();
    assert_eq!(students, ["Carla Dias", "Ana Souza", "Bruno Lima"]);

    for (row, grade) in rows[1..4].iter().zip(&grades) {
        assert_eq!(number(&row[0]), grade.id.unwrap() as f64);
        assert_eq!(number(&row[2]), grade.exam_score);
        assert_eq!(number(&row[3]), grade.coursework_score);
        let recomputed = (number(&row[2]) + number(&row[3])) / 2.0;
        assert_eq!(text(&row[4]), format_average(recomputed));
    }

    let summary = &rows[4];
    assert_eq!(text(&summary[0]), "Course average");
    // (8.25 + 7 + 10) / 3
    assert_eq!(text(&summary[4]), "8.42");
}

#[test]
fn empty_spreadsheet_has_header_and_summary() {
    let report = GradeReport::build("Math", &[], RowSource::StudentIds);
    let rows = read_sheet(render(&report, ExportFormat::Xlsx).unwrap());

    assert_eq!(rows.len(), 2);
    assert_eq!(text(&rows[1][0]), "Course average");
    assert_eq!(text(&rows[1][4]), "0.00");
}

#[test]
fn roster_spreadsheet_has_one_row_per_member() {
    let roster = roster();
    let report = GradeReport::build("Math", &[grade(1, 11, 6.0, 8.0)], RowSource::Roster(&roster));
    let rows = read_sheet(render(&report, ExportFormat::Xlsx).unwrap());

    assert_eq!(rows.len(), 5);
    assert_eq!(text(&rows[1][0]), "-");
    assert_eq!(number(&rows[1][2]), 0.0);
    assert_eq!(text(&rows[2][1]), "Bruno Lima");
    assert_eq!(text(&rows[2][4]), "7.00");
}

#[test]
fn pdf_and_spreadsheet_share_content() {
    let grades = [grade(1, 10, 8.0, 6.0), grade(2, 11, 10.0, 10.0)];
    let roster = roster();
    let report = GradeReport::build("Math", &grades, RowSource::Named(&roster));

    let doc = Document::load_mem(&render(&report, ExportFormat::Pdf).unwrap()).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);

    let content = doc.get_page_content(pages[&1]).unwrap();
    let content = String::from_utf8_lossy(&content);
    for cell in report.rows.iter().flat_map(|r| r.cells()) {
        assert!(content.contains(&format!("({cell})")), "missing {cell}");
    }
    assert!(content.contains("(Course average: 8.50)"));
}
