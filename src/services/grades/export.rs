//! 成绩报表导出：表格（xlsx / csv）与打印文档（pdf）

use rust_xlsxwriter::{Format, Workbook};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::pdf;
use super::report::{COLUMNS, GradeReport, SUMMARY_LABEL};
use crate::errors::{RecordsError, Result};

/// 表格页签名称
pub const SHEET_NAME: &str = "Grades";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(format!("Unsupported export format: {other}")),
        }
    }
}

/// 导出文件名，文件系统不允许的字符替换为 `_`
pub fn file_name(scope: &str, format: ExportFormat) -> String {
    let safe: String = scope
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("Grade_Report_{safe}.{}", format.extension())
}

pub fn render(report: &GradeReport, format: ExportFormat) -> Result<Vec<u8>> {
    debug!(
        "Rendering {} report for {} with {} rows",
        format,
        report.scope,
        report.rows.len()
    );
    match format {
        ExportFormat::Xlsx => render_xlsx(report),
        ExportFormat::Csv => render_csv(report),
        ExportFormat::Pdf => pdf::render(report),
    }
}

fn render_xlsx(report: &GradeReport) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // 表头格式
    let header_format = Format::new().set_bold();
    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, row) in report.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        match row.grade_id {
            Some(id) => worksheet.write_number(r, 0, id as f64)?,
            None => worksheet.write_string(r, 0, row.id_label())?,
        };
        worksheet.write_string(r, 1, &row.student)?;
        worksheet.write_number(r, 2, row.exam)?;
        worksheet.write_number(r, 3, row.coursework)?;
        // 平均分按两位小数的文本写入，与打印文档一致
        worksheet.write_string(r, 4, row.cells()[4].as_str())?;
    }

    // 汇总行紧跟最后一条数据
    let summary_row = (report.rows.len() + 1) as u32;
    worksheet.write_string_with_format(summary_row, 0, SUMMARY_LABEL, &header_format)?;
    worksheet.write_string(summary_row, 4, report.summary_value())?;

    Ok(workbook.save_to_buffer()?)
}

fn render_csv(report: &GradeReport) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(COLUMNS)?;
    for row in &report.rows {
        wtr.write_record(row.cells())?;
    }
    wtr.write_record([
        SUMMARY_LABEL.to_string(),
        String::new(),
        String::new(),
        String::new(),
        report.summary_value(),
    ])?;

    wtr.into_inner()
        .map_err(|e| RecordsError::export(format!("CSV: {e}")))
}
