//! 可打印的成绩报表（A4 PDF）
//!
//! 分页由纯函数 `paginate` 计算：每页预留一行给汇总，保证汇总总能紧跟在最后
//! 一条数据所在的页面上。表头在每页重复，标题只出现在第一页。

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use std::ops::Range;

use super::report::{COLUMNS, GradeReport};
use crate::errors::Result;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_HEIGHT: f32 = 18.0;
const TITLE_GAP: f32 = 30.0;
const TITLE_SIZE: i64 = 16;
const TEXT_SIZE: i64 = 10;
const COLUMN_X: [f32; 5] = [50.0, 100.0, 300.0, 380.0, 480.0];

/// 单页的行范围；汇总行位于最后一页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice {
    pub rows: Range<usize>,
    pub has_summary: bool,
}

/// 从 `top` 开始按行高向下排列，不低于下边距时可容纳的行数
fn lines_from(top: f32) -> usize {
    ((top - MARGIN) / ROW_HEIGHT).floor() as usize + 1
}

/// 第一页数据行容量（已扣除标题、表头和汇总）
pub fn first_page_capacity() -> usize {
    lines_from(PAGE_HEIGHT - MARGIN - TITLE_GAP - ROW_HEIGHT) - 1
}

/// 后续页数据行容量（已扣除表头和汇总）
pub fn page_capacity() -> usize {
    lines_from(PAGE_HEIGHT - MARGIN - ROW_HEIGHT) - 1
}

/// 把 `row_count` 行分配到各页；至少返回一页
pub fn paginate(row_count: usize, first_capacity: usize, capacity: usize) -> Vec<PageSlice> {
    let first_capacity = first_capacity.max(1);
    let capacity = capacity.max(1);

    let mut pages = Vec::new();
    let mut start = 0;
    let mut limit = first_capacity;
    loop {
        let end = (start + limit).min(row_count);
        pages.push(PageSlice {
            rows: start..end,
            has_summary: false,
        });
        if end >= row_count {
            break;
        }
        start = end;
        limit = capacity;
    }

    if let Some(last) = pages.last_mut() {
        last.has_summary = true;
    }
    pages
}

/// Helvetica + WinAnsiEncoding 只能显示 Latin-1 范围内的字符
fn pdf_text(text: &str) -> Object {
    let bytes = text
        .chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect();
    Object::String(bytes, StringFormat::Literal)
}

fn text_at(ops: &mut Vec<Operation>, font: &str, size: i64, x: f32, y: f32, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![pdf_text(text)]));
    ops.push(Operation::new("ET", vec![]));
}

fn row_at(ops: &mut Vec<Operation>, font: &str, y: f32, cells: &[String]) {
    for (x, cell) in COLUMN_X.iter().zip(cells) {
        text_at(ops, font, TEXT_SIZE, *x, y, cell);
    }
}

fn page_operations(report: &GradeReport, slice: &PageSlice, first: bool) -> Vec<Operation> {
    let mut ops = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    if first {
        text_at(&mut ops, "F2", TITLE_SIZE, MARGIN, y, &report.title());
        y -= TITLE_GAP;
    }

    let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    row_at(&mut ops, "F2", y, &header);
    y -= ROW_HEIGHT;

    for row in &report.rows[slice.rows.clone()] {
        row_at(&mut ops, "F1", y, &row.cells());
        y -= ROW_HEIGHT;
    }

    if slice.has_summary {
        text_at(&mut ops, "F2", TEXT_SIZE, MARGIN, y, &report.summary_line());
    }
    ops
}

pub fn render(report: &GradeReport) -> Result<Vec<u8>> {
    let slices = paginate(report.rows.len(), first_page_capacity(), page_capacity());

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(slices.len());
    for (i, slice) in slices.iter().enumerate() {
        let content = Content {
            operations: page_operations(report, slice, i == 0),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}
