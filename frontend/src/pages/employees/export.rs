use chrono::{NaiveDate, NaiveDateTime};
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rgb};

use crate::{
    api::Employee,
    utils::{download::DownloadError, trigger_download},
};

const TITLE: &str = "COMPANY EMPLOYEE RECORDS";
const HEADERS: [&str; 4] = ["ID", "EMPLOYEE NAME", "EMAIL", "DEPARTMENT"];

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 14.0;
const ROW_HEIGHT: f32 = 7.0;
const COLUMN_X: [f32; 4] = [14.0, 42.0, 100.0, 162.0];
const COLUMN_CHARS: [usize; 4] = [12, 28, 32, 20];

#[derive(Debug, Clone, Copy, PartialEq)]
struct CellStyle {
    bold: bool,
    size: f32,
}

const HEADER_STYLE: CellStyle = CellStyle { bold: true, size: 9.0 };
const BODY_STYLE: CellStyle = CellStyle { bold: false, size: 8.0 };

impl CellStyle {
    fn font<'a>(&self, regular: &'a IndirectFontRef, bold: &'a IndirectFontRef) -> &'a IndirectFontRef {
        if self.bold {
            bold
        } else {
            regular
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to build PDF: {0}")]
    Pdf(String),
    #[error(transparent)]
    Download(#[from] DownloadError),
}

impl From<printpdf::Error> for ExportError {
    fn from(err: printpdf::Error) -> Self {
        ExportError::Pdf(err.to_string())
    }
}

/// Rows as they appear in the exported report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub generated_at: NaiveDateTime,
    pub rows: Vec<[String; 4]>,
}

impl ExportTable {
    pub fn from_employees(employees: &[Employee], generated_at: NaiveDateTime) -> Self {
        let rows = employees
            .iter()
            .map(|e| {
                [
                    e.employee_id.clone(),
                    e.full_name.to_uppercase(),
                    e.email.clone(),
                    e.department.as_str().to_uppercase(),
                ]
            })
            .collect();
        Self { generated_at, rows }
    }

    pub fn render_pdf(&self) -> Result<Vec<u8>, ExportError> {
        let (doc, page, layer) =
            PdfDocument::new(TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Records");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

        let mut current = doc.get_page(page).get_layer(layer);
        current.set_fill_color(indigo());
        current.use_text(TITLE, 22.0, Mm(MARGIN), Mm(PAGE_HEIGHT - 22.0), &bold);
        current.set_fill_color(grey());
        current.use_text(
            format!("System Report: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S")),
            10.0,
            Mm(MARGIN),
            Mm(PAGE_HEIGHT - 30.0),
            &regular,
        );

        let mut y = PAGE_HEIGHT - 42.0;
        write_header(&current, HEADER_STYLE.font(&regular, &bold), y);
        for row in &self.rows {
            y -= ROW_HEIGHT;
            if y < MARGIN + ROW_HEIGHT {
                let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Records");
                current = doc.get_page(page).get_layer(layer);
                y = PAGE_HEIGHT - MARGIN - ROW_HEIGHT;
                write_header(&current, HEADER_STYLE.font(&regular, &bold), y);
                y -= ROW_HEIGHT;
            }
            current.set_fill_color(ink());
            for (column, cell) in row.iter().enumerate() {
                current.use_text(
                    clip(cell, COLUMN_CHARS[column]),
                    BODY_STYLE.size,
                    Mm(COLUMN_X[column]),
                    Mm(y),
                    BODY_STYLE.font(&regular, &bold),
                );
            }
        }

        Ok(doc.save_to_bytes()?)
    }
}

fn write_header(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32) {
    layer.set_fill_color(indigo());
    for (column, header) in HEADERS.iter().enumerate() {
        layer.use_text(*header, HEADER_STYLE.size, Mm(COLUMN_X[column]), Mm(y), font);
    }
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

fn indigo() -> Color {
    Color::Rgb(Rgb::new(99.0 / 255.0, 102.0 / 255.0, 241.0 / 255.0, None))
}

fn grey() -> Color {
    Color::Rgb(Rgb::new(150.0 / 255.0, 150.0 / 255.0, 150.0 / 255.0, None))
}

fn ink() -> Color {
    Color::Rgb(Rgb::new(15.0 / 255.0, 23.0 / 255.0, 42.0 / 255.0, None))
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("registry_audit_{}.pdf", date.format("%Y%m%d"))
}

/// Renders `employees` and hands the file to the browser.
pub fn export_employees(employees: &[Employee], now: NaiveDateTime) -> Result<String, ExportError> {
    let bytes = ExportTable::from_employees(employees, now).render_pdf()?;
    let filename = export_filename(now.date());
    trigger_download(&filename, "application/pdf", &bytes)?;
    log::info!("Exported {} employee records to {}", employees.len(), filename);
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Department;
    use crate::pages::employees::utils::tests::{employee, roster};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap()
    }

    #[test]
    fn rows_upper_case_name_and_department() {
        let table = ExportTable::from_employees(
            &[employee("E1", "Alice Smith", Department::Hr)],
            now(),
        );
        assert_eq!(
            table.rows,
            vec![[
                "E1".to_string(),
                "ALICE SMITH".to_string(),
                "alice smith@example.com".to_string(),
                "HR".to_string(),
            ]]
        );
    }

    #[test]
    fn filename_uses_compact_date() {
        assert_eq!(export_filename(now().date()), "registry_audit_20250102.pdf");
    }

    #[test]
    fn long_tables_render_to_a_pdf() {
        let bytes = ExportTable::from_employees(&roster(80), now())
            .render_pdf()
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn header_is_bold_and_body_is_regular() {
        assert!(HEADER_STYLE.bold);
        assert!(!BODY_STYLE.bold);
        assert!(HEADER_STYLE.size > BODY_STYLE.size);
    }

    #[test]
    fn clip_marks_truncated_cells() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("a-very-long-address@example.com", 10), "a-very-...");
    }
}
