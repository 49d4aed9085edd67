//! Spreadsheet output.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::flatten::{FieldValue, FlatFieldRecord, COLUMNS};

/// Default worksheet name.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Writes flattened records to a file.
///
/// Implementations must write a header row of [`COLUMNS`] followed by one
/// row per record in input order, and must return an error rather than
/// truncate when the destination cannot be written.
pub trait SpreadsheetEmitter {
    /// Write `records` to `destination`, replacing any existing file.
    fn emit(&self, records: &[FlatFieldRecord], destination: &Path) -> Result<()>;
}

/// Single-sheet `.xlsx` writer.
#[derive(Debug, Clone)]
pub struct XlsxEmitter {
    sheet_name: String,
}

impl Default for XlsxEmitter {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl XlsxEmitter {
    /// Create an emitter with the default sheet name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different worksheet name.
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// The worksheet name used for every file.
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }
}

impl SpreadsheetEmitter for XlsxEmitter {
    fn emit(&self, records: &[FlatFieldRecord], destination: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, column) in (0u16..).zip(COLUMNS) {
            worksheet.write_string_with_format(0, col, column, &header_format)?;
        }

        for (index, record) in records.iter().enumerate() {
            let row = u32::try_from(index + 1).map_err(|_| {
                Error::new(ErrorKind::Write(format!(
                    "{} rows do not fit in a worksheet",
                    records.len()
                )))
            })?;

            for (col, cell) in (0u16..).zip(record.cells()) {
                match cell {
                    FieldValue::Text(text) => {
                        worksheet.write_string(row, col, text)?;
                    }
                    FieldValue::Number(number) => {
                        worksheet.write_number(row, col, number as f64)?;
                    }
                    FieldValue::Empty => {}
                }
            }
        }

        workbook.save(destination)?;
        debug!(path = %destination.display(), rows = records.len(), "Spreadsheet saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_part(path: &Path, part: &str) -> String {
        let file = std::fs::File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut contents = String::new();
        archive
            .by_name(part)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        contents
    }

    #[test]
    fn test_emit_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Business_Account.xlsx");

        let records = vec![FlatFieldRecord {
            header: "Info".into(),
            label: "Name".into(),
            api_name: "Name__c".into(),
            character_limit: Some(80),
            data_type: "Text".into(),
            ..Default::default()
        }];

        XlsxEmitter::new().emit(&records, &path).unwrap();

        let strings = read_part(&path, "xl/sharedStrings.xml");
        for column in COLUMNS {
            assert!(strings.contains(column), "missing header {column}");
        }
        assert!(strings.contains("Name__c"));
        assert!(strings.contains("Info"));

        let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains("<v>80</v>"));
        assert!(sheet.contains(r#"<row r="2""#));
        assert!(!sheet.contains(r#"<row r="3""#));

        let workbook = read_part(&path, "xl/workbook.xml");
        assert!(workbook.contains(r#"name="Sheet1""#));
    }

    #[test]
    fn test_emit_empty_records_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Empty.xlsx");

        XlsxEmitter::new().emit(&[], &path).unwrap();

        let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains(r#"<row r="1""#));
        assert!(!sheet.contains(r#"<row r="2""#));
    }

    #[test]
    fn test_emit_custom_sheet_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Named.xlsx");

        let emitter = XlsxEmitter::new().with_sheet_name("Fields");
        assert_eq!(emitter.sheet_name(), "Fields");
        emitter.emit(&[], &path).unwrap();

        let workbook = read_part(&path, "xl/workbook.xml");
        assert!(workbook.contains(r#"name="Fields""#));
    }

    #[test]
    fn test_emit_unwritable_destination_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("nested").join("Out.xlsx");

        let err = XlsxEmitter::new().emit(&[], &path).unwrap_err();
        assert!(err.is_write_error());
        assert!(!path.exists());
    }
}
