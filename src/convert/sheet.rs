use std::path::Path;

use image::ImageReader;
use rust_xlsxwriter::{ColNum, Image, RowNum, Workbook, Worksheet, XlsxError};
use tracing::{debug, warn};

use crate::convert::types::{
    ConversionResult, ImageEntry, ImageFailure, OutputMode, Placement, Progress, Reporter,
};
use crate::error::{ConvertError, Result};
use crate::utils::cell_reference;

/// Current anchor cell, 1-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputCursor {
    pub row: u32,
    pub column: usize,
}

impl OutputCursor {
    pub fn new(row: u32, column: usize) -> Self {
        Self { row, column }
    }

    pub fn cell(&self) -> String {
        cell_reference((self.row as usize, self.column))
    }

    pub fn advance(&mut self) {
        self.row = self.row.saturating_add(1);
    }

    // Zero-based coordinates as rust_xlsxwriter expects them
    fn anchor(&self) -> std::result::Result<(RowNum, ColNum), XlsxError> {
        let col = ColNum::try_from(self.column - 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        Ok((self.row - 1, col))
    }
}

/// Decode the whole file so truncated or corrupt data is caught before the
/// image goes anywhere near the workbook.
pub fn validate_image(path: &Path) -> std::result::Result<(), image::ImageError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    reader.decode()?;
    Ok(())
}

fn insert_image(
    worksheet: &mut Worksheet,
    entry: &ImageEntry,
    cursor: OutputCursor,
) -> Result<()> {
    validate_image(&entry.path).map_err(|source| ConvertError::ImageValidationFailed {
        filename: entry.filename.clone(),
        source,
    })?;

    let inserted = Image::new(&entry.path).and_then(|image| {
        let (row, col) = cursor.anchor()?;
        worksheet.insert_image(row, col, &image)?;
        Ok(())
    });

    inserted.map_err(|source| ConvertError::ImageInsertFailed {
        filename: entry.filename.clone(),
        source,
    })
}

pub fn write_workbook(
    images: &[ImageEntry],
    start: OutputCursor,
    output: &Path,
    reporter: &mut dyn Reporter,
) -> Result<ConversionResult> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let mut result = ConversionResult::new(OutputMode::Spreadsheet, output);
    let mut cursor = start;
    let total = images.len();

    for (idx, entry) in images.iter().enumerate() {
        reporter.progress(Progress {
            mode: OutputMode::Spreadsheet,
            index: idx + 1,
            total,
            filename: &entry.filename,
        });
        result.attempted += 1;

        match insert_image(worksheet, entry, cursor) {
            Ok(()) => {
                let cell = cursor.cell();
                debug!(filename = %entry.filename, %cell, "image inserted");
                result.placements.push(Placement {
                    filename: entry.filename.clone(),
                    cell,
                });
                result.succeeded += 1;
                cursor.advance();
            }
            Err(e) => {
                warn!(filename = %entry.filename, error = %e, "image skipped");
                let failure = ImageFailure {
                    filename: entry.filename.clone(),
                    message: e.to_string(),
                };
                reporter.image_failed(&failure);
                result.failures.push(failure);
            }
        }
    }

    workbook
        .save(output)
        .map_err(|e| ConvertError::output(output, e))?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_formats_and_advances() {
        let mut cursor = OutputCursor::new(5, 2);
        assert_eq!(cursor.cell(), "B5");
        cursor.advance();
        assert_eq!(cursor.cell(), "B6");
        assert_eq!(cursor.anchor().unwrap(), (5, 1));
    }

    #[test]
    fn cursor_rejects_columns_past_u16() {
        let cursor = OutputCursor::new(1, 70_000);
        assert!(matches!(
            cursor.anchor(),
            Err(XlsxError::RowColumnLimitError)
        ));
    }

    #[test]
    fn garbage_bytes_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(validate_image(&path).is_err());
    }

    #[test]
    fn missing_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_image(&dir.path().join("gone.png")).is_err());
    }
}
