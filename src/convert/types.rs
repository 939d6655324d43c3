use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Names and paths written to a CSV table
    Table,
    /// Images embedded in an xlsx workbook
    Spreadsheet,
}

impl OutputMode {
    // Only the extension decides; everything that isn't .csv becomes a workbook
    pub fn for_path(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            OutputMode::Table
        } else {
            OutputMode::Spreadsheet
        }
    }
}

/// One image file found in the input folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub filename: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    pub mode: OutputMode,
    pub index: usize,
    pub total: usize,
    pub filename: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageFailure {
    pub filename: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub filename: String,
    pub cell: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub mode: OutputMode,
    pub output: PathBuf,
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<ImageFailure>,
    pub placements: Vec<Placement>,
}

impl ConversionResult {
    pub(crate) fn new(mode: OutputMode, output: &Path) -> Self {
        Self {
            mode,
            output: output.to_path_buf(),
            attempted: 0,
            succeeded: 0,
            failures: Vec::new(),
            placements: Vec::new(),
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

#[derive(Debug)]
pub enum Outcome {
    Completed(ConversionResult),
    /// CSV output was declined at the confirmation step; nothing was written
    Cancelled,
}

/// Hooks through which a front end observes and steers a run.
pub trait Reporter {
    /// Asked once before a CSV table is written. Returning `false` cancels the run.
    fn confirm_table_mode(&mut self, total: usize) -> bool;

    fn progress(&mut self, _progress: Progress<'_>) {}

    fn image_failed(&mut self, _failure: &ImageFailure) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_extension() {
        assert_eq!(OutputMode::for_path(Path::new("out.csv")), OutputMode::Table);
        assert_eq!(OutputMode::for_path(Path::new("OUT.CSV")), OutputMode::Table);
        assert_eq!(
            OutputMode::for_path(Path::new("out.xlsx")),
            OutputMode::Spreadsheet
        );
        assert_eq!(
            OutputMode::for_path(Path::new("out")),
            OutputMode::Spreadsheet
        );
        assert_eq!(
            OutputMode::for_path(Path::new("out.csv.xlsx")),
            OutputMode::Spreadsheet
        );
    }
}
