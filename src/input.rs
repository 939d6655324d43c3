use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::utils::col_name_to_index;

pub const DEFAULT_START_ROW: &str = "1";
pub const DEFAULT_START_COLUMN: &str = "A";

/// Values as typed by the user, before any checking.
#[derive(Debug, Clone)]
pub struct FormInput {
    pub folder: PathBuf,
    pub start_row: String,
    pub start_column: String,
    pub output: Option<PathBuf>,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            folder: PathBuf::new(),
            start_row: DEFAULT_START_ROW.to_string(),
            start_column: DEFAULT_START_COLUMN.to_string(),
            output: None,
        }
    }
}

/// A checked set of inputs that `convert` can run without further validation.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub folder: PathBuf,
    pub start_row: u32,
    pub start_column: usize,
    pub output: PathBuf,
}

impl FormInput {
    pub fn validate(&self) -> Result<ConvertRequest> {
        if self.folder.as_os_str().is_empty() || !self.folder.is_dir() {
            return Err(ConvertError::InvalidFolder(self.folder.clone()));
        }

        let start_row = match self.start_row.trim().parse::<u32>() {
            Ok(row) if row >= 1 => row,
            _ => return Err(ConvertError::InvalidRow(self.start_row.clone())),
        };

        let label = self.start_column.trim();
        let start_column = col_name_to_index(label)
            .ok_or_else(|| ConvertError::InvalidColumn(self.start_column.clone()))?;

        let output = match &self.output {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => return Err(ConvertError::MissingOutputPath),
        };

        Ok(ConvertRequest {
            folder: self.folder.clone(),
            start_row,
            start_column,
            output,
        })
    }
}

impl ConvertRequest {
    pub fn new(
        folder: impl AsRef<Path>,
        start_row: u32,
        start_column: &str,
        output: impl AsRef<Path>,
    ) -> Result<Self> {
        FormInput {
            folder: folder.as_ref().to_path_buf(),
            start_row: start_row.to_string(),
            start_column: start_column.to_string(),
            output: Some(output.as_ref().to_path_buf()),
        }
        .validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(folder: &Path) -> FormInput {
        FormInput {
            folder: folder.to_path_buf(),
            output: Some(folder.join("out.xlsx")),
            ..FormInput::default()
        }
    }

    #[test]
    fn accepts_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let request = form(dir.path()).validate().unwrap();
        assert_eq!(request.start_row, 1);
        assert_eq!(request.start_column, 1);
    }

    #[test]
    fn trims_and_uppercases_column() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = form(dir.path());
        input.start_column = " ab ".to_string();
        input.start_row = " 12".to_string();
        let request = input.validate().unwrap();
        assert_eq!(request.start_column, 28);
        assert_eq!(request.start_row, 12);
    }

    #[test]
    fn rejects_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = form(dir.path());
        input.folder = dir.path().join("nope");
        assert!(matches!(input.validate(), Err(ConvertError::InvalidFolder(_))));

        input.folder = PathBuf::new();
        assert!(matches!(input.validate(), Err(ConvertError::InvalidFolder(_))));
    }

    #[test]
    fn rejects_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        for row in ["0", "-3", "abc", ""] {
            let mut input = form(dir.path());
            input.start_row = row.to_string();
            assert!(
                matches!(input.validate(), Err(ConvertError::InvalidRow(_))),
                "row {row:?}"
            );
        }
    }

    #[test]
    fn rejects_bad_columns() {
        let dir = tempfile::tempdir().unwrap();
        for column in ["A1", "", "A-"] {
            let mut input = form(dir.path());
            input.start_column = column.to_string();
            assert!(
                matches!(input.validate(), Err(ConvertError::InvalidColumn(_))),
                "column {column:?}"
            );
        }
    }

    #[test]
    fn rejects_missing_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = form(dir.path());
        input.output = None;
        assert!(matches!(input.validate(), Err(ConvertError::MissingOutputPath)));

        input.output = Some(PathBuf::new());
        assert!(matches!(input.validate(), Err(ConvertError::MissingOutputPath)));
    }
}
