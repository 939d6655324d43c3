use std::path::PathBuf;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Please select a valid image folder: {}", .0.display())]
    InvalidFolder(PathBuf),

    #[error("Starting row must be a positive integer, got `{0}`")]
    InvalidRow(String),

    #[error("Invalid Excel column name `{0}`")]
    InvalidColumn(String),

    #[error("Please select an output file path")]
    MissingOutputPath,

    #[error("No image files found in {}", .0.display())]
    NoImagesFound(PathBuf),

    #[error("{filename} is not a readable image: {source}")]
    ImageValidationFailed {
        filename: String,
        #[source]
        source: image::ImageError,
    },

    #[error("{filename} could not be placed in the sheet: {source}")]
    ImageInsertFailed {
        filename: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Failed to save {}: {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl ConvertError {
    pub(crate) fn output(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        ConvertError::OutputWriteFailed {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
