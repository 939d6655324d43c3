use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::debug;

use crate::convert::types::{ConversionResult, ImageEntry, OutputMode, Progress, Reporter};
use crate::error::{ConvertError, Result};

pub const TABLE_HEADER: [&str; 2] = ["Image Filename", "Image Path"];

// Rows are flushed one at a time, so a failure part way leaves the rows
// written so far on disk.
pub fn write_table(
    images: &[ImageEntry],
    output: &Path,
    reporter: &mut dyn Reporter,
) -> Result<ConversionResult> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_path(output)
        .map_err(|e| ConvertError::output(output, e))?;

    writer
        .write_record(TABLE_HEADER)
        .map_err(|e| ConvertError::output(output, e))?;

    let mut result = ConversionResult::new(OutputMode::Table, output);
    let total = images.len();

    for (idx, image) in images.iter().enumerate() {
        let path = image.path.to_string_lossy();
        writer
            .write_record([image.filename.as_str(), path.as_ref()])
            .map_err(|e| ConvertError::output(output, e))?;
        writer.flush().map_err(|e| ConvertError::output(output, e))?;

        result.attempted += 1;
        result.succeeded += 1;
        debug!(filename = %image.filename, "row written");

        reporter.progress(Progress {
            mode: OutputMode::Table,
            index: idx + 1,
            total,
            filename: &image.filename,
        });
    }

    Ok(result)
}
