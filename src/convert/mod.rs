mod discovery;
mod sheet;
mod table;
mod types;

use tracing::{debug, info, warn};

pub use discovery::{discover_images, is_image_name};
pub use sheet::{OutputCursor, validate_image, write_workbook};
pub use table::{TABLE_HEADER, write_table};
pub use types::{
    ConversionResult, ImageEntry, ImageFailure, Outcome, OutputMode, Placement, Progress, Reporter,
};

use crate::error::{ConvertError, Result};
use crate::input::ConvertRequest;

/// Run one conversion from a validated request.
///
/// Walks `Discovering -> Confirming (csv only) -> Writing`. Nothing is written
/// when no images are found or when the CSV confirmation is declined.
pub fn convert(request: &ConvertRequest, reporter: &mut dyn Reporter) -> Result<Outcome> {
    debug!(folder = %request.folder.display(), "discovering images");
    let images = discover_images(&request.folder).map_err(|e| {
        warn!(folder = %request.folder.display(), error = %e, "unable to list folder");
        ConvertError::InvalidFolder(request.folder.clone())
    })?;

    if images.is_empty() {
        return Err(ConvertError::NoImagesFound(request.folder.clone()));
    }

    let mode = OutputMode::for_path(&request.output);
    debug!(count = images.len(), ?mode, "images discovered");

    let result = match mode {
        OutputMode::Table => {
            if !reporter.confirm_table_mode(images.len()) {
                debug!("table output declined");
                return Ok(Outcome::Cancelled);
            }
            write_table(&images, &request.output, reporter)?
        }
        OutputMode::Spreadsheet => {
            let start = OutputCursor::new(request.start_row, request.start_column);
            write_workbook(&images, start, &request.output, reporter)?
        }
    };

    info!(
        output = %request.output.display(),
        succeeded = result.succeeded,
        failed = result.failed(),
        "conversion finished"
    );

    Ok(Outcome::Completed(result))
}
