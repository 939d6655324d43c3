use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::convert::types::ImageEntry;

const IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

pub fn is_image_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// List the image files directly inside `folder`, sorted by file name.
///
/// Names are compared byte-wise, so `A.PNG` sorts before `a.jpg`. Entries
/// that differ only in case are kept as separate images.
pub fn discover_images(folder: &Path) -> io::Result<Vec<ImageEntry>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name();

        if !is_image_name(&name.to_string_lossy()) {
            continue;
        }

        // Follows symlinks, a link to a picture counts as a picture
        let is_file = fs::metadata(entry.path())
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            debug!(name = %name.to_string_lossy(), "skipping non-file entry");
            continue;
        }

        names.push(name);
    }

    names.sort();

    Ok(names
        .into_iter()
        .map(|name| ImageEntry {
            filename: name.to_string_lossy().into_owned(),
            path: folder.join(&name),
        })
        .collect())
}
