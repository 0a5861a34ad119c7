//! File output for scan results.
//!
//! The output file receives exactly the bytes printed on the console.

use crate::data::FileList;
use crate::error::{ListError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes the report to `path`, creating or truncating it.
///
/// The handle is owned by this call: it is flushed explicitly so write errors
/// are reported, and closed on drop whether or not writing succeeded. A failed
/// write can leave a partial file behind.
///
/// # Errors
/// Returns [`ListError::Write`] if the file cannot be created (missing parent,
/// permission denied, invalid path) or if any write or the final flush fails.
pub fn render(files: &FileList, path: &Path) -> Result<()> {
    let to_write_error = |source| ListError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);

    super::render(files, &mut writer).map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)?;

    debug!(path = %path.display(), count = files.len(), "listing written");
    Ok(())
}
