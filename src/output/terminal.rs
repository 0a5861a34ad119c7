//! Terminal output for scan results.

use crate::data::FileList;
use crate::error::{ListError, Result};
use std::io::{self, Write};

/// Renders the report to stdout.
///
/// Stdout is locked and buffered for the whole report, then flushed, so a
/// closed pipe surfaces as [`ListError::Console`] instead of a panic.
pub fn render(files: &FileList) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_report(files, &mut out)
}

/// Renders the report to `out`, mapping failures to [`ListError::Console`].
pub fn write_report<W: Write>(files: &FileList, out: &mut W) -> Result<()> {
    super::render(files, out).map_err(ListError::Console)?;
    out.flush().map_err(ListError::Console)
}
