//! The directory lister: scan, print, and optionally mirror to a file.
//!
//! The whole tree is collected before anything is printed, so an unreadable
//! root means no listing is emitted at all.

use crate::cli::Args;
use crate::data::FileList;
use crate::error::Result;
use crate::output;
use crate::scan::collect_files;
use std::io::Write;

/// Lists every file under `args.root_dir` on stdout, then writes the same
/// report to `args.output_file` when one is given.
///
/// # Errors
/// Fails if the root cannot be walked, or on the first console or
/// output-file error. Nothing is retried; a failed file write may leave a
/// partial file.
pub fn list_all_files(args: &Args) -> Result<FileList> {
    let files = collect_files(&args.root_dir)?;
    output::render_terminal(&files)?;
    write_output_file(args, &files)?;
    Ok(files)
}

/// Same as [`list_all_files`], with the console replaced by `console`.
pub fn list_all_files_to<W: Write>(args: &Args, console: &mut W) -> Result<FileList> {
    let files = collect_files(&args.root_dir)?;
    output::terminal::write_report(&files, console)?;
    write_output_file(args, &files)?;
    Ok(files)
}

fn write_output_file(args: &Args, files: &FileList) -> Result<()> {
    match &args.output_file {
        Some(path) => output::render_file(files, path),
        None => Ok(()),
    }
}
