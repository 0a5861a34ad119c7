//! File system scanning module for `lsfiles`.
//!
//! This module handles:
//! - Recursive directory traversal using `WalkDir`
//! - Separating files from directories (only files are collected)
//! - Relativizing every discovered path against the scan root
//! - Progress spinner via `indicatif`
//!
//! The main entry point is [`collect_files`], which returns a [`FileList`] in
//! walk order: top-down, and within each directory its own files come before
//! anything from its subdirectories. Names are not sorted; each group keeps
//! the order the platform's directory enumeration yields.

use crate::data::FileList;
use crate::error::{ListError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Recursively scans `root` and returns every file as a path relative to it.
///
/// Directories are visited but never listed. Symlinks are not followed: a
/// link that resolves to a directory is skipped like a directory, any other
/// link (dangling ones included) is listed like a file.
///
/// A directory below `root` that cannot be read is skipped with a warning;
/// the files found elsewhere are still returned.
///
/// # Errors
/// Returns an error if:
/// - `root` does not exist or cannot be read ([`ListError::Walk`])
/// - `root` is not a directory ([`ListError::NotADirectory`])
pub fn collect_files(root: &Path) -> Result<FileList> {
    debug!(root = %root.display(), "scanning");

    let pb = spinner();
    let result = walk(root, &pb);
    pb.finish_and_clear();

    let files = result?;
    debug!(count = files.len(), "scan complete");
    Ok(files)
}

fn walk(root: &Path, pb: &ProgressBar) -> Result<FileList> {
    let mut files = FileList::new();

    // Stable sort: files first, subdirectories after, each in readdir order.
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

    for entry in walker {
        pb.tick();
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(ListError::Walk {
                    root: root.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if entry.depth() == 0 {
            if !entry.file_type().is_dir() {
                return Err(ListError::NotADirectory(root.to_path_buf()));
            }
            continue;
        }

        if is_dir_like(&entry) {
            continue;
        }

        let relative = relative_path(root, entry.path());
        trace!(path = %relative.display(), "found file");
        files.push(relative);
    }

    Ok(files)
}

/// True for directories and for symlinks that resolve to one.
fn is_dir_like(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return true;
    }
    entry.path_is_symlink() && entry.path().is_dir()
}

/// Strips `root` from `path`, falling back to the full path.
pub fn relative_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

// Draws on stderr, and only when stderr is a terminal. Ticks come from the
// walk loop itself, so no ticker thread is started.
fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Some(style) = spinner_style() {
        pb.set_style(style);
    }
    pb
}

/// The spinner style, or `None` (with a warning) if the template is rejected.
fn spinner_style() -> Option<ProgressStyle> {
    match ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner} Scanning files... [{elapsed}]")
    {
        Ok(style) => Some(style),
        Err(err) => {
            warn!(error = %err, "invalid progress template, using default spinner");
            None
        }
    }
}
