//! Main entry point for the `lsfiles` CLI application.
//!
//! `lsfiles [root_dir] [output_file]` prints every file under `root_dir`
//! (default `.`) relative to it, then a blank line and `共有 N 个文件。`.
//! When `output_file` is given, the same bytes are written there too.
//!
//! Errors are printed to stderr and the process exits non-zero.

use anyhow::{Context, Result};
use clap::Parser;
use lsfiles::{Args, list_all_files, logging};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    list_all_files(&args)
        .with_context(|| format!("Failed to list files under '{}'", args.root_dir.display()))?;

    Ok(())
}
