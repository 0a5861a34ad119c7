//! CLI interface definitions for `lsfiles`.
//!
//! [`Args`] is the run configuration: where to start the walk and, optionally,
//! where to mirror the listing. It is built by clap in `main.rs` and passed
//! explicitly into [`crate::lister::list_all_files`].
//!
//! # Example
//!
//! ```bash
//! lsfiles src listing.txt
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for `lsfiles`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use lsfiles::Args;
///
/// let args = Args::parse_from(["lsfiles", "src"]);
/// assert_eq!(args.root_dir, std::path::PathBuf::from("src"));
/// assert!(args.output_file.is_none());
/// ```
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "lsfiles", version, about)]
pub struct Args {
    /// Directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    pub root_dir: PathBuf,

    /// Also write the listing to this file (truncated if it exists)
    pub output_file: Option<PathBuf>,
}

impl Args {
    /// Configuration for a console-only run over `root_dir`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            output_file: None,
        }
    }

    /// Mirror the listing to `path` as well.
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }
}
