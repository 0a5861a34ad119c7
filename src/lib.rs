//! Library crate for lsfiles
//!
//! Recursively lists every file under a directory as paths relative to it,
//! followed by a count line, optionally mirrored into a file.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions (the run configuration)
//! - [`data`]: The ordered [`FileList`]
//! - [`scan`]: Directory traversal
//! - [`output`]: Report rendering to the terminal and to a file
//! - [`lister`]: The end-to-end [`list_all_files`] operation
//! - [`error`]: Error taxonomy
//! - [`logging`]: Diagnostic tracing setup

pub mod cli;
pub mod data;
pub mod error;
pub mod lister;
pub mod logging;
pub mod output;
pub mod scan;

pub use cli::Args;
pub use data::FileList;
pub use error::ListError;
pub use lister::{list_all_files, list_all_files_to};
