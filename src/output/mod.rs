//! Output system for `lsfiles`.
//!
//! Both sinks emit the same report so the console and the output file stay
//! byte-identical:
//!
//! ```text
//! a.txt
//! sub/b.txt
//!
//! 共有 2 个文件。
//! ```
//!
//! # Available Sinks
//!
//! - **Terminal**: the report on stdout
//! - **File**: the report written to a created/truncated file

pub mod file;
pub mod terminal;

use crate::data::FileList;
use std::io::{self, Write};

/// File output renderer function.
///
/// See [`file::render`] for full documentation.
pub use file::render as render_file;

/// Terminal output renderer function.
///
/// See [`terminal::render`] for full documentation.
pub use terminal::render as render_terminal;

/// Writes the report for `files` into any writer.
///
/// One path per line, then a blank line and the count line. Paths that are
/// not valid UTF-8 are written lossily.
pub fn render<W: Write>(files: &FileList, out: &mut W) -> io::Result<()> {
    for path in files {
        writeln!(out, "{}", path.display())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", files.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn to_string(files: &FileList) -> String {
        let mut buf = Vec::new();
        render(files, &mut buf).expect("writing into a Vec cannot fail");
        String::from_utf8(buf).expect("report is UTF-8")
    }

    #[test]
    fn test_report_layout() {
        let files = FileList::from(vec![PathBuf::from("a.txt"), PathBuf::from("sub/b.txt")]);
        assert_eq!(to_string(&files), "a.txt\nsub/b.txt\n\n共有 2 个文件。\n");
    }

    #[test]
    fn test_empty_report_has_only_count() {
        assert_eq!(to_string(&FileList::new()), "\n共有 0 个文件。\n");
    }

    #[test]
    fn test_render_propagates_writer_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let files = FileList::from(vec![PathBuf::from("a.txt")]);
        let err = render(&files, &mut Broken).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
