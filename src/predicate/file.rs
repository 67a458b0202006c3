//! File predicates
//!
//! Query the file system for the attributes of a path. A path that does not
//! exist has none of the attributes.

use std::fs;
use std::path::{Path, PathBuf};

use super::combinators::Predicate;
use crate::error::RequirementError;
use crate::requirement::present;

const NULL_FILE: &str = "Input file parameter must not be null.";

/// File system attribute of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileAttribute {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Anything that exists.
    Exists,
    /// Can be opened for reading by the current process.
    Readable,
    /// Not marked read-only.
    Writeable,
    /// Has an execute permission bit set.
    Executable,
    /// Hidden by platform convention.
    Hidden,
}

impl FileAttribute {
    fn check(self, path: &Path) -> bool {
        match self {
            FileAttribute::File => path.is_file(),
            FileAttribute::Directory => path.is_dir(),
            FileAttribute::Exists => path.exists(),
            FileAttribute::Readable => is_readable(path),
            FileAttribute::Writeable => {
                fs::metadata(path).is_ok_and(|meta| !meta.permissions().readonly())
            }
            FileAttribute::Executable => is_executable(path),
            FileAttribute::Hidden => is_hidden(path),
        }
    }
}

fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path).is_ok_and(|meta| meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_dir()
        || (path.is_file()
            && path.extension().and_then(|ext| ext.to_str()).is_some_and(|ext| {
                ["exe", "bat", "cmd", "com"].iter().any(|known| ext.eq_ignore_ascii_case(known))
            }))
}

#[cfg(windows)]
fn is_hidden(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    fs::symlink_metadata(path).is_ok_and(|meta| {
        meta.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0 || has_dot_name(path)
    })
}

#[cfg(not(windows))]
fn is_hidden(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok() && has_dot_name(path)
}

fn has_dot_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

impl Predicate<Path> for FileAttribute {
    #[inline]
    fn apply(&self, value: &Path) -> Result<bool, RequirementError> {
        Ok(self.check(value))
    }
}

impl Predicate<PathBuf> for FileAttribute {
    #[inline]
    fn apply(&self, value: &PathBuf) -> Result<bool, RequirementError> {
        Ok(self.check(value))
    }
}

impl<P: AsRef<Path>> Predicate<Option<P>> for FileAttribute {
    fn apply(&self, value: &Option<P>) -> Result<bool, RequirementError> {
        let value = present(value.as_ref(), NULL_FILE)?;
        Ok(self.check(value.as_ref()))
    }
}

/// Create a predicate that checks a path is a regular file.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use reqs::predicate::*;
///
/// let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
/// assert!(is_file().apply(&manifest).unwrap());
/// assert!(!is_directory().apply(&manifest).unwrap());
/// ```
pub fn is_file() -> FileAttribute {
    FileAttribute::File
}

/// Create a predicate that checks a path is a directory.
pub fn is_directory() -> FileAttribute {
    FileAttribute::Directory
}

/// Create a predicate that checks a path exists.
pub fn existing_file() -> FileAttribute {
    FileAttribute::Exists
}

/// Create a predicate that checks a path can be read.
pub fn readable_file() -> FileAttribute {
    FileAttribute::Readable
}

/// Create a predicate that checks a path is not read-only.
pub fn writeable_file() -> FileAttribute {
    FileAttribute::Writeable
}

/// Create a predicate that checks a path is executable.
///
/// On Unix this is any execute bit; elsewhere, directories and files with a
/// well-known executable extension.
pub fn executable_file() -> FileAttribute {
    FileAttribute::Executable
}

/// Create a predicate that checks a path is hidden.
///
/// A file name starting with a dot is hidden everywhere; on Windows the hidden
/// attribute also counts.
pub fn hidden_file() -> FileAttribute {
    FileAttribute::Hidden
}
