use std::iter::FusedIterator;

use crate::cwd::CwdGuard;
use crate::dir::{DirError, DirStream};
use crate::path::Path;

/// A lazy pass over the entries of one directory.
///
/// Each entry is yielded as a path relative to the directory: in directory form if it is a
/// directory (a link to one included), in file form otherwise. `.` and `..` are never yielded and
/// the order is whatever the OS returns.
///
/// While the iterator is alive the directory is also the working directory, so relative paths
/// (including the entries themselves) resolve against it. Dropping the iterator closes the handle
/// and restores the previous working directory, however iteration ends.
///
/// Holding a `DirIter` holds the crate's working directory lock: other threads that go through
/// this crate to read or change the working directory wait until it is dropped.
#[derive(Debug)]
pub struct DirIter {
    // Closed before the working directory is restored.
    stream: DirStream,
    _cwd: CwdGuard,
    path: Path,
}

impl DirIter {
    pub fn open(dir_path: &Path) -> Result<DirIter, DirError> {
        let path = dir_path.to_directory_form()?.to_absolute_cwd()?;
        let stream = DirStream::open(&path)?;
        let cwd = CwdGuard::enter(&path)?;
        Ok(DirIter {
            stream,
            _cwd: cwd,
            path,
        })
    }

    /// The absolute, directory-form path being iterated.
    pub const fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for DirIter {
    type Item = Result<Path, DirError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next_entry()
    }
}

impl FusedIterator for DirIter {}
