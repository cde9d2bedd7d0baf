use crate::dir::{DirError, DirIter};
use crate::path::Path;

/// How [`list_directory`] reports entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryPaths {
    /// Relative to the listed directory.
    Relative,
    /// Merged onto the absolute path of the listed directory.
    #[default]
    Absolute,
}

/// Collects every entry of a directory, other than `.` and `..`.
pub fn list_directory(dir_path: &Path, paths: EntryPaths) -> Result<Vec<Path>, DirError> {
    let iter = DirIter::open(dir_path)?;
    let base = iter.path().clone();
    iter.map(|entry| {
        entry.map(|entry| match paths {
            EntryPaths::Relative => entry,
            EntryPaths::Absolute => base.join(&entry),
        })
    })
    .collect()
}

/// Calls `f` on each entry of a directory, with the directory as the working directory, and
/// collects the results. Stops at the first error, from either the iteration or `f`.
pub fn map_directory<T, E, F>(dir_path: &Path, mut f: F) -> Result<Vec<T>, E>
where
    F: FnMut(&Path) -> Result<T, E>,
    E: From<DirError>,
{
    let mut out = Vec::new();
    for entry in DirIter::open(dir_path)? {
        out.push(f(&entry?)?);
    }
    Ok(out)
}
