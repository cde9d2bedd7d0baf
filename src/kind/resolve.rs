use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use derive_more::{Display, Error, From};

use crate::error::{SyscallError, WildPathError};
use crate::kind::EntryKind;
use crate::path::Path;
use crate::syscall;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum ClassifyError {
    Wild(WildPathError),
    Syscall(SyscallError),
}

/// Determines the kind of the entry at `path`. With `follow_symlinks`, a link is classified as
/// whatever it points to (and a dangling one as absent), otherwise as a link.
///
/// A directory-form path names the same entry as its file form: `sub/` is classified as the entry
/// `sub`, so a link to a directory is still reported as a link when not following.
pub fn classify(path: &Path, follow_symlinks: bool) -> Result<EntryKind, ClassifyError> {
    if path.is_wild() {
        Err(WildPathError)?
    }
    Ok(EntryKind::from_stat(syscall::stat(&path.to_c_string(), follow_symlinks)?))
}

/// Checks whether anything exists at `path`, following links. Returns the canonical path of what
/// was found, in directory form if it is a directory.
pub fn exists(path: &Path) -> Result<Option<Path>, ClassifyError> {
    if path.is_wild() {
        Err(WildPathError)?
    }
    let Some(resolved) = syscall::realpath(&path.to_c_string())? else {
        return Ok(None);
    };
    let resolved = Path::literal(OsStr::from_bytes(&resolved));
    Ok(Some(match classify(&resolved, true)? {
        EntryKind::Directory => resolved.into_directory_form(),
        // Removed between the two calls.
        EntryKind::Absent => return Ok(None),
        _ => resolved,
    }))
}

/// Like [`exists`], but only a directory counts.
pub fn directory_exists(path: &Path) -> Result<Option<Path>, ClassifyError> {
    Ok(exists(path)?.filter(Path::is_directory_form))
}

pub fn is_directory(path: &Path) -> Result<bool, ClassifyError> {
    Ok(classify(path, true)?.is_directory())
}

pub fn is_regular_file(path: &Path) -> Result<bool, ClassifyError> {
    Ok(classify(path, true)?.is_regular())
}

pub fn is_symlink(path: &Path) -> Result<bool, ClassifyError> {
    Ok(classify(path, false)?.is_symlink())
}
