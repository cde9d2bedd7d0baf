//! Creating and reading hard and symbolic links.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use derive_more::{Display, Error, From};
use tracing::debug;

use crate::cwd::CwdGuard;
use crate::dir::DirError;
use crate::error::{NoFileComponentError, NotADirectoryError, SyscallError, WildPathError};
use crate::path::{FormError, Path};
use crate::syscall;

mod tests;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum LinkError {
    Wild(WildPathError),
    NoFileComponent(NoFileComponentError),
    NotADirectory(NotADirectoryError),
    Syscall(SyscallError),
}

impl From<FormError> for LinkError {
    fn from(value: FormError) -> Self {
        match value {
            FormError::Wild(e) => e.into(),
            FormError::NoFileComponent(e) => e.into(),
        }
    }
}

impl From<DirError> for LinkError {
    fn from(value: DirError) -> Self {
        match value {
            DirError::Wild(e) => e.into(),
            DirError::NotADirectory(e) => e.into(),
            DirError::Syscall(e) => e.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkKind {
    #[default]
    Symbolic,
    Hard,
}

/// Creates a link at `link` pointing to `target`. The link is always created as an entry in its
/// own right, so a directory-form `link` names the entry itself.
///
/// A symbolic link stores `target` verbatim, to be resolved relative to the link's directory when
/// followed. A hard link needs an existing entry; a relative `target` is resolved against the
/// link's directory too, so that both kinds read the same way.
pub fn make_link(link: &Path, target: &Path, kind: LinkKind) -> Result<(), LinkError> {
    if target.is_wild() {
        Err(WildPathError)?
    }
    let link = link.to_file_form()?.to_absolute_cwd()?;
    debug!(link = %link, target = %target, ?kind, "creating link");

    match kind {
        LinkKind::Symbolic => {
            let (target, link) = (target.to_c_string_verbatim(), link.to_c_string());
            // SAFETY: Both pathnames are valid C strings.
            syscall::check("symlink", unsafe { libc::symlink(target.as_ptr(), link.as_ptr()) })?;
        },
        LinkKind::Hard => {
            let _cwd = CwdGuard::enter(&link.directory_part())?;
            let (target, link) = (target.to_c_string(), link.to_c_string());
            // SAFETY: Both pathnames are valid C strings.
            syscall::check("link", unsafe { libc::link(target.as_ptr(), link.as_ptr()) })?;
        },
    }
    Ok(())
}

/// Reads the target stored in a symbolic link, without resolving it.
pub fn read_link(link: &Path) -> Result<Path, LinkError> {
    let link = link.to_file_form()?;
    let target = syscall::readlink(&link.to_c_string())?;
    Ok(Path::literal(OsStr::from_bytes(&target)))
}
