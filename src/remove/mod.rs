//! Removing single entries.

use derive_more::{Display, Error, From};

use crate::error::{NoFileComponentError, SyscallError, WildPathError};
use crate::path::{FormError, Path};
use crate::syscall;

mod tests;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum RemoveError {
    Wild(WildPathError),
    NoFileComponent(NoFileComponentError),
    Syscall(SyscallError),
}

impl From<FormError> for RemoveError {
    fn from(value: FormError) -> Self {
        match value {
            FormError::Wild(e) => e.into(),
            FormError::NoFileComponent(e) => e.into(),
        }
    }
}

/// Unlinks a non-directory entry. A directory-form path is taken to mean the entry itself, which
/// is how a link to a directory is removed.
pub fn remove_file(path: &Path) -> Result<(), RemoveError> {
    let path = path.to_file_form()?;
    // SAFETY: The pathname is a valid C string.
    syscall::check("unlink", unsafe { libc::unlink(path.to_c_string().as_ptr()) })?;
    Ok(())
}

/// Removes a directory, which the OS only allows once it is empty.
pub fn remove_empty_directory(path: &Path) -> Result<(), RemoveError> {
    if path.is_wild() {
        Err(WildPathError)?
    }
    // SAFETY: The pathname is a valid C string.
    syscall::check("rmdir", unsafe { libc::rmdir(path.to_c_string().as_ptr()) })?;
    Ok(())
}
