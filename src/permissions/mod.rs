//! Permission bits as a set of named flags.

mod permission;
mod set;

pub use permission::*;
pub use set::*;

use derive_more::{Display, Error, From};

use crate::error::{SyscallError, WildPathError};
use crate::path::Path;
use crate::syscall;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum PermissionError {
    Wild(WildPathError),
    Syscall(SyscallError),
}

/// Reads the permissions of the entry at `path`, following links.
pub fn permissions(path: &Path) -> Result<PermissionSet, PermissionError> {
    if path.is_wild() {
        Err(WildPathError)?
    }
    let raw = syscall::stat_required(&path.to_c_string(), true)?;
    Ok(PermissionSet::from_mode(raw.st_mode))
}

/// Replaces the permissions of the entry at `path`, following links.
pub fn set_permissions(path: &Path, permissions: PermissionSet) -> Result<(), PermissionError> {
    if path.is_wild() {
        Err(WildPathError)?
    }
    // SAFETY: The pathname is a valid C string.
    syscall::check("chmod", unsafe {
        libc::chmod(path.to_c_string().as_ptr(), permissions.to_mode())
    })?;
    Ok(())
}
