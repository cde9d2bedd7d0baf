//! The process-wide current working directory, treated as a scoped resource.
//!
//! Any scope that changes the working directory does so through a [`CwdGuard`], which returns to
//! the exact directory that was current before it, on every exit path. Guards nest: an inner guard
//! restores the directory the outer one entered, not some fixed default.
//!
//! The working directory is shared by every thread in the process, so all access made through this
//! crate is serialized by a single lock. A thread may nest as many scopes as it likes; other
//! threads block until its outermost scope ends.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::thread;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard, const_reentrant_mutex};
use tracing::trace;

use crate::dir::DirError;
use crate::error::{NotADirectoryError, SyscallError};
use crate::fd::Fd;
use crate::panic::{CwdRestorePanic, Panic};
use crate::path::Path;
use crate::syscall;


static AMBIENT: ReentrantMutex<()> = const_reentrant_mutex(());

/// Changes the working directory for as long as it lives.
#[derive(Debug)]
pub struct CwdGuard {
    previous: Fd,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl CwdGuard {
    /// Makes `dir` the working directory until the returned guard is dropped.
    pub fn enter(dir: &Path) -> Result<CwdGuard, DirError> {
        let dir = dir.to_directory_form()?;
        let lock = AMBIENT.lock();
        let previous = Fd::open_cwd()?;

        // SAFETY: The pathname is a valid C string.
        if unsafe { libc::chdir(dir.to_c_string().as_ptr()) } == -1 {
            return match syscall::err_no() {
                libc::ENOTDIR | libc::ENOENT => Err(NotADirectoryError.into()),
                e => Err(SyscallError::new("chdir", e).into()),
            };
        }
        trace!(dir = %dir, "entered directory");

        Ok(CwdGuard {
            previous,
            _lock: lock,
        })
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        // SAFETY: previous is an open directory descriptor owned by self.
        if unsafe { libc::fchdir(*self.previous) } == -1 && !thread::panicking() {
            // Carrying on would silently resolve every relative path against the wrong directory.
            CwdRestorePanic(syscall::err_no()).panic()
        }
    }
}

/// The current working directory, in directory form.
pub fn current_directory() -> Result<Path, SyscallError> {
    let _lock = AMBIENT.lock();
    Ok(Path::literal(OsStr::from_bytes(&syscall::getcwd()?)).into_directory_form())
}

/// Runs `f` with `dir` as the working directory, restoring the previous one afterwards, whether or
/// not `f` succeeds.
pub fn with_current_directory<T, E, F>(dir: &Path, f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<DirError>,
{
    let _guard = CwdGuard::enter(dir)?;
    f()
}
