use std::ffi::CStr;
use std::ptr::NonNull;
use std::thread;

use libc::{DIR, c_int};
use tracing::trace;

use crate::dir::DirError;
use crate::error::{NotADirectoryError, SyscallError, WildPathError};
use crate::kind::{self, EntryKind};
use crate::panic::{BadHandlePanic, Panic, UnexpectedErrorPanic};
use crate::path::Path;
use crate::syscall;

/// An open directory handle, read one entry at a time. Closed exactly once, when dropped.
///
/// Unlike [`DirIter`](crate::dir::DirIter), this leaves the working directory alone.
#[derive(Debug)]
pub(crate) struct DirStream {
    handle: NonNull<DIR>,
    done: bool,
}

impl DirStream {
    pub fn open(dir_path: &Path) -> Result<DirStream, DirError> {
        if dir_path.is_wild() {
            Err(WildPathError)?
        }
        if !kind::classify(dir_path, true)?.is_directory() {
            Err(NotADirectoryError)?
        }

        // SAFETY: The pathname is a valid C string.
        let handle = unsafe { libc::opendir(dir_path.to_c_string().as_ptr()) };
        match NonNull::new(handle) {
            Some(handle) => {
                trace!(dir = %dir_path, "opened directory");
                Ok(DirStream {
                    handle,
                    done: false,
                })
            },
            None => match syscall::err_no() {
                libc::ENOTDIR | libc::ENOENT => Err(NotADirectoryError.into()),
                e => Err(SyscallError::new("opendir", e).into()),
            },
        }
    }

    fn fd(&self) -> c_int {
        // SAFETY: handle is an open directory stream.
        unsafe { libc::dirfd(self.handle.as_ptr()) }
    }

    /// Reads the next entry other than `.` and `..`, as a path relative to the directory. Returns
    /// [`None`] once the directory is exhausted, and on every call after that.
    pub fn next_entry(&mut self) -> Option<Result<Path, DirError>> {
        if self.done {
            None?
        }
        loop {
            syscall::clear_err_no();
            // SAFETY: handle is an open directory stream, only ever read from this thread.
            let entry = unsafe { libc::readdir(self.handle.as_ptr()) };
            // SAFETY: A non-null result points to an entry that stays valid until the next readdir.
            let Some(entry) = (unsafe { entry.as_ref() }) else {
                self.done = true;
                return match syscall::err_no() {
                    0 => None,
                    e => Some(Err(SyscallError::new("readdir", e).into())),
                };
            };

            // SAFETY: d_name is nul-terminated.
            let name = unsafe { CStr::from_ptr(entry.d_name.as_ptr()) };
            if matches!(name.to_bytes(), b"." | b"..") {
                continue;
            }

            let entry_kind = match EntryKind::from_dirent_type(entry.d_type) {
                Some(entry_kind) => entry_kind,
                // A link is classified by what it points to.
                None => match syscall::stat_at(self.fd(), name, true) {
                    Ok(raw) => EntryKind::from_stat(raw),
                    // A link that can't be followed is reported as itself, like a dangling one.
                    Err(e) if matches!(e.errno, libc::ELOOP | libc::EACCES | libc::ENAMETOOLONG) => {
                        trace!(entry = ?name, errno = e.errno, "link can't be followed");
                        EntryKind::Symlink
                    },
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e.into()));
                    },
                },
            };

            return Some(Ok(Path::entry(name.to_bytes(), entry_kind.is_directory())));
        }
    }
}

impl Drop for DirStream {
    fn drop(&mut self) {
        // SAFETY: The handle is not used again after being closed.
        if unsafe { libc::closedir(self.handle.as_ptr()) } == -1 && !thread::panicking() {
            match syscall::err_no() {
                libc::EBADF => BadHandlePanic.panic(),
                libc::EINTR => (),
                e => UnexpectedErrorPanic(e).panic(),
            }
        }
    }
}
