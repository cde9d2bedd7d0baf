use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;
use std::thread;

use libc::{O_CLOEXEC, O_DIRECTORY, O_RDONLY, c_int};

use crate::error::SyscallError;
use crate::panic::{Panic, UnexpectedErrorPanic};
use crate::syscall;

/// An owned file descriptor, closed exactly once when dropped.
pub(crate) struct Fd(c_int);

impl Fd {
    /// Opens the current working directory, so that it can later be returned to with `fchdir`,
    /// even if it has since been renamed.
    pub fn open_cwd() -> Result<Fd, SyscallError> {
        // SAFETY: The path is a static nul-terminated string.
        match unsafe { libc::open(c".".as_ptr(), O_RDONLY | O_DIRECTORY | O_CLOEXEC) } {
            -1 => Err(SyscallError::new("open", syscall::err_no())),
            fd => Ok(Fd(fd)),
        }
    }
}

impl Deref for Fd {
    type Target = c_int;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1
            // Panic only if we aren't already, to prevent aborting an existing unwind.
            && !thread::panicking()
        {
            match syscall::err_no() {
                // Nothing was written through a directory descriptor, so there is nothing to lose.
                libc::EINTR => (),
                e => UnexpectedErrorPanic(e).panic(),
            }
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}
