use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

use derive_more::{Display, Error};

use crate::syscall::RawOsError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path contains wildcard components")]
pub struct WildPathError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path does not designate a directory")]
pub struct NotADirectoryError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("root of the walk does not exist")]
pub struct RootNotFoundError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path has no component that can be used as a file name")]
pub struct NoFileComponentError;

/// An error reported by the OS, carried without interpretation.
///
/// The core never retries a failed call, so this holds exactly what the OS returned along with the
/// name of the call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyscallError {
    pub call: &'static str,
    pub errno: RawOsError,
}

impl SyscallError {
    pub(crate) const fn new(call: &'static str, errno: RawOsError) -> SyscallError {
        SyscallError { call, errno }
    }

    pub fn kind(&self) -> io::ErrorKind {
        io::Error::from_raw_os_error(self.errno).kind()
    }
}

impl Display for SyscallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.call, io::Error::from_raw_os_error(self.errno))
    }
}

impl Error for SyscallError {}

impl From<SyscallError> for io::Error {
    fn from(value: SyscallError) -> Self {
        io::Error::from_raw_os_error(value.errno)
    }
}
