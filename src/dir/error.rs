use derive_more::{Display, Error, From};

use crate::error::{NotADirectoryError, SyscallError, WildPathError};
use crate::kind::ClassifyError;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum DirError {
    Wild(WildPathError),
    NotADirectory(NotADirectoryError),
    Syscall(SyscallError),
}

impl From<ClassifyError> for DirError {
    fn from(value: ClassifyError) -> Self {
        match value {
            ClassifyError::Wild(e) => e.into(),
            ClassifyError::Syscall(e) => e.into(),
        }
    }
}
