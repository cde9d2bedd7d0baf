use derive_more::{Display, Error, From};

use crate::dir::DirError;
use crate::error::{
    NoFileComponentError, NotADirectoryError, RootNotFoundError, SyscallError, WildPathError,
};
use crate::kind::ClassifyError;
use crate::path::FormError;
use crate::remove::RemoveError;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum WalkError {
    Wild(WildPathError),
    NotADirectory(NotADirectoryError),
    RootNotFound(RootNotFoundError),
    NoFileComponent(NoFileComponentError),
    Syscall(SyscallError),
}

impl From<ClassifyError> for WalkError {
    fn from(value: ClassifyError) -> Self {
        match value {
            ClassifyError::Wild(e) => e.into(),
            ClassifyError::Syscall(e) => e.into(),
        }
    }
}

impl From<DirError> for WalkError {
    fn from(value: DirError) -> Self {
        match value {
            DirError::Wild(e) => e.into(),
            DirError::NotADirectory(e) => e.into(),
            DirError::Syscall(e) => e.into(),
        }
    }
}

impl From<FormError> for WalkError {
    fn from(value: FormError) -> Self {
        match value {
            FormError::Wild(e) => e.into(),
            FormError::NoFileComponent(e) => e.into(),
        }
    }
}

impl From<RemoveError> for WalkError {
    fn from(value: RemoveError) -> Self {
        match value {
            RemoveError::Wild(e) => e.into(),
            RemoveError::NoFileComponent(e) => e.into(),
            RemoveError::Syscall(e) => e.into(),
        }
    }
}
