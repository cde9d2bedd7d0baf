use std::error::Error;

use derive_more::{Display, Error};

use crate::syscall::RawOsError;

/// Conditions that indicate a defect rather than something a caller could handle. These are never
/// returned as errors.
pub(crate) trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("unrecognized file type bits in mode: {_0:#o}")]
pub(crate) struct UnknownKindPanic(#[error(not(source))] pub libc::mode_t);
impl Panic for UnknownKindPanic {}

#[derive(Debug, Display, Error)]
#[display("directory handle corruption")]
pub(crate) struct BadHandlePanic;
impl Panic for BadHandlePanic {}

#[derive(Debug, Display, Error)]
#[display("failed to restore the previous working directory, OS error code: {_0}")]
pub(crate) struct CwdRestorePanic(#[error(not(source))] pub RawOsError);
impl Panic for CwdRestorePanic {}

#[derive(Debug, Display, Error)]
#[display("unexpected OS error with code: {_0}")]
pub(crate) struct UnexpectedErrorPanic(#[error(not(source))] pub RawOsError);
impl Panic for UnexpectedErrorPanic {}
