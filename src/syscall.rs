use std::ffi::{CStr, CString};
use std::io;
use std::mem::MaybeUninit;

use libc::{c_char, c_int, stat as Stat};

use crate::error::SyscallError;

pub type RawOsError = c_int;

pub(crate) fn err_no() -> RawOsError {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Resets errno so that calls which only signal failure through it (readdir) can be checked.
pub(crate) fn clear_err_no() {
    // SAFETY: The errno location is a valid thread-local pointer for the lifetime of the thread.
    unsafe { *errno_location() = 0 }
}

#[cfg(any(target_os = "linux", target_os = "android", target_os = "emscripten"))]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::__errno_location() }
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::__error() }
}

#[cfg(any(target_os = "openbsd", target_os = "netbsd"))]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::__errno() }
}

pub(crate) fn check(call: &'static str, ret: c_int) -> Result<(), SyscallError> {
    match ret {
        -1 => Err(SyscallError::new(call, err_no())),
        _ => Ok(()),
    }
}

/// Whether an errno means the entry simply isn't there: either the final component is missing or
/// an intermediate one isn't a directory.
pub(crate) const fn is_missing(errno: RawOsError) -> bool {
    matches!(errno, libc::ENOENT | libc::ENOTDIR)
}

/// stat or lstat, with a missing entry reported as [`None`] rather than an error.
pub(crate) fn stat(pathname: &CStr, follow: bool) -> Result<Option<Stat>, SyscallError> {
    match stat_required(pathname, follow) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if is_missing(e.errno) => Ok(None),
        Err(e) => Err(e),
    }
}

/// stat or lstat, where a missing entry is an error like any other.
pub(crate) fn stat_required(pathname: &CStr, follow: bool) -> Result<Stat, SyscallError> {
    let mut raw: MaybeUninit<Stat> = MaybeUninit::uninit();
    let (call, ret) = if follow {
        // SAFETY: pathname is a valid C string and raw points to writable memory of the right size.
        ("stat", unsafe { libc::stat(pathname.as_ptr(), raw.as_mut_ptr()) })
    } else {
        // SAFETY: As above.
        ("lstat", unsafe { libc::lstat(pathname.as_ptr(), raw.as_mut_ptr()) })
    };
    check(call, ret)?;
    // SAFETY: stat initializes raw whenever it doesn't fail, which was handled above.
    Ok(unsafe { raw.assume_init() })
}

/// Like [`stat`], but resolving `name` against an open directory rather than the working directory.
pub(crate) fn stat_at(dir: c_int, name: &CStr, follow: bool) -> Result<Option<Stat>, SyscallError> {
    let flags = if follow { 0 } else { libc::AT_SYMLINK_NOFOLLOW };
    let mut raw: MaybeUninit<Stat> = MaybeUninit::uninit();
    // SAFETY: name is a valid C string and raw points to writable memory of the right size.
    if unsafe { libc::fstatat(dir, name.as_ptr(), raw.as_mut_ptr(), flags) } == -1 {
        return match err_no() {
            e if is_missing(e) => Ok(None),
            e => Err(SyscallError::new("fstatat", e)),
        };
    }
    // SAFETY: fstatat initializes raw whenever it doesn't fail.
    Ok(Some(unsafe { raw.assume_init() }))
}

pub(crate) fn getcwd() -> Result<Vec<u8>, SyscallError> {
    let mut cap = 256;
    loop {
        let mut buf: Vec<u8> = Vec::with_capacity(cap);
        // SAFETY: buf has cap bytes of writable capacity.
        if unsafe { libc::getcwd(buf.as_mut_ptr().cast::<c_char>(), cap) }.is_null() {
            match err_no() {
                libc::ERANGE => cap *= 2,
                e => return Err(SyscallError::new("getcwd", e)),
            }
        } else {
            // SAFETY: getcwd wrote a nul-terminated string into buf.
            let len = unsafe { CStr::from_ptr(buf.as_ptr().cast::<c_char>()) }.count_bytes();
            // SAFETY: The first len bytes were initialized by getcwd.
            unsafe { buf.set_len(len) };
            return Ok(buf);
        }
    }
}

/// Canonicalizes a path, with a missing entry (including a dangling link) reported as [`None`].
pub(crate) fn realpath(pathname: &CStr) -> Result<Option<Vec<u8>>, SyscallError> {
    // SAFETY: A null resolved_path asks realpath to allocate the result, which is freed below.
    let resolved = unsafe { libc::realpath(pathname.as_ptr(), std::ptr::null_mut()) };
    if resolved.is_null() {
        return match err_no() {
            e if is_missing(e) => Ok(None),
            e => Err(SyscallError::new("realpath", e)),
        };
    }
    // SAFETY: realpath returned a valid nul-terminated string.
    let bytes = unsafe { CStr::from_ptr(resolved) }.to_bytes().to_vec();
    // SAFETY: resolved was allocated by realpath with malloc and isn't used after this.
    unsafe { libc::free(resolved.cast()) };
    Ok(Some(bytes))
}

pub(crate) fn readlink(pathname: &CStr) -> Result<Vec<u8>, SyscallError> {
    let mut cap = 256;
    loop {
        let mut buf: Vec<u8> = Vec::with_capacity(cap);
        // SAFETY: buf has cap bytes of writable capacity.
        let len = unsafe { libc::readlink(pathname.as_ptr(), buf.as_mut_ptr().cast(), cap) };
        if len == -1 {
            return Err(SyscallError::new("readlink", err_no()));
        }
        let len = len as usize;
        // A full buffer may mean the target was truncated.
        if len < cap {
            // SAFETY: readlink initialized the first len bytes.
            unsafe { buf.set_len(len) };
            return Ok(buf);
        }
        cap *= 2;
    }
}

pub(crate) fn c_string(bytes: Vec<u8>) -> CString {
    // Path components never hold a nul byte, they are dropped while parsing.
    CString::new(bytes).unwrap_or_else(|e| {
        let bytes: Vec<u8> = e.into_vec().into_iter().filter(|&b| b != 0).collect();
        // SAFETY: All nul bytes were just removed.
        unsafe { CString::from_vec_unchecked(bytes) }
    })
}
