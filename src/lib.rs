//! A filesystem layer over raw POSIX calls, for code that wants to think in terms of pathnames
//! rather than strings.
//!
//! # Purpose
//! The OS gives us stat, opendir/readdir, readlink, chmod, getcwd/chdir and link/symlink, each with
//! its own edge cases around trailing separators, relative paths, links to directories and entries
//! that don't exist. This crate builds path-level operations on top of them with those edge cases
//! pinned down:
//! - [`path`]: normalization, directory form vs file form, absolute resolution, prefix stripping.
//! - [`kind`]: classifying entries, where "doesn't exist" is an answer and not an error.
//! - [`dir`]: lazy, pull-based iteration over one directory.
//! - [`walk`]: recursive walks in pre-order or post-order, and recursive deletion.
//! - [`link`] and [`permissions`]: link creation and permission bits as named flags.
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, made up of
//! zero-sized structs that each implement [`Error`](std::error::Error). Every operation returns a
//! union of exactly the errors it can produce. Whatever the OS reports is passed up untouched in a
//! [`SyscallError`]; nothing is retried.
//!
//! Some conditions aren't errors at all but defects: file type bits the OS shouldn't be able to
//! report, or failing to get back to a previous working directory. Those panic.
//!
//! # The Working Directory
//! Directory iteration and walks make the directory being read the working directory while they
//! run, so that relative paths handed to callers resolve naturally. Since that is process-wide
//! state, every change goes through a guard that restores it, and all of them are serialized by a
//! single lock. See [`cwd`].
//!
//! # Platforms
//! POSIX only. Paths are byte strings split on `/`; there is no notion of drive letters or other
//! native syntaxes.
#![cfg(unix)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod cwd;
pub mod dir;
pub mod kind;
#[cfg(feature = "links")]
pub mod link;
pub mod path;
#[cfg(feature = "permissions")]
pub mod permissions;
pub mod remove;
pub mod walk;

mod error;
mod fd;
mod panic;
mod syscall;

pub(crate) mod util;

pub use error::*;
pub use kind::EntryKind;
pub use path::Path;
pub use syscall::RawOsError;
