//! Pathnames as structured values rather than strings.
//!
//! A [`Path`] is a root tag (absolute or relative), a sequence of directory components and an
//! optional final component made of a name and an extension. A path with no final component is in
//! *directory form* (it renders with a trailing `/`) and designates a container. A path with one is
//! in *file form* and designates a leaf entry. Both forms of the same entry are interchangeable
//! through [`Path::to_directory_form`] and [`Path::to_file_form`].
//!
//! # Wildcards
//! Paths parsed with [`Path::parse`] treat components containing `*`, `?` or `[` as patterns. A
//! wild path can be displayed and merged, but anything that would hand it to the OS rejects it with
//! a [`WildPathError`](crate::WildPathError). Names read back from the OS are always literal.
//!
//! # Normalization
//! Parsing drops `.` segments, nul bytes and repeated separators. `..` is kept as a directory
//! component, resolving it lexically isn't sound in the presence of symbolic links.

mod component;
mod error;
mod form;
mod path;

pub(crate) use component::*;
pub use error::*;
pub use path::*;
