//! Recursive traversal of a directory tree, and recursive deletion built on it.
//!
//! Traversal is always depth-first. What the options control is whether a directory is handed to
//! the visitor at all, and if so whether before its contents ([`DirectoryOrder::PreOrder`]) or
//! after them ([`DirectoryOrder::PostOrder`]). The two orders treat the filter differently:
//! - Pre-order: a directory rejected by the filter is pruned, nothing beneath it is visited.
//! - Post-order: the contents are always walked, the filter only decides whether the directory
//!   itself is visited afterwards.

mod delete;
mod error;
mod options;
mod walk;

pub use delete::*;
pub use error::*;
pub use options::*;
pub use walk::*;
