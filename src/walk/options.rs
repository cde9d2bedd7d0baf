use std::fmt::{self, Debug, Formatter};

use derive_more::IsVariant;

use crate::path::Path;

/// Whether, and when, directories are passed to the visitor during a walk.
///
/// These were once called "breadth-first" (pre-order) and "depth-first" (post-order), but both
/// orders descend depth-first; the difference is only when the directory itself is visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IsVariant)]
pub enum DirectoryOrder {
    /// Directories are descended into but never visited, nor passed to the filter.
    #[default]
    Excluded,
    /// A directory is filtered and visited before its contents. Rejecting it prunes the subtree.
    PreOrder,
    /// A directory is filtered and visited after its contents, which are walked regardless.
    PostOrder,
}

/// What to do when the root of a walk doesn't exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IsVariant)]
pub enum MissingRoot {
    #[default]
    Fail,
    Ignore,
}

pub type AcceptAll = fn(&Path) -> bool;

const fn accept_all(_: &Path) -> bool {
    true
}

/// A builder for recursive walks, with the filter predicate as a type parameter so it can be any
/// closure.
///
/// The filter has to be set first, as it changes the type of the builder:
/// ```
/// # use portable_fs::Path;
/// # use portable_fs::walk::{DirectoryOrder, WalkOptions, WalkError};
/// # fn demo(root: &Path) -> Result<(), WalkError> {
/// let mut found = Vec::new();
/// WalkOptions::new()
///     .filter(|p: &Path| p.extension().is_none_or(|ext| ext != "tmp"))
///     .directories(DirectoryOrder::PostOrder)
///     .walk(root, |p| -> Result<(), WalkError> {
///         found.push(p.clone());
///         Ok(())
///     })?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WalkOptions<F = AcceptAll> {
    pub(crate) directories: DirectoryOrder,
    pub(crate) missing_root: MissingRoot,
    pub(crate) follow_symlinks: bool,
    pub(crate) include_root: bool,
    pub(crate) filter: F,
}

impl WalkOptions {
    pub fn new() -> WalkOptions {
        WalkOptions::default()
    }
}

impl<F: FnMut(&Path) -> bool> WalkOptions<F> {
    pub fn filter<G: FnMut(&Path) -> bool>(self, filter: G) -> WalkOptions<G> {
        WalkOptions::<G> {
            directories: self.directories,
            missing_root: self.missing_root,
            follow_symlinks: self.follow_symlinks,
            include_root: self.include_root,
            filter,
        }
    }

    pub const fn directories(&mut self, value: DirectoryOrder) -> &mut Self {
        self.directories = value;
        self
    }

    pub const fn if_missing(&mut self, value: MissingRoot) -> &mut Self {
        self.missing_root = value;
        self
    }

    /// Whether to descend through links to directories. On by default. When off, such a link is
    /// treated as a leaf: filtered and visited in file form, like any other non-directory, but
    /// never entered.
    ///
    /// Following links can walk the same directory more than once. A link pointing back up the
    /// tree is followed until the OS refuses to resolve the path, which ends the walk with an error.
    pub const fn follow_symlinks(&mut self, value: bool) -> &mut Self {
        self.follow_symlinks = value;
        self
    }

    /// Whether the root is itself a node of the walk, visited as the empty relative path `./`
    /// according to the directory order. Off by default.
    pub const fn include_root(&mut self, value: bool) -> &mut Self {
        self.include_root = value;
        self
    }
}

impl Default for WalkOptions {
    fn default() -> Self {
        WalkOptions {
            directories: DirectoryOrder::default(),
            missing_root: MissingRoot::default(),
            follow_symlinks: true,
            include_root: false,
            filter: accept_all,
        }
    }
}

impl<F> Debug for WalkOptions<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalkOptions")
            .field("directories", &self.directories)
            .field("missing_root", &self.missing_root)
            .field("follow_symlinks", &self.follow_symlinks)
            .field("include_root", &self.include_root)
            .finish_non_exhaustive()
    }
}
