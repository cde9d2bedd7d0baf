use tracing::{debug, trace};

use crate::kind;
use crate::path::Path;
use crate::remove;
use crate::walk::{DirectoryOrder, MissingRoot, WalkError, WalkOptions};

/// Deletes `root` and everything beneath it.
///
/// The tree is walked in post-order, so each directory is already empty by the time it is removed.
/// Links are removed, never followed, with one exception: a `root` that is itself a link to a
/// directory is resolved for the walk, so the target's contents are deleted before the link.
pub fn delete_directory_and_files(root: &Path, missing_root: MissingRoot) -> Result<(), WalkError> {
    let root = root.to_directory_form()?.to_absolute_cwd()?;
    debug!(root = %root, "deleting directory tree");

    WalkOptions::new()
        .directories(DirectoryOrder::PostOrder)
        .if_missing(missing_root)
        .follow_symlinks(false)
        .include_root(true)
        .walk(&root, |rel| remove_entry(&root.join(rel)))
}

fn remove_entry(path: &Path) -> Result<(), WalkError> {
    trace!(path = %path, "removing");
    if path.is_directory_form() && !kind::is_symlink(path)? {
        remove::remove_empty_directory(path)?;
    } else {
        remove::remove_file(path)?;
    }
    Ok(())
}
