use tracing::{debug, trace};

use crate::cwd::CwdGuard;
use crate::dir::DirStream;
use crate::error::RootNotFoundError;
use crate::kind;
use crate::path::Path;
use crate::walk::{DirectoryOrder, WalkError, WalkOptions};

impl<F: FnMut(&Path) -> bool> WalkOptions<F> {
    /// Walks the tree under `root`, passing each accepted entry to `visit` as a path relative to
    /// `root`. For the duration of the walk `root` is the working directory, so those paths can be
    /// used as they are.
    ///
    /// Files are visited if the filter accepts them. Directories are handled according to
    /// [`directories`](WalkOptions::directories). The root is existence-checked first as a
    /// directory, following links: if there is no directory there (nothing at all, or something
    /// that isn't a directory) the walk fails with a [`RootNotFoundError`] or does nothing, as set
    /// by [`if_missing`](WalkOptions::if_missing).
    ///
    /// The first error returned by `visit`, or met while walking, ends the walk and is returned.
    pub fn walk<E, V>(&mut self, root: &Path, visit: V) -> Result<(), E>
    where
        V: FnMut(&Path) -> Result<(), E>,
        E: From<WalkError>,
    {
        let root = root
            .to_directory_form()
            .map_err(WalkError::from)?
            .to_absolute_cwd()
            .map_err(WalkError::from)?;

        let found = kind::classify(&root, true).map_err(WalkError::from)?;
        if !found.is_directory() {
            if self.missing_root.is_ignore() {
                debug!(root = %root, found = ?found, "walk root is missing, nothing to do");
                return Ok(());
            }
            Err(WalkError::from(RootNotFoundError))?
        }

        debug!(root = %root, order = ?self.directories, "walking directory tree");
        let _cwd = CwdGuard::enter(&root).map_err(WalkError::from)?;

        let include_root = self.include_root;
        let mut walker = Walker {
            options: self,
            visit,
        };
        if include_root {
            walker.directory(&root, &Path::empty())
        } else {
            walker.children(&root, &Path::empty())
        }
    }
}

/// Walks the tree under `root` with the default options: every file is visited, directories
/// (including links to them) are descended into but not visited, and a missing root is an error.
pub fn walk_directory<E, V>(root: &Path, visit: V) -> Result<(), E>
where
    V: FnMut(&Path) -> Result<(), E>,
    E: From<WalkError>,
{
    WalkOptions::new().walk(root, visit)
}

struct Walker<'a, F, V> {
    options: &'a mut WalkOptions<F>,
    visit: V,
}

impl<F, V, E> Walker<'_, F, V>
where
    F: FnMut(&Path) -> bool,
    V: FnMut(&Path) -> Result<(), E>,
    E: From<WalkError>,
{
    /// A directory node, given both absolutely and relative to the root.
    fn directory(&mut self, abs: &Path, rel: &Path) -> Result<(), E> {
        match self.options.directories {
            DirectoryOrder::Excluded => self.children(abs, rel),
            DirectoryOrder::PreOrder => {
                if !(self.options.filter)(rel) {
                    trace!(dir = %rel, "filter rejected directory, pruning");
                    return Ok(());
                }
                (self.visit)(rel)?;
                self.children(abs, rel)
            },
            DirectoryOrder::PostOrder => {
                self.children(abs, rel)?;
                if (self.options.filter)(rel) {
                    (self.visit)(rel)?;
                }
                Ok(())
            },
        }
    }

    fn children(&mut self, abs: &Path, rel: &Path) -> Result<(), E> {
        let mut stream = DirStream::open(abs).map_err(WalkError::from)?;

        while let Some(entry) = stream.next_entry() {
            let entry = entry.map_err(WalkError::from)?;
            let child_rel = rel.join(&entry);
            if entry.is_file_form() {
                self.leaf(&child_rel)?;
                continue;
            }

            let child_abs = abs.join(&entry);
            if !self.options.follow_symlinks
                && kind::classify(&child_abs, false).map_err(WalkError::from)?.is_symlink()
            {
                // Not entered, so it's just a link.
                self.leaf(&child_rel.to_file_form().map_err(WalkError::from)?)?;
            } else {
                self.directory(&child_abs, &child_rel)?;
            }
        }
        Ok(())
    }

    fn leaf(&mut self, rel: &Path) -> Result<(), E> {
        if (self.options.filter)(rel) {
            (self.visit)(rel)?;
        }
        Ok(())
    }
}
