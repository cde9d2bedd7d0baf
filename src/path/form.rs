use crate::cwd;
use crate::error::{NoFileComponentError, SyscallError, WildPathError};
use crate::path::{Component, FormError, Path, join_file_text, split_file_text};

impl Path {
    /// True iff there is no final component. (An extension can't exist without a name.)
    pub const fn is_directory_form(&self) -> bool {
        self.name.is_none()
    }

    pub const fn is_file_form(&self) -> bool {
        self.name.is_some()
    }

    /// Reinterprets this path as naming a directory: the final component, if any, becomes the last
    /// directory component.
    pub fn to_directory_form(&self) -> Result<Path, WildPathError> {
        if self.is_wild() {
            Err(WildPathError)?
        }
        Ok(self.clone().into_directory_form())
    }

    /// Same as [`to_directory_form`](Path::to_directory_form) for paths that are known to be
    /// literal.
    pub(crate) fn into_directory_form(self) -> Path {
        let Path { absolute, mut dirs, name, ext } = self;
        if let Some(name) = name {
            dirs.push(Component::literal(&join_file_text(&name, ext.as_ref())));
        }
        Path {
            absolute,
            dirs,
            name: None,
            ext: None,
        }
    }

    /// Reinterprets this path as naming a leaf: the last directory component is split into a name
    /// and extension.
    ///
    /// Fails with [`NoFileComponentError`] if there is no directory component to take (`/`, `./`)
    /// or if it is `..`, neither of which can be used as the name of an entry.
    pub fn to_file_form(&self) -> Result<Path, FormError> {
        if self.is_wild() {
            Err(WildPathError)?
        }
        if self.is_file_form() {
            return Ok(self.clone());
        }
        match self.dirs.split_last() {
            Some((last, rest)) if !last.is_parent() => {
                let (name, ext) = split_file_text(last.as_bytes(), Component::literal);
                Ok(Path {
                    absolute: self.absolute,
                    dirs: rest.to_vec(),
                    name: Some(name),
                    ext,
                })
            },
            _ => Err(NoFileComponentError.into()),
        }
    }

    /// The directory containing this path's final component. For a directory-form path, that is
    /// the path itself.
    pub fn directory_part(&self) -> Path {
        Path {
            absolute: self.absolute,
            dirs: self.dirs.clone(),
            name: None,
            ext: None,
        }
    }

    /// Resolves a relative path against `base`. If `base` is itself relative, the result is merged
    /// again onto the current working directory, so the result is always absolute.
    pub fn to_absolute(&self, base: &Path) -> Result<Path, SyscallError> {
        if self.absolute {
            return Ok(self.clone());
        }
        let merged = base.join(self);
        if merged.absolute {
            Ok(merged)
        } else {
            Ok(cwd::current_directory()?.join(&merged))
        }
    }

    /// Resolves a relative path against the current working directory.
    pub fn to_absolute_cwd(&self) -> Result<Path, SyscallError> {
        self.to_absolute(&Path::empty())
    }

    /// Removes the longest run of leading directory components shared with `base`, returning the
    /// rest as a relative path.
    ///
    /// The root of an absolute path counts as a shared component, so two absolute paths always
    /// share a prefix. When nothing is shared (the root tags differ, or two relative paths start
    /// with different components) the components are returned **unchanged**, only tagged relative.
    /// Callers comparing unrelated trees need to check for that.
    pub fn strip_prefix(&self, base: &Path) -> Path {
        if self.absolute != base.absolute {
            return Path {
                absolute: false,
                ..self.clone()
            };
        }
        let shared = self
            .dirs
            .iter()
            .zip(base.dirs.iter())
            .take_while(|(a, b)| a.same_text(b))
            .count();
        if shared == 0 && !self.absolute {
            return self.clone();
        }
        Path {
            absolute: false,
            dirs: self.dirs[shared..].to_vec(),
            name: self.name.clone(),
            ext: self.ext.clone(),
        }
    }
}
