use std::ffi::{CString, OsStr, OsString};
use std::fmt::{self, Display, Formatter};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::PathBuf;

use crate::path::{Component, join_file_text, split_file_text};
use crate::syscall;

/// A structured pathname.
///
/// # Invariants
/// - An extension is only present alongside a name.
/// - No component is empty or equal to `.`.
/// - Once built, a path is never mutated. Every operation returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    pub(crate) absolute: bool,
    pub(crate) dirs: Vec<Component>,
    pub(crate) name: Option<Component>,
    pub(crate) ext: Option<Component>,
}

impl Path {
    /// The root directory, `/`.
    pub const fn root() -> Path {
        Path {
            absolute: true,
            dirs: Vec::new(),
            name: None,
            ext: None,
        }
    }

    /// The empty relative path, `./`, which designates whatever directory it is resolved against.
    pub const fn empty() -> Path {
        Path {
            absolute: false,
            dirs: Vec::new(),
            name: None,
            ext: None,
        }
    }

    /// Parses a pathname, recognizing wildcard components.
    pub fn parse<S: AsRef<OsStr>>(value: S) -> Path {
        Path::parse_with(value.as_ref().as_bytes(), Component::pattern)
    }

    /// Parses a pathname that came from the OS. No component is ever considered wild.
    pub fn literal<S: AsRef<OsStr>>(value: S) -> Path {
        Path::parse_with(value.as_ref().as_bytes(), Component::literal)
    }

    fn parse_with(bytes: &[u8], make: fn(&[u8]) -> Component) -> Path {
        let bytes: Vec<u8> = bytes.iter().copied().filter(|&b| b != b'\0').collect();
        let absolute = bytes.first() == Some(&b'/');

        // A trailing separator, `.` or `..` can only name a directory.
        let directory = match bytes.rsplit(|&b| b == b'/').next() {
            None => true,
            Some(last) => last.is_empty() || last == b"." || last == b"..",
        };

        let mut segments: Vec<&[u8]> = bytes
            .split(|&b| b == b'/')
            .filter(|seg| !seg.is_empty() && *seg != b".")
            .collect();

        let (name, ext) = match segments.pop() {
            Some(last) if !directory => {
                let (name, ext) = split_file_text(last, make);
                (Some(name), ext)
            },
            Some(last) => {
                segments.push(last);
                (None, None)
            },
            None => (None, None),
        };

        Path {
            absolute,
            dirs: segments.into_iter().map(make).collect(),
            name,
            ext,
        }
    }

    /// Builds the path of a single directory entry, as read from the OS.
    pub(crate) fn entry(name: &[u8], directory: bool) -> Path {
        if directory {
            Path {
                dirs: vec![Component::literal(name)],
                ..Path::empty()
            }
        } else {
            let (name, ext) = split_file_text(name, Component::literal);
            Path {
                name: Some(name),
                ext,
                ..Path::empty()
            }
        }
    }

    pub const fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub const fn is_relative(&self) -> bool {
        !self.absolute
    }

    /// Whether any component of this path is a pattern rather than a concrete name.
    pub fn is_wild(&self) -> bool {
        self.dirs.iter().any(Component::is_wild)
            || self.name.as_ref().is_some_and(Component::is_wild)
            || self.ext.as_ref().is_some_and(Component::is_wild)
    }

    /// The directory components, in order, excluding the final component.
    pub fn components(&self) -> impl Iterator<Item = &OsStr> {
        self.dirs.iter().map(Component::as_os_str)
    }

    pub fn name(&self) -> Option<&OsStr> {
        self.name.as_ref().map(Component::as_os_str)
    }

    pub fn extension(&self) -> Option<&OsStr> {
        self.ext.as_ref().map(Component::as_os_str)
    }

    /// The full text of the final component, name and extension together.
    pub fn file_name(&self) -> Option<OsString> {
        self.name
            .as_ref()
            .map(|name| OsString::from_vec(join_file_text(name, self.ext.as_ref())))
    }

    /// Merges `other` onto the directory part of this path. An absolute `other` is returned as is.
    pub fn join(&self, other: &Path) -> Path {
        if other.absolute {
            return other.clone();
        }
        Path {
            absolute: self.absolute,
            dirs: self.dirs.iter().chain(other.dirs.iter()).cloned().collect(),
            name: other.name.clone(),
            ext: other.ext.clone(),
        }
    }

    fn render(&self, trailing_separator: bool) -> Vec<u8> {
        let mut out = Vec::new();
        if self.absolute {
            out.push(b'/');
        }
        for (i, dir) in self.dirs.iter().enumerate() {
            if i > 0 {
                out.push(b'/');
            }
            out.extend_from_slice(dir.as_bytes());
        }
        match &self.name {
            Some(name) => {
                if !self.dirs.is_empty() {
                    out.push(b'/');
                }
                out.extend(join_file_text(name, self.ext.as_ref()));
            },
            None if !self.dirs.is_empty() && trailing_separator => out.push(b'/'),
            None => (),
        }
        if out.is_empty() {
            out.extend_from_slice(if trailing_separator { b"./" } else { b"." });
        }
        out
    }

    /// The textual form of this path. Directory-form paths end with a separator.
    pub fn to_os_string(&self) -> OsString {
        OsString::from_vec(self.render(true))
    }

    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.to_os_string())
    }

    /// The pathname handed to the OS. A directory-form path drops its trailing separator so that
    /// the entry itself (and not what it might link to) is what gets named.
    pub(crate) fn to_c_string(&self) -> CString {
        syscall::c_string(self.render(false))
    }

    /// The pathname with its form preserved, for storing as a link target.
    pub(crate) fn to_c_string_verbatim(&self) -> CString {
        syscall::c_string(self.render(true))
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::empty()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", OsStr::from_bytes(&self.render(true)).to_string_lossy())
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Path::parse(value)
    }
}

impl From<&OsStr> for Path {
    fn from(value: &OsStr) -> Self {
        Path::parse(value)
    }
}

impl From<&std::path::Path> for Path {
    fn from(value: &std::path::Path) -> Self {
        Path::literal(value.as_os_str())
    }
}

impl From<PathBuf> for Path {
    fn from(value: PathBuf) -> Self {
        Path::literal(value.as_os_str())
    }
}
