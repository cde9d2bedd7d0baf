use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

const WILD_BYTES: &[u8] = b"*?[";

/// A single segment of a path. Never empty, never holds `/` or a nul byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Component {
    text: Box<[u8]>,
    wild: bool,
}

impl Component {
    pub fn pattern(bytes: &[u8]) -> Component {
        Component {
            wild: bytes.iter().any(|b| WILD_BYTES.contains(b)),
            text: strip_nul(bytes),
        }
    }

    pub fn literal(bytes: &[u8]) -> Component {
        Component {
            wild: false,
            text: strip_nul(bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    pub fn as_os_str(&self) -> &OsStr {
        OsStr::from_bytes(&self.text)
    }

    pub const fn is_wild(&self) -> bool {
        self.wild
    }

    pub fn is_parent(&self) -> bool {
        &*self.text == b".."
    }

    /// Compares the text alone, a literal `*` and a pattern `*` name the same segment.
    pub fn same_text(&self, other: &Component) -> bool {
        self.text == other.text
    }
}

fn strip_nul(bytes: &[u8]) -> Box<[u8]> {
    bytes.iter().copied().filter(|&b| b != b'\0').collect()
}

/// Splits the text of a final component into a name and extension, on the last `.`. A leading dot
/// marks a hidden file, not an extension, and a trailing one leaves no extension to speak of.
pub(crate) fn split_file_text(
    text: &[u8],
    make: fn(&[u8]) -> Component,
) -> (Component, Option<Component>) {
    match text.iter().rposition(|&b| b == b'.') {
        Some(dot) if dot > 0 && dot + 1 < text.len() => {
            (make(&text[..dot]), Some(make(&text[dot + 1..])))
        },
        _ => (make(text), None),
    }
}

/// Joins a name and extension back into the single segment they were split from.
pub(crate) fn join_file_text(name: &Component, ext: Option<&Component>) -> Vec<u8> {
    let mut text = name.as_bytes().to_vec();
    if let Some(ext) = ext {
        text.push(b'.');
        text.extend_from_slice(ext.as_bytes());
    }
    text
}
