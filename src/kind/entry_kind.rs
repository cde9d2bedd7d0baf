use derive_more::IsVariant;
use libc::{mode_t, stat as Stat};

use crate::panic::{Panic, UnknownKindPanic};

/// The type of a filesystem entry.
///
/// [`Absent`](EntryKind::Absent) is a result like any other: the entry vanished or never existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Socket,
    Fifo,
    CharDevice,
    BlockDevice,
    Absent,
}

use EntryKind::*;

impl EntryKind {
    /// # Panics
    /// Panics if the type bits of `st_mode` are none of the seven the OS defines. That means the
    /// metadata itself is corrupt, not that the caller did something wrong.
    pub(crate) fn from_stat_mode(st_mode: mode_t) -> EntryKind {
        match st_mode & libc::S_IFMT {
            libc::S_IFBLK => BlockDevice,
            libc::S_IFCHR => CharDevice,
            libc::S_IFDIR => Directory,
            libc::S_IFIFO => Fifo,
            libc::S_IFLNK => Symlink,
            libc::S_IFREG => Regular,
            libc::S_IFSOCK => Socket,
            bits => UnknownKindPanic(bits).panic(),
        }
    }

    pub(crate) fn from_stat(raw: Option<Stat>) -> EntryKind {
        match raw {
            Some(raw) => EntryKind::from_stat_mode(raw.st_mode),
            None => Absent,
        }
    }

    /// The kind reported by readdir, if it is conclusive. Links and unknown types need a stat call.
    pub(crate) fn from_dirent_type(d_type: u8) -> Option<EntryKind> {
        Some(match d_type {
            libc::DT_BLK => BlockDevice,
            libc::DT_CHR => CharDevice,
            libc::DT_DIR => Directory,
            libc::DT_FIFO => Fifo,
            libc::DT_REG => Regular,
            libc::DT_SOCK => Socket,
            _ => None?,
        })
    }

    /// Whether an entry of this kind exists at all.
    pub const fn exists(&self) -> bool {
        !matches!(self, Absent)
    }
}
