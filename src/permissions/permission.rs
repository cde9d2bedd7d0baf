use derive_more::Display;
use libc::mode_t;

/// One of the twelve permission flags of a POSIX mode.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    #[display("user-read")]
    UserRead,
    #[display("user-write")]
    UserWrite,
    #[display("user-exec")]
    UserExec,
    #[display("group-read")]
    GroupRead,
    #[display("group-write")]
    GroupWrite,
    #[display("group-exec")]
    GroupExec,
    #[display("other-read")]
    OtherRead,
    #[display("other-write")]
    OtherWrite,
    #[display("other-exec")]
    OtherExec,
    #[display("set-user-id")]
    SetUserId,
    #[display("set-group-id")]
    SetGroupId,
    #[display("sticky")]
    Sticky,
}

use Permission::*;

/// Each flag alongside its mode bit, in declaration order so that a flag's position in the table
/// is its discriminant. Lookups go both ways through this one table.
pub(crate) const TABLE: [(Permission, mode_t); 12] = [
    (UserRead, libc::S_IRUSR),
    (UserWrite, libc::S_IWUSR),
    (UserExec, libc::S_IXUSR),
    (GroupRead, libc::S_IRGRP),
    (GroupWrite, libc::S_IWGRP),
    (GroupExec, libc::S_IXGRP),
    (OtherRead, libc::S_IROTH),
    (OtherWrite, libc::S_IWOTH),
    (OtherExec, libc::S_IXOTH),
    (SetUserId, libc::S_ISUID),
    (SetGroupId, libc::S_ISGID),
    (Sticky, libc::S_ISVTX),
];

/// Every mode bit that has a flag.
pub(crate) const MASK: mode_t = {
    let mut mask = 0;
    let mut i = 0;
    while i < TABLE.len() {
        mask |= TABLE[i].1;
        i += 1;
    }
    mask
};

impl Permission {
    pub const ALL: [Permission; 12] = {
        let mut all = [UserRead; 12];
        let mut i = 0;
        while i < TABLE.len() {
            all[i] = TABLE[i].0;
            i += 1;
        }
        all
    };

    pub const fn bit(self) -> mode_t {
        TABLE[self as usize].1
    }

    /// The flag for a single mode bit, if it has one.
    pub fn from_bit(bit: mode_t) -> Option<Permission> {
        TABLE.iter().find(|(_, b)| *b == bit).map(|(p, _)| *p)
    }
}
