use std::fmt::{self, Display, Formatter};

use libc::mode_t;

use crate::permissions::{MASK, Permission};

/// A set of [`Permission`]s, stored as the mode bits they stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PermissionSet {
    mode: mode_t,
}

impl PermissionSet {
    pub const fn empty() -> PermissionSet {
        PermissionSet { mode: 0 }
    }

    pub const fn all() -> PermissionSet {
        PermissionSet { mode: MASK }
    }

    /// The permissions in a mode, ignoring the file type and any other bits.
    pub const fn from_mode(mode: mode_t) -> PermissionSet {
        PermissionSet { mode: mode & MASK }
    }

    pub const fn to_mode(self) -> mode_t {
        self.mode
    }

    pub const fn contains(&self, permission: Permission) -> bool {
        self.mode & permission.bit() != 0
    }

    pub const fn insert(&mut self, permission: Permission) -> bool {
        let added = !self.contains(permission);
        self.mode |= permission.bit();
        added
    }

    pub const fn remove(&mut self, permission: Permission) -> bool {
        let removed = self.contains(permission);
        self.mode &= !permission.bit();
        removed
    }

    pub const fn len(&self) -> usize {
        self.mode.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.mode == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> {
        let set = *self;
        Permission::ALL.into_iter().filter(move |p| set.contains(*p))
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        let mut set = PermissionSet::empty();
        set.extend(iter);
        set
    }
}

impl Extend<Permission> for PermissionSet {
    fn extend<T: IntoIterator<Item = Permission>>(&mut self, iter: T) {
        for permission in iter {
            self.insert(permission);
        }
    }
}

impl Display for PermissionSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, permission) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{permission}")?;
        }
        Ok(())
    }
}
