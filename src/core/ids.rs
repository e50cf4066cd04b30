//! Owner and group name resolution.
//!
//! Lookups go through a [UsersCache] so a directory with many entries owned by the same
//! user only hits the passwd/group databases once. A miss is not an error: the decimal id
//! is displayed instead.

use users::{Groups, Users, UsersCache};

pub struct IdResolver {
    cache: UsersCache,
}

impl IdResolver {
    pub fn new() -> Self {
        Self {
            cache: UsersCache::new(),
        }
    }

    /// Name for `uid`, or the uid itself when no passwd entry exists.
    pub fn owner_name(&self, uid: u32) -> String {
        self.cache
            .get_user_by_uid(uid)
            .map(|user| user.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| uid.to_string())
    }

    /// Name for `gid`, or the gid itself when no group entry exists.
    pub fn group_name(&self, gid: u32) -> String {
        self.cache
            .get_group_by_gid(gid)
            .map(|group| group.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| gid.to_string())
    }
}

impl Default for IdResolver {
    fn default() -> Self {
        Self::new()
    }
}
