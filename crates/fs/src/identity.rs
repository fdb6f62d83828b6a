use log::debug;
use myls_runtime::NOT_AVAILABLE;
use nix::unistd::{Gid, Group, Uid, User};

/// Lookup of owner and group names by numeric id.
///
/// `None` means the id has no entry; callers substitute [`NOT_AVAILABLE`].
pub trait IdentitySource {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// The system passwd and group databases.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentities;

impl IdentitySource for SystemIdentities {
    fn user_name(&self, uid: u32) -> Option<String> {
        match User::from_uid(Uid::from_raw(uid)) {
            Ok(Some(user)) => Some(user.name),
            Ok(None) => {
                debug!("[identity] no passwd entry for uid {uid}");
                None
            }
            Err(e) => {
                debug!("[identity] passwd lookup for uid {uid} failed: {e}");
                None
            }
        }
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        match Group::from_gid(Gid::from_raw(gid)) {
            Ok(Some(group)) => Some(group.name),
            Ok(None) => {
                debug!("[identity] no group entry for gid {gid}");
                None
            }
            Err(e) => {
                debug!("[identity] group lookup for gid {gid} failed: {e}");
                None
            }
        }
    }
}

pub(crate) fn name_or_placeholder(name: Option<String>) -> String {
    name.unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
