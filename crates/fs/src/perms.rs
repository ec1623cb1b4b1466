use std::{fs, io, path::Path};

use log::debug;

use crate::record::FileRecord;

/// Owner, group and other write bits.
#[cfg(unix)]
const WRITE_BITS: u32 = 0o222;

/// True when the write bit that applies to the current user is set: the owner
/// bit if the effective uid owns the file, else the group bit if one of the
/// caller's groups owns it, else the other bit. Errors read as `false`.
pub fn is_writable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => user_may_write(&meta),
        Err(e) => {
            debug!("[perms] stat {:?} failed: {e}", path);
            false
        }
    }
}

#[cfg(unix)]
fn user_may_write(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;

    Identity::current().write_bit_set(meta.mode(), meta.uid(), meta.gid())
}

#[cfg(not(unix))]
fn user_may_write(meta: &fs::Metadata) -> bool {
    !meta.permissions().readonly()
}

/// Effective uid and group memberships of this process.
#[cfg(unix)]
#[derive(Debug, Clone, PartialEq, Eq)]
struct Identity {
    uid: u32,
    gid: u32,
    groups: Vec<u32>,
}

#[cfg(unix)]
impl Identity {
    fn current() -> &'static Identity {
        use std::sync::OnceLock;

        static CURRENT: OnceLock<Identity> = OnceLock::new();
        CURRENT.get_or_init(|| Identity {
            uid: nix::unistd::geteuid().as_raw(),
            gid: nix::unistd::getegid().as_raw(),
            groups: supplementary_groups(),
        })
    }

    fn in_group(&self, gid: u32) -> bool {
        self.gid == gid || self.groups.contains(&gid)
    }

    fn write_bit_set(&self, mode: u32, file_uid: u32, file_gid: u32) -> bool {
        let bit = if file_uid == self.uid {
            0o200
        } else if self.in_group(file_gid) {
            0o020
        } else {
            0o002
        };
        mode & bit != 0
    }
}

#[cfg(all(unix, not(target_vendor = "apple")))]
fn supplementary_groups() -> Vec<u32> {
    match nix::unistd::getgroups() {
        Ok(groups) => groups.into_iter().map(|g| g.as_raw()).collect(),
        Err(e) => {
            debug!("[perms] getgroups failed: {e}");
            Vec::new()
        }
    }
}

// getgroups(2) is unreliable on Apple platforms; the effective gid stands in.
#[cfg(all(unix, target_vendor = "apple"))]
fn supplementary_groups() -> Vec<u32> {
    Vec::new()
}

/// Clears every write bit on `path`, leaving the remaining mode bits alone.
///
/// Returns `false` instead of an error so one failure never stops a batch.
pub fn make_readonly(path: &Path) -> bool {
    match clear_write_bits(path) {
        Ok(()) => true,
        Err(e) => {
            debug!("[perms] chmod {:?} failed: {e}", path);
            false
        }
    }
}

#[cfg(unix)]
fn clear_write_bits(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(path)?.permissions().mode();
    fs::set_permissions(path, fs::Permissions::from_mode(mode & !WRITE_BITS))
}

#[cfg(not(unix))]
fn clear_write_bits(path: &Path) -> io::Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_readonly(true);
    fs::set_permissions(path, perms)
}

/// Outcome of a bulk [`make_readonly_all`] pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadonlyTally {
    pub successful: usize,
    pub failed: usize,
}

/// Applies [`make_readonly`] to every record. No rollback on partial failure.
pub fn make_readonly_all<'a, I>(files: I) -> ReadonlyTally
where
    I: IntoIterator<Item = &'a FileRecord>,
{
    files
        .into_iter()
        .fold(ReadonlyTally::default(), |mut tally, f| {
            if make_readonly(&f.path) {
                tally.successful += 1;
            } else {
                tally.failed += 1;
            }
            tally
        })
}

#[cfg(all(test, unix))]
#[path = "perms_tests.rs"]
mod tests;
