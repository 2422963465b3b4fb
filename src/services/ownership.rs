//! Owner/group lookup and application for the fact file.

use crate::domain::error::FactError;
use std::path::Path;

/// Numeric ids resolved from the placement's owner and group names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileOwner {
    pub uid: u32,
    pub gid: u32,
}

#[cfg(unix)]
pub fn lookup(owner: &str, group: &str, path: &Path) -> Result<FileOwner, FactError> {
    use nix::unistd::{Group, User};
    use std::io::{Error, ErrorKind};

    let user = User::from_name(owner)
        .map_err(|e| FactError::fs(path, Error::from(e)))?
        .ok_or_else(|| {
            FactError::fs(
                path,
                Error::new(ErrorKind::NotFound, format!("unknown user {}", owner)),
            )
        })?;
    let grp = Group::from_name(group)
        .map_err(|e| FactError::fs(path, Error::from(e)))?
        .ok_or_else(|| {
            FactError::fs(
                path,
                Error::new(ErrorKind::NotFound, format!("unknown group {}", group)),
            )
        })?;
    Ok(FileOwner {
        uid: user.uid.as_raw(),
        gid: grp.gid.as_raw(),
    })
}

#[cfg(unix)]
pub fn apply(path: &Path, owner: FileOwner) -> Result<(), FactError> {
    use nix::unistd::{chown, Gid, Uid};

    chown(
        path,
        Some(Uid::from_raw(owner.uid)),
        Some(Gid::from_raw(owner.gid)),
    )
    .map_err(|e| FactError::fs(path, std::io::Error::from(e)))
}

#[cfg(unix)]
pub fn matches(path: &Path, owner: FileOwner) -> Result<bool, FactError> {
    use std::os::unix::fs::MetadataExt;

    let meta = std::fs::metadata(path).map_err(|e| FactError::fs(path, e))?;
    Ok(meta.uid() == owner.uid && meta.gid() == owner.gid)
}

#[cfg(not(unix))]
fn unsupported(path: &Path) -> FactError {
    FactError::fs(
        path,
        std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "ownership enforcement needs a unix host; rerun with --ownership skip",
        ),
    )
}

#[cfg(not(unix))]
pub fn lookup(_owner: &str, _group: &str, path: &Path) -> Result<FileOwner, FactError> {
    Err(unsupported(path))
}

#[cfg(not(unix))]
pub fn apply(path: &Path, _owner: FileOwner) -> Result<(), FactError> {
    Err(unsupported(path))
}

#[cfg(not(unix))]
pub fn matches(path: &Path, _owner: FileOwner) -> Result<bool, FactError> {
    Err(unsupported(path))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_is_a_filesystem_failure() {
        let err = lookup(
            "no-such-user-profile-metadata",
            "root",
            Path::new("/tmp/x.yaml"),
        )
        .unwrap_err();
        assert!(matches!(err, FactError::FilesystemFailure { .. }));
        assert!(err.to_string().contains("unknown user"));
    }

    #[test]
    fn current_owner_matches_new_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("f.yaml");
        std::fs::write(&path, "x").unwrap();
        let me = FileOwner {
            uid: nix::unistd::geteuid().as_raw(),
            gid: nix::unistd::getegid().as_raw(),
        };
        assert!(matches(&path, me).unwrap());
    }
}
