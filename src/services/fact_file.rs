use crate::cli::OwnershipMode;
use crate::domain::constants::FACT_FILE_MODE;
use crate::domain::error::FactError;
use crate::domain::models::{
    ApplyReport, OwnershipStatus, Placement, ServiceMetadata, WriteStatus,
};
use crate::services::metadata::render_document;
use crate::services::ownership;
use sha2::{Digest, Sha256};
use std::io::Write;
use std::path::Path;

/// Validate, render and converge the fact file at `target`.
///
/// Validation runs before anything touches the filesystem. `target` is the
/// placement path, or its re-based form when staging under another root.
pub fn render(
    meta: &ServiceMetadata,
    placement: &Placement,
    target: &Path,
    mode: OwnershipMode,
) -> anyhow::Result<ApplyReport> {
    let doc = render_document(meta)?;
    let (status, ownership) = write_fact_file(target, &doc, placement, mode)?;
    tracing::info!(
        path = %target.display(),
        status = ?status,
        ownership = ?ownership,
        "fact file converged"
    );
    Ok(ApplyReport {
        path: target.to_string_lossy().replace('\\', "/"),
        owner: placement.owner.clone(),
        group: placement.group.clone(),
        status,
        sha256: digest(&doc),
        ownership,
    })
}

pub fn digest(doc: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(doc.as_bytes());
    hex::encode(hasher.finalize())
}

/// Atomically replace `path` with `contents`.
///
/// The document is staged in a temp file next to `path`, given its mode and
/// ownership, then renamed over the target. A run whose bytes, mode and
/// ownership already match leaves the file alone.
pub fn write_fact_file(
    path: &Path,
    contents: &str,
    placement: &Placement,
    mode: OwnershipMode,
) -> Result<(WriteStatus, OwnershipStatus), FactError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| FactError::fs(parent, e))?;

    let owner = match mode {
        OwnershipMode::Enforce => Some(ownership::lookup(
            &placement.owner,
            &placement.group,
            path,
        )?),
        OwnershipMode::Skip => None,
    };
    let ownership_status = match owner {
        Some(_) => OwnershipStatus::Enforced,
        None => OwnershipStatus::Skipped,
    };

    let existing = match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(FactError::fs(path, e)),
    };

    if existing.as_deref() == Some(contents.as_bytes()) {
        let owned = match owner {
            Some(o) => ownership::matches(path, o)?,
            None => true,
        };
        if owned && mode_matches(path)? {
            tracing::debug!(path = %path.display(), "fact file already current");
            return Ok((WriteStatus::Unchanged, ownership_status));
        }
    }

    let mut staged = tempfile::Builder::new()
        .prefix(".profile_metadata.")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| FactError::fs(parent, e))?;
    staged
        .write_all(contents.as_bytes())
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|e| FactError::fs(staged.path(), e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(
            staged.path(),
            std::fs::Permissions::from_mode(FACT_FILE_MODE),
        )
            .map_err(|e| FactError::fs(staged.path(), e))?;
    }

    if let Some(o) = owner {
        ownership::apply(staged.path(), o)?;
    }

    staged
        .persist(path)
        .map_err(|e| FactError::fs(path, e.error))?;

    Ok((
        if existing.is_some() {
            WriteStatus::Updated
        } else {
            WriteStatus::Created
        },
        ownership_status,
    ))
}

#[cfg(unix)]
fn mode_matches(path: &Path) -> Result<bool, FactError> {
    use std::os::unix::fs::PermissionsExt;

    let meta = std::fs::metadata(path).map_err(|e| FactError::fs(path, e))?;
    Ok(meta.permissions().mode() & 0o777 == FACT_FILE_MODE)
}

#[cfg(not(unix))]
fn mode_matches(_path: &Path) -> Result<bool, FactError> {
    Ok(true)
}

pub fn read_fact_file(path: &Path) -> anyhow::Result<ServiceMetadata> {
    let raw = std::fs::read_to_string(path).map_err(|e| FactError::fs(path, e))?;
    Ok(serde_yaml::from_str(&raw)?)
}
