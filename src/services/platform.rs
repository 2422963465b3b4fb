use crate::cli::FactsArgs;
use crate::domain::constants::{
    FACT_NAME, UNIX_FACTS_DIR, WINDOWS_APPDATA_ENV, WINDOWS_FACTS_SUBDIR,
};
use crate::domain::error::FactError;
use crate::domain::models::{OsFacts, OsFamily, Placement};
use std::path::{Path, PathBuf};

/// Classify a host family fact. Unknown families fall into `Other`.
pub fn classify_family(raw: &str) -> OsFamily {
    match raw.trim().to_ascii_lowercase().as_str() {
        "darwin" | "macos" => OsFamily::Macos,
        "windows" => OsFamily::Windows,
        _ => OsFamily::Other,
    }
}

/// Build facts from CLI flags, filling gaps from the running host.
pub fn facts_from_args(args: &FactsArgs) -> OsFacts {
    let family = match args.family.as_deref() {
        Some(f) => classify_family(f),
        None => classify_family(std::env::consts::OS),
    };
    let appdata_root = match family {
        OsFamily::Windows => args
            .appdata_root
            .clone()
            .or_else(|| std::env::var(WINDOWS_APPDATA_ENV).ok()),
        _ => None,
    };
    OsFacts {
        family,
        appdata_root,
    }
}

pub fn resolve(facts: &OsFacts) -> Result<Placement, FactError> {
    let file = format!("{}.yaml", FACT_NAME);
    let placement = match facts.family {
        OsFamily::Macos => Placement {
            path: format!("{}/{}", UNIX_FACTS_DIR, file),
            owner: "root".to_string(),
            group: "wheel".to_string(),
        },
        OsFamily::Windows => {
            let raw = facts
                .appdata_root
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .ok_or_else(|| {
                    FactError::UnsupportedPlatform(
                        "windows facts lack an app-data root".to_string(),
                    )
                })?;
            let root = raw.replace('\\', "/");
            Placement {
                path: format!(
                    "{}/{}/{}",
                    root.trim_end_matches('/'),
                    WINDOWS_FACTS_SUBDIR,
                    file
                ),
                owner: "Administrator".to_string(),
                group: "Administrators".to_string(),
            }
        }
        OsFamily::Other => Placement {
            path: format!("{}/{}", UNIX_FACTS_DIR, file),
            owner: "root".to_string(),
            group: "root".to_string(),
        },
    };
    tracing::debug!(family = ?facts.family, path = %placement.path, "resolved placement");
    Ok(placement)
}

/// Re-base a resolved fact path under `root`, dropping any drive prefix.
pub fn rooted(path: &str, root: &Path) -> PathBuf {
    let bytes = path.as_bytes();
    let without_drive = if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
    {
        &path[2..]
    } else {
        path
    };
    root.join(without_drive.trim_start_matches('/'))
}

/// The path to operate on: the placement itself or its re-based form.
pub fn target_path(placement: &Placement, root: Option<&Path>) -> PathBuf {
    match root {
        Some(r) => rooted(&placement.path, r),
        None => PathBuf::from(&placement.path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(family: OsFamily, appdata_root: Option<&str>) -> OsFacts {
        OsFacts {
            family,
            appdata_root: appdata_root.map(str::to_string),
        }
    }

    #[test]
    fn macos_uses_wheel_group() {
        let p = resolve(&facts(OsFamily::Macos, None)).unwrap();
        assert_eq!(p.path, "/opt/puppetlabs/facter/facts.d/profile_metadata.yaml");
        assert_eq!(p.owner, "root");
        assert_eq!(p.group, "wheel");
    }

    #[test]
    fn other_families_use_root_group() {
        let p = resolve(&facts(OsFamily::Other, None)).unwrap();
        assert_eq!(p.path, "/opt/puppetlabs/facter/facts.d/profile_metadata.yaml");
        assert_eq!(p.owner, "root");
        assert_eq!(p.group, "root");
    }

    #[test]
    fn windows_substitutes_appdata_and_normalizes_separators() {
        let p = resolve(&facts(OsFamily::Windows, Some("C:\\ProgramData"))).unwrap();
        assert_eq!(
            p.path,
            "C:/ProgramData/PuppetLabs/facter/facts.d/profile_metadata.yaml"
        );
        assert_eq!(p.owner, "Administrator");
        assert_eq!(p.group, "Administrators");

        let trailing = resolve(&facts(OsFamily::Windows, Some("D:\\Data\\"))).unwrap();
        assert_eq!(
            trailing.path,
            "D:/Data/PuppetLabs/facter/facts.d/profile_metadata.yaml"
        );
    }

    #[test]
    fn windows_without_appdata_root_is_rejected() {
        for root in [None, Some(""), Some("   ")] {
            let err = resolve(&facts(OsFamily::Windows, root)).unwrap_err();
            assert!(matches!(err, FactError::UnsupportedPlatform(_)));
        }
    }

    #[test]
    fn family_facts_are_classified() {
        assert_eq!(classify_family("Darwin"), OsFamily::Macos);
        assert_eq!(classify_family("macos"), OsFamily::Macos);
        assert_eq!(classify_family("windows"), OsFamily::Windows);
        assert_eq!(classify_family("RedHat"), OsFamily::Other);
        assert_eq!(classify_family("Debian"), OsFamily::Other);
        assert_eq!(classify_family(""), OsFamily::Other);
    }

    #[test]
    fn appdata_root_is_ignored_off_windows() {
        let args = FactsArgs {
            family: Some("Darwin".to_string()),
            appdata_root: Some("C:\\ProgramData".to_string()),
        };
        assert_eq!(facts_from_args(&args), facts(OsFamily::Macos, None));
    }

    #[test]
    fn rooted_strips_leading_separator_and_drive() {
        let root = Path::new("/tmp/stage");
        assert_eq!(
            rooted("/opt/puppetlabs/facter/facts.d/profile_metadata.yaml", root),
            root.join("opt/puppetlabs/facter/facts.d/profile_metadata.yaml")
        );
        assert_eq!(
            rooted(
                "C:/ProgramData/PuppetLabs/facter/facts.d/profile_metadata.yaml",
                root
            ),
            root.join("ProgramData/PuppetLabs/facter/facts.d/profile_metadata.yaml")
        );
    }
}
