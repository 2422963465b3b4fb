use crate::cli::OwnershipMode;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Macos,
    Windows,
    /// Linux and every other non-Darwin, non-Windows family.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsFacts {
    pub family: OsFamily,
    /// Only meaningful (and required) on Windows.
    pub appdata_root: Option<String>,
}

/// Where and as whom the fact file is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Forward-slash separated on every family.
    pub path: String,
    pub owner: String,
    pub group: String,
}

/// Rendered as the fact file. Field order is the key order of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceMetadata {
    pub owner_uid: String,
    pub team: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub end_users: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime_impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_fqdns: Vec<String>,
}

/// Caller-supplied parameters before required fields are checked.
/// Shape of the `--params` TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataParams {
    pub owner_uid: Option<String>,
    pub team: Option<String>,
    pub end_users: Option<Vec<String>>,
    pub escalation_period: Option<String>,
    pub downtime_impact: Option<String>,
    pub notes: Option<String>,
    pub doc_urls: Option<Vec<String>>,
    pub human_name: Option<String>,
    pub other_fqdns: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize)]
pub struct ConfigGeneral {
    #[serde(default)]
    pub ownership: Option<OwnershipMode>,
    #[serde(default = "default_true")]
    pub audit: bool,
}

impl Default for ConfigGeneral {
    fn default() -> Self {
        Self {
            ownership: None,
            audit: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    Created,
    Updated,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipStatus {
    Enforced,
    Skipped,
}

#[derive(Debug, Serialize)]
pub struct ApplyReport {
    /// Path actually written, after any `--root` re-basing.
    pub path: String,
    pub owner: String,
    pub group: String,
    pub status: WriteStatus,
    pub sha256: String,
    pub ownership: OwnershipStatus,
}

#[derive(Debug, Serialize)]
pub struct ValidateReport {
    pub valid: bool,
    pub keys: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RenderReport {
    pub document: String,
    pub sha256: String,
    pub keys: Vec<String>,
}
