use crate::cli::MetadataArgs;
use crate::domain::constants::MAX_FQDN_LEN;
use crate::domain::error::FactError;
use crate::domain::models::{MetadataParams, ServiceMetadata};
use std::path::Path;

pub fn load_params(path: &Path) -> Result<MetadataParams, FactError> {
    let raw = std::fs::read_to_string(path).map_err(|e| FactError::fs(path, e))?;
    parse_params(&raw)
}

/// A malformed or misnamed parameter is a metadata error, not a config one.
pub fn parse_params(raw: &str) -> Result<MetadataParams, FactError> {
    toml::from_str(raw).map_err(|e| FactError::invalid("params", e.message().to_string()))
}

/// Overlay CLI flags on top of file parameters. A repeated list flag
/// replaces the file's list instead of extending it.
pub fn merge_params(base: MetadataParams, args: &MetadataArgs) -> MetadataParams {
    fn list(flag: &[String], base: Option<Vec<String>>) -> Option<Vec<String>> {
        if flag.is_empty() {
            base
        } else {
            Some(flag.to_vec())
        }
    }

    MetadataParams {
        owner_uid: args.owner_uid.clone().or(base.owner_uid),
        team: args.team.clone().or(base.team),
        end_users: list(&args.end_users, base.end_users),
        escalation_period: args.escalation_period.clone().or(base.escalation_period),
        downtime_impact: args.downtime_impact.clone().or(base.downtime_impact),
        notes: args.notes.clone().or(base.notes),
        doc_urls: list(&args.doc_urls, base.doc_urls),
        human_name: args.human_name.clone().or(base.human_name),
        other_fqdns: list(&args.other_fqdns, base.other_fqdns),
    }
}

/// Read `--params` (if any) and apply flag overrides.
pub fn params_from_args(args: &MetadataArgs) -> anyhow::Result<MetadataParams> {
    let base = match &args.params {
        Some(p) => load_params(p)?,
        None => MetadataParams::default(),
    };
    Ok(merge_params(base, args))
}

/// Required fields default to empty so that validation reports them.
/// Blank optional strings are dropped.
pub fn into_metadata(params: MetadataParams) -> ServiceMetadata {
    fn present(v: Option<String>) -> Option<String> {
        v.filter(|s| !s.trim().is_empty())
    }

    ServiceMetadata {
        owner_uid: params.owner_uid.unwrap_or_default(),
        team: params.team.unwrap_or_default(),
        end_users: params.end_users.unwrap_or_default(),
        escalation_period: present(params.escalation_period),
        downtime_impact: present(params.downtime_impact),
        notes: present(params.notes),
        doc_urls: params.doc_urls.unwrap_or_default(),
        human_name: present(params.human_name),
        other_fqdns: params.other_fqdns.unwrap_or_default(),
    }
}

pub fn validate(meta: &ServiceMetadata) -> Result<(), FactError> {
    if meta.owner_uid.trim().is_empty() {
        return Err(FactError::invalid("owner_uid", "must not be empty"));
    }
    if meta.team.trim().is_empty() {
        return Err(FactError::invalid("team", "must not be empty"));
    }
    for u in &meta.end_users {
        if !is_contact(u) {
            return Err(FactError::invalid(
                "end_users",
                format!("not an email-like contact: {:?}", u),
            ));
        }
    }
    for u in &meta.doc_urls {
        if !is_http_url(u) {
            return Err(FactError::invalid(
                "doc_urls",
                format!("not an http(s) URL: {:?}", u),
            ));
        }
    }
    for h in &meta.other_fqdns {
        if !is_hostname(h) {
            return Err(FactError::invalid(
                "other_fqdns",
                format!("not a hostname: {:?}", h),
            ));
        }
    }
    Ok(())
}

fn is_contact(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn is_http_url(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let rest = match s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))
    {
        Some(r) => r,
        None => return false,
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    !host.is_empty()
}

fn is_hostname(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_FQDN_LEN {
        return false;
    }
    s.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Validate and serialize. Key order follows `ServiceMetadata`'s fields.
pub fn render_document(meta: &ServiceMetadata) -> anyhow::Result<String> {
    validate(meta)?;
    Ok(serde_yaml::to_string(meta)?)
}

/// Top-level keys the rendered document will carry.
pub fn document_keys(meta: &ServiceMetadata) -> anyhow::Result<Vec<String>> {
    let value = serde_yaml::to_value(meta)?;
    Ok(match value {
        serde_yaml::Value::Mapping(map) => map
            .keys()
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    })
}
