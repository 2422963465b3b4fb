use crate::domain::constants::CONFIG_DIR;
use crate::domain::models::ConfigFile;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(CONFIG_DIR))
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let path = match config_dir() {
        Ok(d) => d.join("config.toml"),
        Err(_) => return Ok(ConfigFile::default()),
    };
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

#[derive(Serialize)]
struct AuditEvent<'a> {
    ts: u64,
    action: &'a str,
    data: serde_json::Value,
}

/// Append one JSON line to the audit log. Failures only produce a warning.
pub fn audit(action: &str, data: serde_json::Value) {
    let Ok(dir) = config_dir() else {
        return;
    };
    let path = dir.join("audit.jsonl");
    let event = AuditEvent {
        ts: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0),
        action,
        data,
    };
    let result = std::fs::create_dir_all(&dir).and_then(|_| {
        let mut line = serde_json::to_vec(&event)?;
        line.push(b'\n');
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?
            .write_all(&line)
    });
    if let Err(e) = result {
        tracing::warn!(path = %path.display(), error = %e, "audit log not written");
    }
}
