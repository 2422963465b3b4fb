#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const FACT_REL_UNIX: &str = "opt/puppetlabs/facter/facts.d/profile_metadata.yaml";
pub const FACT_REL_WINDOWS: &str = "ProgramData/PuppetLabs/facter/facts.d/profile_metadata.yaml";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let root = tmp.path().join("root");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&root).expect("create staging root");

        Self {
            _tmp: tmp,
            home,
            root,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("profile-metadata");
        cmd.env("HOME", &self.home).env_remove("ProgramData");
        cmd
    }

    pub fn root_arg(&self) -> &str {
        self.root.to_str().expect("root path utf8")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// `apply` staged under the temp root with ownership left alone.
    pub fn apply_json(&self, family: &str, extra: &[&str]) -> Value {
        let mut args = vec![
            "apply",
            "--family",
            family,
            "--root",
            self.root_arg(),
            "--ownership",
            "skip",
        ];
        args.extend_from_slice(extra);
        args.extend_from_slice(SAMPLE_METADATA);
        self.run_json(&args)
    }

    pub fn fact_file(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

pub const SAMPLE_METADATA: &[&str] = &[
    "--owner-uid",
    "john.doe",
    "--team",
    "infracore",
    "--end-user",
    "group1@example.com",
    "--end-user",
    "group2@example.com",
    "--escalation-period",
    "pdx-workhours",
    "--human-name",
    "Internal InfraCore CI",
];

pub fn top_level_keys(doc: &str) -> Vec<String> {
    let value: serde_yaml::Value = serde_yaml::from_str(doc).expect("valid yaml fact file");
    value
        .as_mapping()
        .expect("fact file is a mapping")
        .keys()
        .map(|k| k.as_str().expect("string key").to_string())
        .collect()
}
