use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "profile-metadata",
    version,
    about = "Write host profile metadata as a facter external fact"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log filter directive (e.g. info, profile_metadata=debug)"
    )]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the path and ownership the fact file would use.
    Resolve {
        #[command(flatten)]
        facts: FactsArgs,
    },
    /// Print the rendered fact document without writing it.
    Render {
        #[command(flatten)]
        metadata: MetadataArgs,
    },
    /// Validate metadata parameters only.
    Validate {
        #[command(flatten)]
        metadata: MetadataArgs,
    },
    /// Write the fact file and set its ownership.
    Apply {
        #[command(flatten)]
        facts: FactsArgs,
        #[command(flatten)]
        metadata: MetadataArgs,
        #[arg(long, help = "Re-base the fact path under this directory")]
        root: Option<PathBuf>,
        #[arg(long, value_enum)]
        ownership: Option<OwnershipMode>,
    },
    /// Read back the fact file at the resolved path.
    Show {
        #[command(flatten)]
        facts: FactsArgs,
        #[arg(long, help = "Re-base the fact path under this directory")]
        root: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct FactsArgs {
    #[arg(
        long,
        help = "OS family fact (Darwin, windows, RedHat, ...); defaults to the running OS"
    )]
    pub family: Option<String>,
    #[arg(long, help = "Windows app-data root (e.g. C:\\ProgramData)")]
    pub appdata_root: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MetadataArgs {
    #[arg(long, help = "TOML file with metadata parameters")]
    pub params: Option<PathBuf>,
    #[arg(long)]
    pub owner_uid: Option<String>,
    #[arg(long)]
    pub team: Option<String>,
    #[arg(long = "end-user", help = "End-user contact (repeatable)")]
    pub end_users: Vec<String>,
    #[arg(long)]
    pub escalation_period: Option<String>,
    #[arg(long)]
    pub downtime_impact: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long = "doc-url", help = "Documentation URL (repeatable)")]
    pub doc_urls: Vec<String>,
    #[arg(long)]
    pub human_name: Option<String>,
    #[arg(long = "other-fqdn", help = "Alternate hostname (repeatable)")]
    pub other_fqdns: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipMode {
    Enforce,
    Skip,
}
