/// Fact-set identifier; the file is `<FACT_NAME>.yaml`.
pub const FACT_NAME: &str = "profile_metadata";

/// facts.d directory used by the puppet agent on Unix-like hosts.
pub const UNIX_FACTS_DIR: &str = "/opt/puppetlabs/facter/facts.d";

/// facts.d directory below the Windows app-data root.
pub const WINDOWS_FACTS_SUBDIR: &str = "PuppetLabs/facter/facts.d";

/// Unix permission bits of the written fact file.
pub const FACT_FILE_MODE: u32 = 0o644;

pub const WINDOWS_APPDATA_ENV: &str = "ProgramData";

pub const CONFIG_DIR: &str = ".config/profile-metadata";

/// Upper bound of a fully qualified domain name.
pub const MAX_FQDN_LEN: usize = 253;

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_INVALID_METADATA: i32 = 2;
pub const EXIT_FILESYSTEM_FAILURE: i32 = 3;
pub const EXIT_UNSUPPORTED_PLATFORM: i32 = 4;
