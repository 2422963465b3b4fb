//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `platform.rs` — OS family classification and placement resolution.
//! - `metadata.rs` — parameter merging, validation and YAML rendering.
//! - `fact_file.rs` — atomic write/convergence and read-back of the fact file.
//! - `ownership.rs` — owner/group lookup and chown.
//! - `storage.rs` — config loading + audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized (`fact_file`, `storage`).
//! - Keep command handlers thin; delegate to services.

pub mod fact_file;
pub mod metadata;
pub mod output;
pub mod ownership;
pub mod platform;
pub mod storage;
