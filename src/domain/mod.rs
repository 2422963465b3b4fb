//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — facts, placement, metadata, config and report structs.
//! - `constants.rs` — fixed paths, fact name and exit codes.
//! - `error.rs` — typed error kinds surfaced to the caller.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `ServiceMetadata` field names are the top-level keys of the fact file and
//! report structs shape the `--json` output. Keep changes synchronized with
//! `docs/contracts/*`.

pub mod constants;
pub mod error;
pub mod models;
