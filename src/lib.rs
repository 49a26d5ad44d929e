#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(test, allow(clippy::uninlined_format_args))]
#![allow(clippy::module_name_repetitions)]
//
// Documentation lints: internal helpers don't need extensive docs.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//
// Export records mirror a foreign schema field for field.
#![allow(clippy::struct_field_names)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::unreadable_literal)]

//! Incremental, deduplicating store for SMS Backup & Restore exports.
//!
//! Call and message exports are decoded by [`reader`] and merged into a [`Collection`] (one
//! JSON file) or a [`GroupedCollection`] (one JSON file per calendar partition under a base
//! directory). Re-importing overlapping exports never duplicates records.

/// The sbrdata crate version (matches `Cargo.toml`).
pub const SBRDATA_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod constants;
pub mod error;
pub mod period;
pub mod reader;
pub mod store;
pub mod types;

pub use config::SbrConfig;
pub use constants::*;
pub use error::{Result, SbrError};
pub use period::{GroupPeriod, KeyShape, KeyZone};
pub use reader::{CallLog, ExportHeader, MessageLog, decode_calls, decode_messages};
pub use store::{Collection, Dedup, GroupedCollection, KeyFuncs, load_collection};
pub use types::{
    Addr, Addrs, Call, CallSource, GroupedOptions, ImportSummary, MessageBatch, MessageSource,
    Mms, Part, Parts, Sms,
};
