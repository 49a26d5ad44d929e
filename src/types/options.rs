//! Options used when opening a grouped store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SbrError};
use crate::period::{GroupPeriod, KeyZone};

/// Construction parameters of a [`GroupedCollection`](crate::GroupedCollection).
///
/// Validated once, when the store is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedOptions {
    /// Directory holding the partition files. Created if absent.
    pub base_directory: PathBuf,
    #[serde(default)]
    pub group_period: GroupPeriod,
    /// Calendar used to derive partition keys.
    #[serde(default)]
    pub key_zone: KeyZone,
    /// Log every record that gets added.
    #[serde(default)]
    pub verbose: bool,
    /// Copy each partition file aside before it is overwritten.
    #[serde(default)]
    pub backup: bool,
}

impl GroupedOptions {
    pub fn new(base_directory: impl Into<PathBuf>, group_period: GroupPeriod) -> Self {
        Self {
            base_directory: base_directory.into(),
            group_period,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn key_zone(mut self, key_zone: KeyZone) -> Self {
        self.key_zone = key_zone;
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let raw = self.base_directory.to_string_lossy();
        if raw.trim_matches(|c| c == ' ' || c == '\t').is_empty() {
            return Err(SbrError::InvalidOptions {
                reason: "base directory must be non empty".into(),
            });
        }
        self.key_zone.validate()
    }
}
