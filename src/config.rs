//! The `sbr.config` file kept next to a grouped store.
//!
//! It pins the grouping period and backup policy of a store directory so later imports cannot
//! accidentally re-partition it with different flags.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::CONFIG_FILE_NAME;
use crate::error::Result;
use crate::period::GroupPeriod;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SbrConfig {
    #[serde(default)]
    pub group_period: GroupPeriod,
    #[serde(default)]
    pub backup: bool,
}

impl SbrConfig {
    #[must_use]
    pub fn new(group_period: GroupPeriod, backup: bool) -> Self {
        Self {
            group_period,
            backup,
        }
    }

    /// Location of the config file inside `base_directory`.
    #[must_use]
    pub fn path_in(base_directory: &Path) -> PathBuf {
        base_directory.join(CONFIG_FILE_NAME)
    }

    /// Return the stored config of `base_directory`, or persist `fallback` as the stored config
    /// when there is none yet.
    pub fn load_or_init(base_directory: &Path, fallback: Self) -> Result<Self> {
        let path = Self::path_in(base_directory);
        match fs_err::read(&path) {
            Ok(bytes) => {
                let config: Self = serde_json::from_slice(&bytes)?;
                debug!(path = %path.display(), ?config, "loaded store config");
                Ok(config)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs_err::create_dir_all(base_directory)?;
                fallback.save(&path)?;
                debug!(path = %path.display(), config = ?fallback, "initialised store config");
                Ok(fallback)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self)?;
        let mut file = AtomicWriteFile::open(path)?;
        file.write_all(&bytes)?;
        file.commit()?;
        Ok(())
    }
}
