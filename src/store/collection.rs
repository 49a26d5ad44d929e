//! A single JSON-backed partition of calls and messages.

use std::io::{ErrorKind, Write};
use std::path::Path;

use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};

use super::backup::backup_existing;
use super::dedup::contains;
use crate::error::{Result, SbrError};
use crate::types::{Call, CallSource, ImportSummary, MessageSource, Mms, Sms, null_as_empty};

/// Deduplicated set of calls, SMS and MMS persisted as one JSON document.
///
/// Calls and SMS are unique by all of their fields, MMS by `(date, address)`. Records are only
/// ever appended; [`Collection::save`] is the only write path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Collection {
    #[serde(default)]
    key: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    calls: Vec<Call>,
    #[serde(default, alias = "SMS", deserialize_with = "null_as_empty")]
    sms: Vec<Sms>,
    #[serde(default, alias = "MMS", deserialize_with = "null_as_empty")]
    mms: Vec<Mms>,
    #[serde(skip)]
    verbose: bool,
    #[serde(skip)]
    backup: bool,
    /// Set by every successful append, cleared by `save`.
    #[serde(skip)]
    dirty: bool,
}

impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.calls == other.calls
            && self.sms == other.sms
            && self.mms == other.mms
    }
}

impl Eq for Collection {}

impl Collection {
    /// Empty collection for `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Read and decode a collection. Decode errors are returned as is.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs_err::read(path.as_ref())?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Like [`Collection::load`], but a missing file yields an empty collection.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path.as_ref()) {
            Err(SbrError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.as_ref().display(), "no collection yet, starting empty");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Serialise everything to `path`, atomically replacing the previous file.
    ///
    /// With backup enabled an existing file is copied aside first, and a failed copy aborts
    /// the save before anything is overwritten.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = serde_json::to_vec(self)?;
        if self.backup {
            backup_existing(path)?;
        }
        let mut file = AtomicWriteFile::open(path)?;
        file.write_all(&data)?;
        file.commit()?;
        self.dirty = false;
        tracing::debug!(
            path = %path.display(),
            calls = self.calls.len(),
            sms = self.sms.len(),
            mms = self.mms.len(),
            "saved collection"
        );
        Ok(())
    }

    /// Add every call of the source that is not yet known.
    pub fn add_calls<S: CallSource + ?Sized>(&mut self, source: &S) -> ImportSummary {
        let mut summary = ImportSummary::default();
        for call in source.calls() {
            summary.record(self.insert_call(call.clone()));
        }
        summary
    }

    /// Add every SMS and MMS of the source that is not yet known.
    pub fn add_messages<S: MessageSource + ?Sized>(&mut self, source: &S) -> ImportSummary {
        let mut summary = self.add_sms(source.sms().iter().cloned());
        summary.merge(self.add_mms(source.mms().iter().cloned()));
        summary
    }

    pub fn add_sms(&mut self, messages: impl IntoIterator<Item = Sms>) -> ImportSummary {
        let mut summary = ImportSummary::default();
        for sms in messages {
            summary.record(self.insert_sms(sms));
        }
        summary
    }

    pub fn add_mms(&mut self, messages: impl IntoIterator<Item = Mms>) -> ImportSummary {
        let mut summary = ImportSummary::default();
        for mms in messages {
            summary.record(self.insert_mms(mms));
        }
        summary
    }

    /// Returns `true` if the call was new.
    pub fn insert_call(&mut self, call: Call) -> bool {
        if contains(&self.calls, &call) {
            return false;
        }
        if self.verbose {
            tracing::info!(contact = %call.contact_name, date = %call.date, key = %self.key, "adding call");
        }
        self.calls.push(call);
        self.dirty = true;
        true
    }

    /// Returns `true` if the SMS was new.
    pub fn insert_sms(&mut self, sms: Sms) -> bool {
        if contains(&self.sms, &sms) {
            return false;
        }
        if self.verbose {
            tracing::info!(contact = %sms.contact_name, date = %sms.date, key = %self.key, "adding sms");
        }
        self.sms.push(sms);
        self.dirty = true;
        true
    }

    /// Returns `true` if no MMS with the same date and address was stored.
    pub fn insert_mms(&mut self, mms: Mms) -> bool {
        if contains(&self.mms, &mms) {
            return false;
        }
        if self.verbose {
            tracing::info!(contact = %mms.contact_name, date = %mms.date, key = %self.key, "adding mms");
        }
        self.mms.push(mms);
        self.dirty = true;
        true
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    #[must_use]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    #[must_use]
    pub fn sms(&self) -> &[Sms] {
        &self.sms
    }

    #[must_use]
    pub fn mms(&self) -> &[Mms] {
        &self.mms
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty() && self.sms.is_empty() && self.mms.is_empty()
    }

    /// Whether records were added since the last save (or since creation).
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn set_backup(&mut self, backup: bool) {
        self.backup = backup;
    }

    /// Used by bulk regrouping, where every record is already known to be unique.
    pub(crate) fn push_unchecked(&mut self, record: Record) {
        match record {
            Record::Call(call) => self.calls.push(call),
            Record::Sms(sms) => self.sms.push(sms),
            Record::Mms(mms) => self.mms.push(mms),
        }
    }
}

impl CallSource for Collection {
    fn calls(&self) -> &[Call] {
        &self.calls
    }
}

impl MessageSource for Collection {
    fn sms(&self) -> &[Sms] {
        &self.sms
    }

    fn mms(&self) -> &[Mms] {
        &self.mms
    }
}

pub(crate) enum Record {
    Call(Call),
    Sms(Sms),
    Mms(Mms),
}

/// Read `path` as a collection.
pub fn load_collection(path: impl AsRef<Path>) -> Result<Collection> {
    Collection::load(path)
}
