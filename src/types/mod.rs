//! Public types exposed by the `sbrdata` crate.

pub mod call;
pub mod message;
pub mod options;
pub mod source;

pub use call::Call;
pub use message::{Addr, Addrs, Mms, Part, Parts, Sms};
pub use options::GroupedOptions;
pub use source::{CallSource, MessageBatch, MessageSource};

use serde::{Deserialize, Deserializer};

/// Counts reported by an `add_*` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records appended to a partition.
    pub added: usize,
    /// Records that matched an already stored record.
    pub duplicates: usize,
    /// Records dropped because their partition could not be resolved.
    pub skipped: usize,
}

impl ImportSummary {
    pub(crate) fn record(&mut self, added: bool) {
        if added {
            self.added += 1;
        } else {
            self.duplicates += 1;
        }
    }

    pub(crate) fn merge(&mut self, other: Self) {
        self.added += other.added;
        self.duplicates += other.duplicates;
        self.skipped += other.skipped;
    }

    /// Number of records looked at.
    #[must_use]
    pub fn total(&self) -> usize {
        self.added + self.duplicates + self.skipped
    }
}

// Stores written by older tooling serialise empty lists as `null`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
