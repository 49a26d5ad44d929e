//! Batch seams through which decoded records enter a store.

use super::{Call, Mms, Sms};

/// Anything that can hand out a batch of calls.
pub trait CallSource {
    fn calls(&self) -> &[Call];
}

/// Anything that can hand out a batch of SMS and MMS.
///
/// Implementations return an empty slice, never a missing one, when the source had no
/// messages of a kind.
pub trait MessageSource {
    fn sms(&self) -> &[Sms];
    fn mms(&self) -> &[Mms];
}

impl CallSource for [Call] {
    fn calls(&self) -> &[Call] {
        self
    }
}

impl CallSource for Vec<Call> {
    fn calls(&self) -> &[Call] {
        self
    }
}

/// Free-standing SMS/MMS batch, for callers that did not get their messages from an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBatch {
    pub sms: Vec<Sms>,
    pub mms: Vec<Mms>,
}

impl MessageSource for MessageBatch {
    fn sms(&self) -> &[Sms] {
        &self.sms
    }

    fn mms(&self) -> &[Mms] {
        &self.mms
    }
}
