//! Per-kind duplicate predicates.

use crate::types::{Call, Mms, Sms};

/// Decides whether an incoming record duplicates one already stored.
pub trait Dedup {
    fn is_duplicate_of(&self, stored: &Self) -> bool;
}

/// Every field takes part.
impl Dedup for Call {
    fn is_duplicate_of(&self, stored: &Self) -> bool {
        self == stored
    }
}

/// Every field takes part.
impl Dedup for Sms {
    fn is_duplicate_of(&self, stored: &Self) -> bool {
        self == stored
    }
}

/// Only `(date, address)`. Attachment metadata of an MMS changes between exports and must not
/// defeat matching.
impl Dedup for Mms {
    fn is_duplicate_of(&self, stored: &Self) -> bool {
        self.date == stored.date && self.address == stored.address
    }
}

/// Linear membership scan.
pub(crate) fn contains<T: Dedup>(stored: &[T], candidate: &T) -> bool {
    stored.iter().any(|existing| candidate.is_duplicate_of(existing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_differing_in_any_field_are_distinct() {
        let a = Call {
            number: "1".into(),
            date: "10".into(),
            ..Default::default()
        };
        let mut b = a.clone();
        assert!(b.is_duplicate_of(&a));
        b.readable_date = "changed".into();
        assert!(!b.is_duplicate_of(&a));
    }

    #[test]
    fn mms_matches_on_date_and_address_only() {
        let a = Mms {
            date: "10".into(),
            address: "+1".into(),
            m_size: "100".into(),
            ..Default::default()
        };
        let mut b = a.clone();
        b.m_size = "200".into();
        b.contact_name = "Someone".into();
        assert!(b.is_duplicate_of(&a));
        b.address = "+2".into();
        assert!(!b.is_duplicate_of(&a));
    }

    #[test]
    fn contains_scans_everything() {
        let stored = vec![
            Sms {
                body: "a".into(),
                ..Default::default()
            },
            Sms {
                body: "b".into(),
                ..Default::default()
            },
        ];
        assert!(contains(&stored, &stored[1].clone()));
        assert!(!contains(
            &stored,
            &Sms {
                body: "c".into(),
                ..Default::default()
            }
        ));
    }
}
