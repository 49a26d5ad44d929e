//! Decoder for SMS Backup & Restore XML exports.
//!
//! Two document kinds exist: `<calls>` with `<call>` children and `<smses>` with `<sms>` and
//! `<mms>` children (the latter carrying `<parts>` and `<addrs>`). Every attribute is kept as
//! an opaque string; unknown attributes are ignored and missing ones stay empty.

use std::path::Path;

use quick_xml::Reader as XmlReader;
use quick_xml::events::{BytesStart, Event};

use crate::constants::{CALLS_ROOT, MESSAGES_ROOT};
use crate::error::{Result, SbrError};
use crate::types::{Addr, Call, CallSource, MessageSource, Mms, Part, Sms};

/// Attributes of the export's root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportHeader {
    pub count: String,
    pub backup_set: String,
    pub backup_date: String,
    pub kind: String,
}

impl ExportHeader {
    fn set_attribute(&mut self, name: &[u8], value: String) {
        match name {
            b"count" => self.count = value,
            b"backup_set" => self.backup_set = value,
            b"backup_date" => self.backup_date = value,
            b"type" => self.kind = value,
            _ => {}
        }
    }
}

/// A decoded `<calls>` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallLog {
    pub header: ExportHeader,
    pub calls: Vec<Call>,
}

impl CallSource for CallLog {
    fn calls(&self) -> &[Call] {
        &self.calls
    }
}

/// A decoded `<smses>` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    pub header: ExportHeader,
    pub sms: Vec<Sms>,
    pub mms: Vec<Mms>,
}

impl MessageSource for MessageLog {
    fn sms(&self) -> &[Sms] {
        &self.sms
    }

    fn mms(&self) -> &[Mms] {
        &self.mms
    }
}

/// Decode a call log export.
pub fn decode_calls(xml: &str) -> Result<CallLog> {
    let mut reader = XmlReader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut log: Option<CallLog> = None;

    loop {
        buf.clear();
        let element = match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => e,
            Event::Eof => break,
            _ => continue,
        };
        let name = element.name();
        match (log.as_mut(), name.as_ref()) {
            (None, root) if root == CALLS_ROOT => {
                let mut header = ExportHeader::default();
                for_each_attribute(&element, |k, v| header.set_attribute(k, v))?;
                log = Some(CallLog {
                    header,
                    calls: Vec::new(),
                });
            }
            (None, other) => return Err(unexpected_root(CALLS_ROOT, other)),
            (Some(log), b"call") => {
                let mut call = Call::default();
                for_each_attribute(&element, |k, v| call.set_attribute(k, v))?;
                log.calls.push(call);
            }
            (Some(_), _) => {}
        }
    }

    log.ok_or_else(|| missing_root(CALLS_ROOT))
}

/// Decode a message export.
pub fn decode_messages(xml: &str) -> Result<MessageLog> {
    let mut reader = XmlReader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut log: Option<MessageLog> = None;
    // Open `<mms>` and `<addr>` elements whose end tag has not been seen yet.
    let mut open_mms: Option<Mms> = None;
    let mut open_addr: Option<Addr> = None;

    loop {
        buf.clear();
        let (element, empty) = match reader.read_event_into(&mut buf)? {
            Event::Start(e) => (e, false),
            Event::Empty(e) => (e, true),
            Event::Text(text) => {
                if let Some(addr) = open_addr.as_mut() {
                    match text.unescape() {
                        Ok(value) => addr.text.push_str(&value),
                        Err(_) => addr.text.push_str(&String::from_utf8_lossy(&text)),
                    }
                }
                continue;
            }
            Event::End(e) => {
                match e.name().as_ref() {
                    b"addr" => {
                        if let (Some(addr), Some(mms)) = (open_addr.take(), open_mms.as_mut()) {
                            mms.addrs.addr.push(addr);
                        }
                    }
                    b"mms" => {
                        if let (Some(mms), Some(log)) = (open_mms.take(), log.as_mut()) {
                            log.mms.push(mms);
                        }
                    }
                    _ => {}
                }
                continue;
            }
            Event::Eof => break,
            _ => continue,
        };

        let name = element.name();
        let Some(current) = log.as_mut() else {
            if name.as_ref() != MESSAGES_ROOT {
                return Err(unexpected_root(MESSAGES_ROOT, name.as_ref()));
            }
            let mut header = ExportHeader::default();
            for_each_attribute(&element, |k, v| header.set_attribute(k, v))?;
            log = Some(MessageLog {
                header,
                ..MessageLog::default()
            });
            continue;
        };

        match name.as_ref() {
            b"sms" => {
                let mut sms = Sms::default();
                for_each_attribute(&element, |k, v| sms.set_attribute(k, v))?;
                current.sms.push(sms);
            }
            b"mms" => {
                let mut mms = Mms::default();
                for_each_attribute(&element, |k, v| mms.set_attribute(k, v))?;
                if empty {
                    current.mms.push(mms);
                } else {
                    open_mms = Some(mms);
                }
            }
            b"part" => {
                if let Some(mms) = open_mms.as_mut() {
                    let mut part = Part::default();
                    for_each_attribute(&element, |k, v| part.set_attribute(k, v))?;
                    mms.parts.part.push(part);
                }
            }
            b"addr" => {
                let mut addr = Addr::default();
                for_each_attribute(&element, |k, v| addr.set_attribute(k, v))?;
                if !empty {
                    open_addr = Some(addr);
                } else if let Some(mms) = open_mms.as_mut() {
                    mms.addrs.addr.push(addr);
                }
            }
            _ => {}
        }
    }

    log.ok_or_else(|| missing_root(MESSAGES_ROOT))
}

/// Read and decode a call log export from disk.
pub fn decode_calls_file(path: impl AsRef<Path>) -> Result<CallLog> {
    decode_calls(&fs_err::read_to_string(path.as_ref())?)
}

/// Read and decode a message export from disk.
pub fn decode_messages_file(path: impl AsRef<Path>) -> Result<MessageLog> {
    decode_messages(&fs_err::read_to_string(path.as_ref())?)
}

/// Feed every attribute of `element` to `set`.
///
/// The backup tool writes emoji as surrogate-pair character references, which are not valid
/// XML; such values are kept exactly as written instead of failing the whole document.
fn for_each_attribute(element: &BytesStart<'_>, mut set: impl FnMut(&[u8], String)) -> Result<()> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let value = match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        };
        set(attr.key.as_ref(), value);
    }
    Ok(())
}

fn unexpected_root(expected: &[u8], found: &[u8]) -> SbrError {
    SbrError::InvalidExport {
        reason: format!(
            "expected <{}> root element, found <{}>",
            String::from_utf8_lossy(expected),
            String::from_utf8_lossy(found)
        ),
    }
}

fn missing_root(expected: &[u8]) -> SbrError {
    SbrError::InvalidExport {
        reason: format!("no <{}> element", String::from_utf8_lossy(expected)),
    }
}
