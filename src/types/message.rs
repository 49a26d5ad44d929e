//! SMS and MMS records as they appear in a message export.

use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// A plain text message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Sms {
    pub protocol: String,
    pub address: String,
    /// Unix epoch in milliseconds, string encoded.
    pub date: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub subject: String,
    pub body: String,
    pub toa: String,
    pub sc_toa: String,
    pub service_center: String,
    pub read: String,
    pub status: String,
    pub locked: String,
    pub date_sent: String,
    #[serde(rename = "SubID")]
    pub sub_id: String,
    pub readable_date: String,
    pub contact_name: String,
}

impl Sms {
    pub(crate) fn set_attribute(&mut self, name: &[u8], value: String) {
        match name {
            b"protocol" => self.protocol = value,
            b"address" => self.address = value,
            b"date" => self.date = value,
            b"type" => self.kind = value,
            b"subject" => self.subject = value,
            b"body" => self.body = value,
            b"toa" => self.toa = value,
            b"sc_toa" => self.sc_toa = value,
            b"service_center" => self.service_center = value,
            b"read" => self.read = value,
            b"status" => self.status = value,
            b"locked" => self.locked = value,
            b"date_sent" => self.date_sent = value,
            b"sub_id" => self.sub_id = value,
            b"readable_date" => self.readable_date = value,
            b"contact_name" => self.contact_name = value,
            _ => {}
        }
    }
}

/// One part of an MMS (text body, image, SMIL layout, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Part {
    pub seq: String,
    pub ct: String,
    pub name: String,
    pub chset: String,
    pub cd: String,
    #[serde(rename = "Fn")]
    pub file_name: String,
    pub cid: String,
    pub cl: String,
    pub ctt_s: String,
    pub ctt_t: String,
    /// Inline text of the part (the export's `text` attribute).
    #[serde(rename = "AttrText")]
    pub text: String,
}

impl Part {
    pub(crate) fn set_attribute(&mut self, name: &[u8], value: String) {
        match name {
            b"seq" => self.seq = value,
            b"ct" => self.ct = value,
            b"name" => self.name = value,
            b"chset" => self.chset = value,
            b"cd" => self.cd = value,
            b"fn" => self.file_name = value,
            b"cid" => self.cid = value,
            b"cl" => self.cl = value,
            b"ctt_s" => self.ctt_s = value,
            b"ctt_t" => self.ctt_t = value,
            b"text" => self.text = value,
            _ => {}
        }
    }
}

/// Ordered parts of an MMS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Parts {
    #[serde(rename = "Part", deserialize_with = "null_as_empty")]
    pub part: Vec<Part>,
}

/// A sender or recipient of an MMS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Addr {
    pub text: String,
    pub address: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub charset: String,
}

impl Addr {
    pub(crate) fn set_attribute(&mut self, name: &[u8], value: String) {
        match name {
            b"address" => self.address = value,
            b"type" => self.kind = value,
            b"charset" => self.charset = value,
            _ => {}
        }
    }
}

/// Ordered address list of an MMS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Addrs {
    pub text: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub addr: Vec<Addr>,
}

/// A multimedia message with its owned parts and address list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Mms {
    /// Unix epoch in milliseconds, string encoded.
    pub date: String,
    pub snippet: String,
    pub block_type: String,
    pub ct_t: String,
    pub source: String,
    pub msg_box: String,
    pub address: String,
    pub sub_cs: String,
    pub preview_type: String,
    #[serde(rename = "MxID")]
    pub mx_id: String,
    pub retr_st: String,
    pub d_tm: String,
    pub exp: String,
    pub locked: String,
    #[serde(rename = "MID")]
    pub m_id: String,
    pub out_time: String,
    pub retr_txt: String,
    pub date_sent: String,
    pub read: String,
    pub rpt_a: String,
    pub ct_cls: String,
    pub timed: String,
    pub pri: String,
    #[serde(rename = "SubID")]
    pub sub_id: String,
    pub sync_state: String,
    pub resp_txt: String,
    pub ct_l: String,
    #[serde(rename = "SimID")]
    pub sim_id: String,
    pub d_rpt: String,
    pub marker: String,
    #[serde(rename = "FileID")]
    pub file_id: String,
    #[serde(rename = "ID")]
    pub id: String,
    pub preview_data_ts: String,
    pub m_type: String,
    pub mx_extension: String,
    pub rr: String,
    pub favorite_date: String,
    pub sub: String,
    pub read_status: String,
    pub date_ms_part: String,
    pub seen: String,
    #[serde(rename = "BindID")]
    pub bind_id: String,
    #[serde(rename = "MxIDV2")]
    pub mx_id_v2: String,
    pub advanced_seen: String,
    pub resp_st: String,
    pub text_only: String,
    pub need_download: String,
    pub st: String,
    pub retr_txt_cs: String,
    pub m_size: String,
    pub mx_status: String,
    #[serde(rename = "TrID")]
    pub tr_id: String,
    pub mx_type: String,
    pub deleted: String,
    pub m_cls: String,
    pub v: String,
    pub account: String,
    pub preview_data: String,
    pub readable_date: String,
    pub contact_name: String,
    pub parts: Parts,
    pub addrs: Addrs,
}

impl Mms {
    pub(crate) fn set_attribute(&mut self, name: &[u8], value: String) {
        match name {
            b"date" => self.date = value,
            b"snippet" => self.snippet = value,
            b"block_type" => self.block_type = value,
            b"ct_t" => self.ct_t = value,
            b"source" => self.source = value,
            b"msg_box" => self.msg_box = value,
            b"address" => self.address = value,
            b"sub_cs" => self.sub_cs = value,
            b"preview_type" => self.preview_type = value,
            b"mx_id" => self.mx_id = value,
            b"retr_st" => self.retr_st = value,
            b"d_tm" => self.d_tm = value,
            b"exp" => self.exp = value,
            b"locked" => self.locked = value,
            b"m_id" => self.m_id = value,
            b"out_time" => self.out_time = value,
            b"retr_txt" => self.retr_txt = value,
            b"date_sent" => self.date_sent = value,
            b"read" => self.read = value,
            b"rpt_a" => self.rpt_a = value,
            b"ct_cls" => self.ct_cls = value,
            b"timed" => self.timed = value,
            b"pri" => self.pri = value,
            b"sub_id" => self.sub_id = value,
            b"sync_state" => self.sync_state = value,
            b"resp_txt" => self.resp_txt = value,
            b"ct_l" => self.ct_l = value,
            b"sim_id" => self.sim_id = value,
            b"d_rpt" => self.d_rpt = value,
            b"marker" => self.marker = value,
            b"file_id" => self.file_id = value,
            b"_id" => self.id = value,
            b"preview_data_ts" => self.preview_data_ts = value,
            b"m_type" => self.m_type = value,
            b"mx_extension" => self.mx_extension = value,
            b"rr" => self.rr = value,
            b"favorite_date" => self.favorite_date = value,
            b"sub" => self.sub = value,
            b"read_status" => self.read_status = value,
            b"date_ms_part" => self.date_ms_part = value,
            b"seen" => self.seen = value,
            b"bind_id" => self.bind_id = value,
            b"mx_id_v2" => self.mx_id_v2 = value,
            b"advanced_seen" => self.advanced_seen = value,
            b"resp_st" => self.resp_st = value,
            b"text_only" => self.text_only = value,
            b"need_download" => self.need_download = value,
            b"st" => self.st = value,
            b"retr_txt_cs" => self.retr_txt_cs = value,
            b"m_size" => self.m_size = value,
            b"mx_status" => self.mx_status = value,
            b"tr_id" => self.tr_id = value,
            b"mx_type" => self.mx_type = value,
            b"deleted" => self.deleted = value,
            b"m_cls" => self.m_cls = value,
            b"v" => self.v = value,
            b"account" => self.account = value,
            b"preview_data" => self.preview_data = value,
            b"readable_date" => self.readable_date = value,
            b"contact_name" => self.contact_name = value,
            _ => {}
        }
    }

    /// Parts of this message, in export order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts.part
    }

    /// Addresses of this message, in export order.
    #[must_use]
    pub fn addrs(&self) -> &[Addr] {
        &self.addrs.addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mms_uses_store_field_names() {
        let mms = Mms {
            date: "1".into(),
            m_id: "abc".into(),
            id: "7".into(),
            parts: Parts {
                part: vec![Part {
                    ct: "text/plain".into(),
                    text: "hi".into(),
                    ..Default::default()
                }],
            },
            ..Default::default()
        };
        let value = serde_json::to_value(&mms).expect("serialize");
        assert_eq!(value["MID"], "abc");
        assert_eq!(value["ID"], "7");
        assert_eq!(value["CtT"], "");
        assert_eq!(value["Parts"]["Part"][0]["AttrText"], "hi");
        assert!(value["Addrs"]["Addr"].as_array().expect("array").is_empty());
    }

    #[test]
    fn null_lists_decode_as_empty() {
        let mms: Mms = serde_json::from_str(
            r#"{"Date":"5","Address":"+1","Parts":{"Part":null},"Addrs":{"Text":"","Addr":null}}"#,
        )
        .expect("decode");
        assert!(mms.parts().is_empty());
        assert!(mms.addrs().is_empty());
        assert_eq!(mms.address, "+1");
    }

    #[test]
    fn sms_type_field_round_trips_under_store_name() {
        let sms: Sms = serde_json::from_str(r#"{"Type":"2","Body":"ok"}"#).expect("decode");
        assert_eq!(sms.kind, "2");
        assert_eq!(sms.body, "ok");
    }
}
