use serde::{Deserialize, Serialize};

/// A single entry of a call log export.
///
/// Every field is carried verbatim from the export; only `date` is ever interpreted, and only
/// to derive a partition key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Call {
    pub number: String,
    pub duration: String,
    /// Unix epoch in milliseconds, string encoded.
    pub date: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub presentation: String,
    #[serde(rename = "SubscriptionID")]
    pub subscription_id: String,
    pub post_dial_digits: String,
    pub subscription_component_name: String,
    pub readable_date: String,
    pub contact_name: String,
}

impl Call {
    /// Assign an export attribute by its XML name. Unknown names are ignored.
    pub(crate) fn set_attribute(&mut self, name: &[u8], value: String) {
        match name {
            b"number" => self.number = value,
            b"duration" => self.duration = value,
            b"date" => self.date = value,
            b"type" => self.kind = value,
            b"presentation" => self.presentation = value,
            b"subscription_id" => self.subscription_id = value,
            b"post_dial_digits" => self.post_dial_digits = value,
            b"subscription_component_name" => self.subscription_component_name = value,
            b"readable_date" => self.readable_date = value,
            b"contact_name" => self.contact_name = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_store_field_names() {
        let call = Call {
            number: "+4912345".into(),
            date: "1700000000000".into(),
            kind: "1".into(),
            subscription_id: "89490200001".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&call).expect("serialize");
        assert_eq!(value["Number"], "+4912345");
        assert_eq!(value["Type"], "1");
        assert_eq!(value["SubscriptionID"], "89490200001");
        assert_eq!(value["PostDialDigits"], "");
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let call: Call = serde_json::from_str(r#"{"Number":"110","Date":"0"}"#).expect("decode");
        assert_eq!(call.number, "110");
        assert_eq!(call.date, "0");
        assert!(call.contact_name.is_empty());
    }
}
