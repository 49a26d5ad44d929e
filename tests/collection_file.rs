//! Flat collection files: compatibility with stores written by the earlier tool and
//! behaviour on bad input.

use std::fs;

use tempfile::tempdir;

use sbrdata::{Collection, GroupPeriod, GroupedCollection, SbrError, decode_messages, load_collection};

#[test]
fn reads_store_written_with_legacy_field_names() {
    let dir = tempdir().expect("tmp");
    let path = dir.path().join("collection.json");
    fs::write(
        &path,
        r#"{
            "Calls": [{"Number": "+1555", "Date": "1600000000000", "Type": "2", "SubscriptionID": "3", "ContactName": "Pat"}],
            "SMS": [{"Address": "+1555", "Date": "1600000001000", "Body": "hey", "SubID": "1"}],
            "MMS": null
        }"#,
    )
    .expect("write");

    let coll = load_collection(&path).expect("load");
    assert_eq!(coll.calls()[0].subscription_id, "3");
    assert_eq!(coll.calls()[0].contact_name, "Pat");
    assert_eq!(coll.sms()[0].sub_id, "1");
    assert!(coll.mms().is_empty());

    // Written back with the current names.
    let mut coll = coll;
    coll.set_backup(false);
    coll.save(&path).expect("save");
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    assert!(raw.get("Sms").is_some());
    assert!(raw.get("SMS").is_none());
    assert_eq!(raw["Calls"][0]["Number"], "+1555");
}

#[test]
fn flat_collection_dedups_messages_across_imports() {
    let xml = r#"<smses>
        <sms address="+1" date="10" body="a" />
        <sms address="+1" date="10" body="a" />
        <mms date="20" address="+1" snippet="first" />
        <mms date="20" address="+1" snippet="resent" />
    </smses>"#;
    let messages = decode_messages(xml).expect("decode");

    let mut coll = Collection::new("collection");
    let first = coll.add_messages(&messages);
    assert_eq!(first.added, 2);
    assert_eq!(first.duplicates, 2);
    let second = coll.add_messages(&messages);
    assert_eq!(second.added, 0);
    assert_eq!(second.total(), 4);
    assert_eq!(coll.mms()[0].snippet, "first");
}

#[test]
fn corrupt_partition_fails_reads_but_not_imports() {
    let dir = tempdir().expect("tmp");
    fs::write(dir.path().join("2023.json"), "{ not json").expect("write");

    let mut store =
        GroupedCollection::new(dir.path(), GroupPeriod::Yearly, false, false).expect("open");
    let summary = store.add_messages(
        &decode_messages(r#"<smses><sms date="1700000000000" body="x" /><sms date="1715552000000" body="y" /></smses>"#)
            .expect("decode"),
    );
    assert_eq!(summary.added, 1);
    assert_eq!(summary.skipped, 1);
    assert!(matches!(store.all_sms(), Err(SbrError::Json(_))));
}

#[test]
fn base_directory_must_be_a_directory() {
    let dir = tempdir().expect("tmp");
    let file = dir.path().join("plain");
    fs::write(&file, b"").expect("write");
    assert!(matches!(
        GroupedCollection::new(&file, GroupPeriod::Monthly, false, false),
        Err(SbrError::NotADirectory { .. })
    ));
    assert!(matches!(
        GroupedCollection::new("  ", GroupPeriod::Monthly, false, false),
        Err(SbrError::InvalidOptions { .. })
    ));
}
