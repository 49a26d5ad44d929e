//! Time-partitioned store routing records to one [`Collection`] per period.
//!
//! Layout under the base directory:
//! - no grouping: `collection.json`
//! - yearly: `yyyy.json`
//! - monthly: `yyyy/mm.json`
//!
//! Partitions found on disk when the store is opened are registered but not read; each is
//! loaded the first time it is needed. Only partitions that received records (or were
//! created during this run) are written back by [`GroupedCollection::save`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::collection::{Collection, Record};
use crate::constants::{NO_GROUPING_KEY, PARTITION_EXTENSION};
use crate::error::{Result, SbrError};
use crate::period::{self, GroupPeriod, KeyShape, KeyZone};
use crate::types::{Call, CallSource, GroupedOptions, ImportSummary, MessageSource, Mms, Sms};

/// State of one partition key.
#[derive(Debug)]
enum Partition {
    /// Exists on disk, not read yet.
    Unloaded { path: PathBuf },
    /// In memory, possibly with unsaved records.
    Loaded(Collection),
}

/// Router over many partition files, keyed by calendar period.
#[derive(Debug)]
pub struct GroupedCollection {
    group_period: GroupPeriod,
    key_zone: KeyZone,
    base_directory: PathBuf,
    verbose: bool,
    backup: bool,
    partitions: BTreeMap<String, Partition>,
}

type KeyFn<'a, T> = Box<dyn Fn(&T) -> Result<String> + 'a>;

/// Caller supplied grouping, one function per record kind.
pub struct KeyFuncs<'a> {
    pub call: KeyFn<'a, Call>,
    pub sms: KeyFn<'a, Sms>,
    pub mms: KeyFn<'a, Mms>,
}

impl<'a> KeyFuncs<'a> {
    pub fn new(
        call: impl Fn(&Call) -> Result<String> + 'a,
        sms: impl Fn(&Sms) -> Result<String> + 'a,
        mms: impl Fn(&Mms) -> Result<String> + 'a,
    ) -> Self {
        Self {
            call: Box::new(call),
            sms: Box::new(sms),
            mms: Box::new(mms),
        }
    }

    /// Group by record date using the standard key policy.
    #[must_use]
    pub fn by_period(group_period: GroupPeriod, key_zone: KeyZone) -> Self {
        Self::new(
            move |call| period::key_for_date(group_period, key_zone, &call.date),
            move |sms| period::key_for_date(group_period, key_zone, &sms.date),
            move |mms| period::key_for_date(group_period, key_zone, &mms.date),
        )
    }
}

impl GroupedCollection {
    /// Open (or bootstrap) a grouped store.
    ///
    /// Creates the base directory if needed and registers every partition file already present.
    pub fn open(options: GroupedOptions) -> Result<Self> {
        options.validate()?;
        let GroupedOptions {
            base_directory,
            group_period,
            key_zone,
            verbose,
            backup,
        } = options;

        match fs_err::metadata(&base_directory) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(SbrError::NotADirectory {
                    path: base_directory,
                });
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %base_directory.display(), "creating base directory");
                fs_err::create_dir_all(&base_directory)?;
            }
            Err(err) => return Err(err.into()),
        }

        let mut store = Self {
            group_period,
            key_zone,
            base_directory,
            verbose,
            backup,
            partitions: BTreeMap::new(),
        };
        store.discover()?;
        tracing::debug!(
            base = %store.base_directory.display(),
            period = %store.group_period,
            zone = %store.key_zone,
            partitions = store.partitions.len(),
            "opened grouped collection"
        );
        Ok(store)
    }

    /// Shorthand for [`GroupedCollection::open`] with explicit parameters and keys in the
    /// local time zone.
    pub fn new(
        base_directory: impl Into<PathBuf>,
        group_period: GroupPeriod,
        verbose: bool,
        backup: bool,
    ) -> Result<Self> {
        Self::open(
            GroupedOptions::new(base_directory, group_period)
                .verbose(verbose)
                .backup(backup),
        )
    }

    fn discover(&mut self) -> Result<()> {
        match self.group_period {
            GroupPeriod::None => {
                let path = period::partition_path(&self.base_directory, NO_GROUPING_KEY);
                if path.is_file() {
                    self.register(NO_GROUPING_KEY.to_string(), path);
                }
            }
            GroupPeriod::Yearly => {
                for entry in fs_err::read_dir(&self.base_directory)? {
                    let entry = entry?;
                    if !entry.file_type()?.is_file() {
                        continue;
                    }
                    let name = entry.file_name();
                    if let Some(year) = partition_stem(&name.to_string_lossy())
                        .filter(|stem| period::parse_year(stem).is_some())
                    {
                        self.register(year.to_string(), entry.path());
                    }
                }
            }
            GroupPeriod::Monthly => {
                for entry in fs_err::read_dir(&self.base_directory)? {
                    let entry = entry?;
                    let year = entry.file_name().to_string_lossy().into_owned();
                    if !entry.file_type()?.is_dir() || period::parse_year(&year).is_none() {
                        continue;
                    }
                    for sub in fs_err::read_dir(entry.path())? {
                        let sub = sub?;
                        if !sub.file_type()?.is_file() {
                            continue;
                        }
                        let name = sub.file_name();
                        if let Some(month) = partition_stem(&name.to_string_lossy())
                            .filter(|stem| period::parse_month(stem).is_some())
                        {
                            self.register(format!("{year}/{month}"), sub.path());
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn register(&mut self, key: String, path: PathBuf) {
        tracing::debug!(key = %key, path = %path.display(), "discovered partition");
        self.partitions.insert(key, Partition::Unloaded { path });
    }

    /// Partition for `key`, loaded from disk on first access or created empty if new.
    ///
    /// Without grouping the only valid key is `"collection"` (the empty string is accepted as
    /// an alias for it).
    pub fn get(&mut self, key: &str) -> Result<&mut Collection> {
        let key = if self.group_period == GroupPeriod::None && key.is_empty() {
            NO_GROUPING_KEY
        } else {
            key
        };
        period::parse_key(self.group_period, key)?;

        let (verbose, backup) = (self.verbose, self.backup);
        let partition = self.partitions.entry(key.to_string()).or_insert_with(|| {
            let mut coll = Collection::new(key);
            coll.set_verbose(verbose);
            coll.set_backup(backup);
            // New partitions are written even if nothing gets added to them.
            coll.mark_dirty();
            Partition::Loaded(coll)
        });

        if let Partition::Unloaded { path } = partition {
            let path = path.clone();
            let mut coll = Collection::load(&path)?;
            coll.set_key(key);
            coll.set_verbose(verbose);
            coll.set_backup(backup);
            tracing::debug!(key, path = %path.display(), "loaded partition");
            *partition = Partition::Loaded(coll);
        }

        match partition {
            Partition::Loaded(coll) => Ok(coll),
            Partition::Unloaded { .. } => Err(SbrError::InvalidKey {
                key: key.to_string(),
                reason: "partition could not be materialised".into(),
            }),
        }
    }

    /// Partition a record dated `date` belongs to. Monthly keys get their year directory
    /// created here, before any file is written into it.
    fn resolve(&mut self, date: &str) -> Result<&mut Collection> {
        let key = period::key_for_date(self.group_period, self.key_zone, date)?;
        if let Ok(KeyShape::Month(year, _)) = period::parse_key(self.group_period, &key) {
            let dir = self.base_directory.join(format!("{year:04}"));
            if self.verbose {
                tracing::info!(dir = %dir.display(), "ensuring year directory");
            }
            fs_err::create_dir_all(&dir)?;
        }
        self.get(&key)
    }

    fn add_record(&mut self, date: &str, kind: &str, summary: &mut ImportSummary, record: Record) {
        match self.resolve(date) {
            Ok(coll) => {
                let added = match record {
                    Record::Call(call) => coll.insert_call(call),
                    Record::Sms(sms) => coll.insert_sms(sms),
                    Record::Mms(mms) => coll.insert_mms(mms),
                };
                summary.record(added);
            }
            Err(err) => {
                tracing::warn!(
                    period = %self.group_period,
                    date,
                    kind,
                    error = %err,
                    "could not resolve partition, skipping record"
                );
                summary.skipped += 1;
            }
        }
    }

    /// Route every call to its partition and add it there if not yet known.
    ///
    /// A call whose partition cannot be resolved is logged and skipped; the rest of the batch
    /// is still imported.
    pub fn add_calls<S: CallSource + ?Sized>(&mut self, source: &S) -> ImportSummary {
        let mut summary = ImportSummary::default();
        for call in source.calls() {
            self.add_record(&call.date, "call", &mut summary, Record::Call(call.clone()));
        }
        summary
    }

    /// Route every SMS and MMS to its partition. Same failure policy as
    /// [`GroupedCollection::add_calls`].
    pub fn add_messages<S: MessageSource + ?Sized>(&mut self, source: &S) -> ImportSummary {
        let mut summary = ImportSummary::default();
        for mms in source.mms() {
            self.add_record(&mms.date, "mms", &mut summary, Record::Mms(mms.clone()));
        }
        for sms in source.sms() {
            self.add_record(&sms.date, "sms", &mut summary, Record::Sms(sms.clone()));
        }
        summary
    }

    /// Write every loaded partition that has unsaved records.
    pub fn save(&mut self) -> Result<()> {
        for (key, partition) in &mut self.partitions {
            let Partition::Loaded(coll) = partition else {
                continue;
            };
            if !coll.is_dirty() {
                continue;
            }
            let shape = match period::parse_key(self.group_period, key) {
                Ok(shape) => shape,
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "skipping partition with malformed key");
                    continue;
                }
            };
            if let KeyShape::Month(year, _) = shape {
                fs_err::create_dir_all(self.base_directory.join(format!("{year:04}")))?;
            }
            coll.save(period::partition_path(&self.base_directory, key))?;
        }
        Ok(())
    }

    /// Every known key, in order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.partitions.keys().cloned().collect()
    }

    /// Whether `key` is known and has been read into memory.
    #[must_use]
    pub fn is_loaded(&self, key: &str) -> bool {
        matches!(self.partitions.get(key), Some(Partition::Loaded(_)))
    }

    #[must_use]
    pub fn group_period(&self) -> GroupPeriod {
        self.group_period
    }

    #[must_use]
    pub fn key_zone(&self) -> KeyZone {
        self.key_zone
    }

    #[must_use]
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// All calls of every partition, in key order. Fails on the first partition that cannot
    /// be loaded.
    pub fn all_calls(&mut self) -> Result<Vec<Call>> {
        let mut result = Vec::new();
        for key in self.keys() {
            result.extend_from_slice(self.get(&key)?.calls());
        }
        Ok(result)
    }

    /// All SMS of every partition. Same failure policy as [`GroupedCollection::all_calls`].
    pub fn all_sms(&mut self) -> Result<Vec<Sms>> {
        let mut result = Vec::new();
        for key in self.keys() {
            result.extend_from_slice(self.get(&key)?.sms());
        }
        Ok(result)
    }

    /// All MMS of every partition. Same failure policy as [`GroupedCollection::all_calls`].
    pub fn all_mms(&mut self) -> Result<Vec<Mms>> {
        let mut result = Vec::new();
        for key in self.keys() {
            result.extend_from_slice(self.get(&key)?.mms());
        }
        Ok(result)
    }

    /// Regroup every known record with caller supplied key functions.
    ///
    /// Loads all partitions, so this is as expensive as reading the whole store. The result
    /// lives in memory only; nothing is written.
    pub fn custom_grouped(&mut self, keys: &KeyFuncs<'_>) -> Result<BTreeMap<String, Collection>> {
        let mut union = Collection::default();
        for key in self.keys() {
            let coll = self.get(&key)?;
            union.add_calls(coll.calls());
            union.add_sms(coll.sms().iter().cloned());
            union.add_mms(coll.mms().iter().cloned());
        }

        let mut result: BTreeMap<String, Collection> = BTreeMap::new();
        let mut place = |key: String, record: Record| {
            result
                .entry(key)
                .or_insert_with_key(|key| Collection::new(key.clone()))
                .push_unchecked(record);
        };
        for call in union.calls() {
            place((keys.call)(call)?, Record::Call(call.clone()));
        }
        for sms in union.sms() {
            place((keys.sms)(sms)?, Record::Sms(sms.clone()));
        }
        for mms in union.mms() {
            place((keys.mms)(mms)?, Record::Mms(mms.clone()));
        }
        Ok(result)
    }
}

/// `name` without the partition extension, if it has it.
fn partition_stem(name: &str) -> Option<&str> {
    name.strip_suffix(PARTITION_EXTENSION)
        .and_then(|rest| rest.strip_suffix('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // 2023-11-14T22:13:20Z
    const NOV_2023: &str = "1700000000000";
    // 2024-05-12T22:13:20Z
    const MAY_2024: &str = "1715552000000";

    fn call(number: &str, date: &str) -> Call {
        Call {
            number: number.into(),
            date: date.into(),
            ..Default::default()
        }
    }

    #[test]
    fn opening_creates_the_base_directory() {
        let dir = tempdir().expect("tmp");
        let base = dir.path().join("nested").join("store");
        let store = GroupedCollection::new(&base, GroupPeriod::Yearly, false, false).expect("open");
        assert!(base.is_dir());
        assert!(store.keys().is_empty());
    }

    #[test]
    fn base_directory_must_be_a_directory() {
        let dir = tempdir().expect("tmp");
        let file = dir.path().join("plain");
        fs_err::write(&file, b"x").expect("write");
        let err = GroupedCollection::new(&file, GroupPeriod::Yearly, false, false)
            .expect_err("file is not a directory");
        assert!(matches!(err, SbrError::NotADirectory { .. }));
    }

    #[test]
    fn discovery_registers_without_loading() {
        let dir = tempdir().expect("tmp");
        fs_err::create_dir_all(dir.path().join("2023")).expect("mkdir");
        fs_err::write(dir.path().join("2023").join("11.json"), b"{}").expect("write");
        fs_err::write(dir.path().join("2023").join("notes.txt"), b"").expect("write");
        fs_err::write(dir.path().join("2023").join("13.json"), b"{}").expect("write");
        fs_err::create_dir_all(dir.path().join("misc")).expect("mkdir");

        let store = GroupedCollection::new(dir.path(), GroupPeriod::Monthly, false, false)
            .expect("open");
        assert_eq!(store.keys(), vec!["2023/11".to_string()]);
        assert!(!store.is_loaded("2023/11"));
    }

    #[test]
    fn yearly_discovery_ignores_backups_and_other_files() {
        let dir = tempdir().expect("tmp");
        fs_err::write(dir.path().join("2022.json"), b"{}").expect("write");
        fs_err::write(dir.path().join("2022.1700000000.json"), b"{}").expect("write");
        fs_err::write(dir.path().join("sbr.config"), b"{}").expect("write");
        let store =
            GroupedCollection::new(dir.path(), GroupPeriod::Yearly, false, false).expect("open");
        assert_eq!(store.keys(), vec!["2022".to_string()]);
    }

    #[test]
    fn get_loads_lazily_and_creates_new_keys() {
        let dir = tempdir().expect("tmp");
        let mut existing = Collection::new("2022");
        existing.add_calls(&vec![call("1", "1650000000000")]);
        existing.save(dir.path().join("2022.json")).expect("seed");

        let mut store =
            GroupedCollection::new(dir.path(), GroupPeriod::Yearly, false, false).expect("open");
        assert!(!store.is_loaded("2022"));
        assert_eq!(store.get("2022").expect("get").calls().len(), 1);
        assert!(store.is_loaded("2022"));

        assert!(store.get("2030").expect("new").is_empty());
        assert_eq!(store.keys(), vec!["2022".to_string(), "2030".to_string()]);
    }

    #[test]
    fn no_grouping_accepts_only_the_fixed_key() {
        let dir = tempdir().expect("tmp");
        let mut store =
            GroupedCollection::new(dir.path(), GroupPeriod::None, false, false).expect("open");
        assert_eq!(store.get("").expect("alias").key(), "collection");
        assert_eq!(store.get("collection").expect("fixed").key(), "collection");
        assert!(matches!(store.get("2023"), Err(SbrError::InvalidKey { .. })));
        assert_eq!(store.keys(), vec!["collection".to_string()]);
    }

    #[test]
    fn grouped_keys_are_validated() {
        let dir = tempdir().expect("tmp");
        let mut store =
            GroupedCollection::new(dir.path(), GroupPeriod::Monthly, false, false).expect("open");
        assert!(store.get("").is_err());
        assert!(store.get("2023").is_err());
        assert!(store.get("2023/11").is_ok());
    }

    #[test]
    fn monthly_two_partitions_two_files() {
        let dir = tempdir().expect("tmp");
        let mut store =
            GroupedCollection::new(dir.path(), GroupPeriod::Monthly, false, false).expect("open");
        let summary = store.add_calls(&vec![call("1", NOV_2023), call("2", MAY_2024)]);
        assert_eq!(summary.added, 2);
        store.save().expect("save");

        let nov = Collection::load(dir.path().join("2023").join("11.json")).expect("nov");
        let may = Collection::load(dir.path().join("2024").join("05.json")).expect("may");
        assert_eq!(nov.calls().len(), 1);
        assert_eq!(may.calls().len(), 1);
        assert_eq!(nov.calls()[0].number, "1");
        assert_eq!(may.calls()[0].number, "2");
    }

    #[test]
    fn bad_date_is_skipped_and_others_land() {
        let dir = tempdir().expect("tmp");
        let mut store =
            GroupedCollection::new(dir.path(), GroupPeriod::Yearly, false, false).expect("open");
        let summary = store.add_calls(&vec![
            call("1", NOV_2023),
            call("bad", "yesterday"),
            call("2", MAY_2024),
        ]);
        assert_eq!(summary.added, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(store.keys(), vec!["2023".to_string(), "2024".to_string()]);
    }

    #[test]
    fn corrupt_partition_only_drops_its_own_records() {
        let dir = tempdir().expect("tmp");
        fs_err::write(dir.path().join("2023.json"), b"not json").expect("write");
        let mut store =
            GroupedCollection::new(dir.path(), GroupPeriod::Yearly, false, false).expect("open");
        let summary = store.add_calls(&vec![call("1", NOV_2023), call("2", MAY_2024)]);
        assert_eq!(summary.added, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(store.get("2024").expect("2024").calls().len(), 1);

        // Strict read path.
        assert!(store.all_calls().is_err());
    }

    #[test]
    fn save_skips_untouched_partitions() {
        let dir = tempdir().expect("tmp");
        let mut seed = Collection::new("2023");
        seed.add_calls(&vec![call("1", NOV_2023)]);
        seed.save(dir.path().join("2023.json")).expect("seed");

        let mut store =
            GroupedCollection::new(dir.path(), GroupPeriod::Yearly, false, true).expect("open");
        store.get("2023").expect("load");
        store.save().expect("save");
        // With backup on, a rewrite would have left a backup next to the partition.
        assert_eq!(fs_err::read_dir(dir.path()).expect("list").count(), 1);
    }

    #[test]
    fn all_accessors_concatenate_in_key_order() {
        let dir = tempdir().expect("tmp");
        let mut store =
            GroupedCollection::new(dir.path(), GroupPeriod::Yearly, false, false).expect("open");
        store.add_calls(&vec![call("late", MAY_2024), call("early", NOV_2023)]);
        store.add_messages(&crate::types::MessageBatch {
            sms: vec![Sms {
                date: NOV_2023.into(),
                body: "hi".into(),
                ..Default::default()
            }],
            mms: vec![Mms {
                date: MAY_2024.into(),
                address: "+1".into(),
                ..Default::default()
            }],
        });
        store.save().expect("save");

        let mut reopened =
            GroupedCollection::new(dir.path(), GroupPeriod::Yearly, false, false).expect("open");
        let numbers: Vec<_> = reopened
            .all_calls()
            .expect("calls")
            .into_iter()
            .map(|c| c.number)
            .collect();
        assert_eq!(numbers, vec!["early", "late"]);
        assert_eq!(reopened.all_sms().expect("sms").len(), 1);
        assert_eq!(reopened.all_mms().expect("mms").len(), 1);
    }

    #[test]
    fn custom_grouping_regroups_in_memory() {
        let dir = tempdir().expect("tmp");
        let mut store =
            GroupedCollection::new(dir.path(), GroupPeriod::Monthly, false, false).expect("open");
        store.add_calls(&vec![
            call("1", NOV_2023),
            call("2", "1701388800000"),
            call("3", MAY_2024),
        ]);

        let yearly = store
            .custom_grouped(&KeyFuncs::by_period(GroupPeriod::Yearly, KeyZone::Utc))
            .expect("regroup");
        assert_eq!(yearly.keys().cloned().collect::<Vec<_>>(), vec!["2023", "2024"]);
        assert_eq!(yearly["2023"].calls().len(), 2);
        assert_eq!(yearly["2024"].calls().len(), 1);

        let by_number = store
            .custom_grouped(&KeyFuncs::new(
                |c: &Call| Ok(c.number.clone()),
                |s: &Sms| Ok(s.address.clone()),
                |m: &Mms| Ok(m.address.clone()),
            ))
            .expect("regroup");
        assert_eq!(by_number.len(), 3);

        // Nothing new on disk: the regrouping is memory only.
        assert!(!dir.path().join("2023.json").exists());
    }

    fn open_utc(base: &Path, group_period: GroupPeriod) -> GroupedCollection {
        GroupedCollection::open(
            GroupedOptions::new(base, group_period).key_zone(KeyZone::Utc),
        )
        .expect("open")
    }

    #[test]
    fn save_skips_partitions_with_malformed_keys() {
        let dir = tempdir().expect("tmp");
        let mut store = open_utc(dir.path(), GroupPeriod::Monthly);
        let mut stray = Collection::new("2023");
        stray.add_calls(&vec![call("1", NOV_2023)]);
        store
            .partitions
            .insert("2023".to_string(), Partition::Loaded(stray));

        store.save().expect("save");
        assert_eq!(fs_err::read_dir(dir.path()).expect("list").count(), 0);
    }

    #[test]
    fn blocked_year_directory_skips_only_its_records() {
        let dir = tempdir().expect("tmp");
        fs_err::write(dir.path().join("2023"), b"not a directory").expect("write");

        let mut store = open_utc(dir.path(), GroupPeriod::Monthly);
        let summary = store.add_calls(&vec![call("1", NOV_2023), call("2", MAY_2024)]);
        assert_eq!(summary.added, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(store.keys(), vec!["2024/05".to_string()]);

        store.save().expect("save");
        assert!(dir.path().join("2024").join("05.json").is_file());
    }

    #[test]
    fn boundary_records_follow_the_store_zone() {
        // 2023-11-30T23:30:00Z, already December one hour east of UTC.
        let late_nov = "1701387000000";
        let dir = tempdir().expect("tmp");
        let cet = KeyZone::Offset(3600);
        let options = || GroupedOptions::new(dir.path(), GroupPeriod::Monthly).key_zone(cet);

        let mut store = GroupedCollection::open(options()).expect("open");
        assert_eq!(store.add_calls(&vec![call("1", late_nov)]).added, 1);
        store.save().expect("save");
        assert!(dir.path().join("2023").join("12.json").is_file());

        let mut reopened = GroupedCollection::open(options()).expect("reopen");
        let summary = reopened.add_calls(&vec![call("1", late_nov)]);
        assert_eq!(summary.added, 0);
        assert_eq!(summary.duplicates, 1);
        reopened.save().expect("save");
        assert_eq!(reopened.keys(), vec!["2023/12".to_string()]);
        assert_eq!(reopened.all_calls().expect("calls").len(), 1);

        let utc = open_utc(dir.path(), GroupPeriod::Monthly)
            .custom_grouped(&KeyFuncs::by_period(GroupPeriod::Monthly, KeyZone::Utc))
            .expect("regroup");
        assert_eq!(utc.keys().cloned().collect::<Vec<_>>(), vec!["2023/11"]);
    }

    #[test]
    fn partition_stems() {
        assert_eq!(partition_stem("2023.json"), Some("2023"));
        assert_eq!(partition_stem("11.json"), Some("11"));
        assert_eq!(partition_stem("2023json"), None);
        assert_eq!(partition_stem("2023.txt"), None);
    }
}
