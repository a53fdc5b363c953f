use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::warn;

use crate::contract::model::Profile;
use crate::domain::repo::ProfilesRepository;
use crate::infra::storage::entity::ProfileRecord;

/// JSON-file-backed profile store.
///
/// The backing document is a map from id to record; an array of records
/// (legacy layout) is accepted on load and normalized to the map on the
/// next write. An unreadable or corrupt file behaves as an empty store.
///
/// Every upsert is a whole-file read-modify-write. With `serialize_writes`
/// on (the default) a coarse in-process lock serializes those writes; with
/// it off, concurrent same-id writes can race and the later write-back
/// wins (documented lost-update risk).
pub struct JsonProfileStore {
    path: PathBuf,
    write_guard: Mutex<()>,
    serialize_writes: bool,
}

impl JsonProfileStore {
    pub fn new(path: impl Into<PathBuf>, serialize_writes: bool) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
            serialize_writes,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the backing document. Never fails: missing, unreadable, or
    /// corrupt files all resolve to an empty map (with a warning for the
    /// latter two).
    fn load_records(&self) -> HashMap<String, ProfileRecord> {
        if !self.path.exists() {
            return HashMap::new();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read profile store {}: {}", self.path.display(), e);
                return HashMap::new();
            }
        };

        if let Ok(map) = serde_json::from_str::<HashMap<String, ProfileRecord>>(&raw) {
            return map;
        }

        // Legacy layout: a bare array of records, keyed here by id.
        if let Ok(list) = serde_json::from_str::<Vec<ProfileRecord>>(&raw) {
            return list.into_iter().map(|rec| (rec.id.clone(), rec)).collect();
        }

        warn!(
            "Profile store {} is corrupt; treating as empty",
            self.path.display()
        );
        HashMap::new()
    }

    /// Re-serialize the whole dataset, writing to a sibling temp file and
    /// renaming it over the destination so readers never see a torn file.
    fn persist_records(&self, records: &HashMap<String, ProfileRecord>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(records)
            .context("Failed to serialize profile store")?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create store directory {}", parent.display())
                })?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to move {} into place", tmp.display()))?;
        Ok(())
    }
}

#[async_trait]
impl ProfilesRepository for JsonProfileStore {
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Profile>> {
        let mut records = self.load_records();
        Ok(records.remove(id).map(Profile::from))
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Profile>> {
        let records = self.load_records();
        let mut profiles: Vec<Profile> = records.into_values().map(Profile::from).collect();
        // Newest first; ties break on id so the order is deterministic.
        profiles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(profiles)
    }

    async fn upsert(&self, profile: Profile) -> anyhow::Result<()> {
        let _guard = self.serialize_writes.then(|| self.write_guard.lock());

        let mut records = self.load_records();
        records.insert(profile.id.clone(), ProfileRecord::from(profile));
        self.persist_records(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::tempdir;

    fn profile(id: &str, name: &str) -> Profile {
        let mut p = Profile::new(id);
        p.full_name = name.to_string();
        p
    }

    #[tokio::test]
    async fn missing_file_is_an_empty_store() {
        let tmp = tempdir().unwrap();
        let store = JsonProfileStore::new(tmp.path().join("profiles.json"), true);

        assert!(store.find_by_id("nope").await.unwrap().is_none());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_an_empty_store() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("profiles.json");
        fs::write(&path, "{not valid json").unwrap();

        let store = JsonProfileStore::new(&path, true);
        assert!(store.list_all().await.unwrap().is_empty());

        // A write normalizes the file back to a valid map.
        store.upsert(profile("u1", "Jane")).await.unwrap();
        assert!(store.find_by_id("u1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn array_layout_is_migrated_to_keyed_map() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("profiles.json");
        fs::write(
            &path,
            r#"[{"id":"u1","fullName":"Jane Doe","createdAt":"2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();

        let store = JsonProfileStore::new(&path, true);
        let loaded = store.find_by_id("u1").await.unwrap().unwrap();
        assert_eq!(loaded.full_name, "Jane Doe");

        store.upsert(profile("u2", "Ada")).await.unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        let map: HashMap<String, ProfileRecord> = serde_json::from_str(&raw).unwrap();
        assert!(map.contains_key("u1"));
        assert!(map.contains_key("u2"));
    }

    #[tokio::test]
    async fn upsert_replaces_whole_record() {
        let tmp = tempdir().unwrap();
        let store = JsonProfileStore::new(tmp.path().join("profiles.json"), true);

        let mut first = profile("u1", "Jane");
        first.bio = "hello".to_string();
        store.upsert(first).await.unwrap();

        // Second save for the same id carries no bio; it must not survive.
        store.upsert(profile("u1", "Jane Updated")).await.unwrap();

        let loaded = store.find_by_id("u1").await.unwrap().unwrap();
        assert_eq!(loaded.full_name, "Jane Updated");
        assert!(loaded.bio.is_empty());
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_is_sorted_newest_first() {
        let tmp = tempdir().unwrap();
        let store = JsonProfileStore::new(tmp.path().join("profiles.json"), true);

        let now = Utc::now();
        for (id, age_min) in [("old", 30), ("new", 0), ("mid", 10)] {
            let mut p = profile(id, id);
            p.created_at = now - Duration::minutes(age_min);
            store.upsert(p).await.unwrap();
        }

        let ids: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn concurrent_saves_for_distinct_ids_both_survive() {
        let tmp = tempdir().unwrap();
        let store = std::sync::Arc::new(JsonProfileStore::new(
            tmp.path().join("profiles.json"),
            true,
        ));

        let a = {
            let store = store.clone();
            tokio::spawn(async move { store.upsert(profile("a", "A")).await })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move { store.upsert(profile("b", "B")).await })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        assert!(store.find_by_id("a").await.unwrap().is_some());
        assert!(store.find_by_id("b").await.unwrap().is_some());
    }
}
