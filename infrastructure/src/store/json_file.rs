//! JSON file profile store
//!
//! All profiles live in one JSON object keyed by user id:
//!
//! ```json
//! {
//!   "uid-123": {
//!     "skinType": "oily",
//!     "concern": "acne",
//!     "budget": "below_500",
//!     "updatedAt": "2026-01-01T10:00:00.000Z"
//!   }
//! }
//! ```
//!
//! Records are decoded per user, so one malformed record does not hide
//! the others.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skinpal_application::{ProfileStoreError, ProfileStorePort};
use skinpal_domain::{ProfileState, SkinProfile, UserId};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Stored form of a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRecord {
    #[serde(flatten)]
    profile: SkinProfile,
    /// When the questionnaire was last submitted. Older records call it `timestamp`.
    #[serde(alias = "timestamp")]
    updated_at: DateTime<Utc>,
}

type Document = BTreeMap<String, serde_json::Value>;

/// Profile store backed by a single JSON file
pub struct JsonFileProfileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Document, ProfileStoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Profile store {} does not exist yet", self.path.display());
                return Ok(Document::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Document::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            ProfileStoreError::Serialization(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn write_document(&self, document: &Document) -> Result<(), ProfileStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| ProfileStoreError::Serialization(e.to_string()))?;

        // Write then rename so readers never see a half-written file
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStorePort for JsonFileProfileStore {
    async fn get_profile(&self, user: &UserId) -> Result<ProfileState, ProfileStoreError> {
        let document = self.read_document().await?;

        let Some(value) = document.get(user.as_str()) else {
            return Ok(ProfileState::Absent);
        };

        match serde_json::from_value::<ProfileRecord>(value.clone()) {
            Ok(record) => Ok(ProfileState::Present(record.profile)),
            Err(e) => {
                warn!("Profile record for {} is unreadable: {}", user, e);
                Err(ProfileStoreError::Corrupt {
                    user: user.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    async fn save_profile(
        &self,
        user: &UserId,
        profile: &SkinProfile,
    ) -> Result<(), ProfileStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document().await?;
        let record = ProfileRecord {
            profile: *profile,
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&record)
            .map_err(|e| ProfileStoreError::Serialization(e.to_string()))?;
        document.insert(user.to_string(), value);

        self.write_document(&document).await?;
        info!("Saved profile for {} to {}", user, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinpal_domain::{Budget, Concern, SkinType};

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileProfileStore::new(dir.path().join("profiles.json"));
        assert_eq!(
            store.get_profile(&user("u1")).await.unwrap(),
            ProfileState::Absent
        );
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("profiles.json");
        let profile = SkinProfile::new(SkinType::Combination, Concern::Wrinkles, Budget::From500To1000);

        JsonFileProfileStore::new(&path)
            .save_profile(&user("u1"), &profile)
            .await
            .unwrap();

        // A fresh store instance reads what the first one wrote
        let reopened = JsonFileProfileStore::new(&path);
        assert_eq!(
            reopened.get_profile(&user("u1")).await.unwrap(),
            ProfileState::Present(profile)
        );
        assert_eq!(
            reopened.get_profile(&user("u2")).await.unwrap(),
            ProfileState::Absent
        );

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["u1"]["skinType"], "combination");
        assert_eq!(raw["u1"]["budget"], "500_to_1000");
        assert!(raw["u1"]["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_keeps_other_users() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileProfileStore::new(dir.path().join("profiles.json"));
        let a = SkinProfile::new(SkinType::Oily, Concern::Acne, Budget::Below500);
        let b = SkinProfile::new(SkinType::Dry, Concern::None, Budget::From1000To2000);

        store.save_profile(&user("a"), &a).await.unwrap();
        store.save_profile(&user("b"), &b).await.unwrap();

        assert_eq!(store.get_profile(&user("a")).await.unwrap(), ProfileState::Present(a));
        assert_eq!(store.get_profile(&user("b")).await.unwrap(), ProfileState::Present(b));
    }

    #[tokio::test]
    async fn test_reads_legacy_budget_spelling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(
            &path,
            r#"{"u1": {"skinType": "dry", "concern": "acne", "budget": "500to1000",
                       "updatedAt": "2025-06-01T12:00:00Z"}}"#,
        )
        .unwrap();

        let store = JsonFileProfileStore::new(&path);
        assert_eq!(
            store.get_profile(&user("u1")).await.unwrap(),
            ProfileState::Present(SkinProfile::new(
                SkinType::Dry,
                Concern::Acne,
                Budget::From500To1000
            ))
        );
    }

    #[tokio::test]
    async fn test_reads_timestamp_field_from_older_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(
            &path,
            r#"{"u1": {"skinType": "dry", "budget": "500to1000", "concern": "acne",
                       "timestamp": "2025-06-01T12:00:00.000Z"}}"#,
        )
        .unwrap();

        let store = JsonFileProfileStore::new(&path);
        assert_eq!(
            store.get_profile(&user("u1")).await.unwrap(),
            ProfileState::Present(SkinProfile::new(
                SkinType::Dry,
                Concern::Acne,
                Budget::From500To1000
            ))
        );

        // Saving rewrites the record with the current field name
        store
            .save_profile(&user("u1"), &SkinProfile::new(SkinType::Dry, Concern::Acne, Budget::Below500))
            .await
            .unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw["u1"]["updatedAt"].is_string());
        assert!(raw["u1"].get("timestamp").is_none());
    }

    #[tokio::test]
    async fn test_corrupt_record_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(
            &path,
            r#"{
                "bad": {"skinType": "normal", "concern": "acne", "budget": "below_500",
                        "updatedAt": "2025-06-01T12:00:00Z"},
                "good": {"skinType": "oily", "concern": "none", "budget": "below_500",
                         "updatedAt": "2025-06-01T12:00:00Z"}
            }"#,
        )
        .unwrap();

        let store = JsonFileProfileStore::new(&path);
        let err = store.get_profile(&user("bad")).await.unwrap_err();
        assert!(matches!(err, ProfileStoreError::Corrupt { .. }));
        assert!(!err.is_retryable());
        assert!(store.get_profile(&user("good")).await.unwrap().is_present());
    }

    #[tokio::test]
    async fn test_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileProfileStore::new(&path);
        assert!(matches!(
            store.get_profile(&user("u1")).await,
            Err(ProfileStoreError::Serialization(_))
        ));
    }
}
