//! Versioned settings document persisted in browser storage.
//!
//! Everything the dashboard keeps locally lives in one JSON document under
//! [`SETTINGS_KEY`]. Version 1 was the loose layout (`adminProfile` plus one
//! `attendance_YYYY-MM-DD` key per self-marked day); it is folded into the
//! current document on first load and the loose keys are removed.

use std::{collections::BTreeMap, rc::Rc};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    api::AttendanceStatus,
    state::profile::AdminProfile,
    utils::storage::{default_store, KeyValueStore, StorageError},
};

pub const SETTINGS_KEY: &str = "hr_dashboard.settings";
pub const SETTINGS_VERSION: u32 = 2;

const LEGACY_PROFILE_KEY: &str = "adminProfile";
const LEGACY_SELF_MARK_PREFIX: &str = "attendance_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSettings {
    pub version: u32,
    #[serde(default)]
    pub profile: AdminProfile,
    #[serde(default)]
    pub self_marks: BTreeMap<NaiveDate, AttendanceStatus>,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            profile: AdminProfile::default(),
            self_marks: BTreeMap::new(),
        }
    }
}

#[derive(Clone)]
pub struct SettingsStore {
    backend: Rc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn browser() -> Self {
        Self::new(default_store())
    }

    /// Reads the document, migrating older layouts. Never fails: unreadable
    /// data degrades to defaults and is logged.
    pub fn load(&self) -> PersistedSettings {
        let Some(raw) = self.backend.get(SETTINGS_KEY) else {
            return self.migrate_legacy();
        };
        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Discarding unreadable settings document: {}", err);
                return PersistedSettings::default();
            }
        };
        let version = value
            .get("version")
            .and_then(Value::as_u64)
            .unwrap_or_default();
        if version > u64::from(SETTINGS_VERSION) {
            // Written by a newer build; leave it in place and run on defaults.
            log::warn!(
                "Settings version {} is newer than supported version {}",
                version,
                SETTINGS_VERSION
            );
            return PersistedSettings::default();
        }
        if version < u64::from(SETTINGS_VERSION) {
            return self.migrate_legacy();
        }
        serde_json::from_value(value).unwrap_or_else(|err| {
            log::warn!("Settings document failed validation: {}", err);
            PersistedSettings::default()
        })
    }

    fn stored_version(&self) -> Option<u64> {
        let raw = self.backend.get(SETTINGS_KEY)?;
        let value: Value = serde_json::from_str(&raw).ok()?;
        value.get("version").and_then(Value::as_u64)
    }

    /// Writes the document. A document from a newer version is never
    /// overwritten.
    pub fn save(&self, settings: &PersistedSettings) -> Result<(), StorageError> {
        if let Some(found) = self
            .stored_version()
            .filter(|v| *v > u64::from(SETTINGS_VERSION))
        {
            return Err(StorageError::NewerVersion {
                key: SETTINGS_KEY.to_string(),
                found,
                supported: SETTINGS_VERSION,
            });
        }
        let encoded = serde_json::to_string(settings).map_err(|e| StorageError::Encode {
            key: SETTINGS_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.backend.set(SETTINGS_KEY, &encoded)
    }

    pub fn update(
        &self,
        f: impl FnOnce(&mut PersistedSettings),
    ) -> Result<PersistedSettings, StorageError> {
        let mut settings = self.load();
        f(&mut settings);
        settings.version = SETTINGS_VERSION;
        self.save(&settings)?;
        Ok(settings)
    }

    pub fn profile(&self) -> AdminProfile {
        self.load().profile
    }

    pub fn save_profile(&self, profile: &AdminProfile) -> Result<(), StorageError> {
        self.update(|settings| settings.profile = profile.clone())
            .map(|_| ())
    }

    pub fn self_mark(&self, date: NaiveDate) -> Option<AttendanceStatus> {
        self.load().self_marks.get(&date).copied()
    }

    pub fn record_self_mark(
        &self,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<(), StorageError> {
        self.update(|settings| {
            settings.self_marks.insert(date, status);
        })
        .map(|_| ())
    }

    fn migrate_legacy(&self) -> PersistedSettings {
        let mut settings = PersistedSettings::default();
        let mut legacy_keys = Vec::new();

        if let Some(raw) = self.backend.get(LEGACY_PROFILE_KEY) {
            match serde_json::from_str::<AdminProfile>(&raw) {
                Ok(profile) => settings.profile = profile,
                Err(err) => log::warn!("Ignoring unreadable legacy profile: {}", err),
            }
            legacy_keys.push(LEGACY_PROFILE_KEY.to_string());
        }

        for key in self.backend.keys() {
            let Some(day) = key.strip_prefix(LEGACY_SELF_MARK_PREFIX) else {
                continue;
            };
            let Ok(date) = NaiveDate::parse_from_str(day, "%Y-%m-%d") else {
                continue;
            };
            let status = match self.backend.get(&key).as_deref() {
                Some("Present") => Some(AttendanceStatus::Present),
                Some("Absent") => Some(AttendanceStatus::Absent),
                _ => None,
            };
            if let Some(status) = status {
                settings.self_marks.insert(date, status);
            }
            legacy_keys.push(key);
        }

        if legacy_keys.is_empty() {
            return settings;
        }

        match self.save(&settings) {
            Ok(()) => {
                for key in &legacy_keys {
                    self.backend.remove(key);
                }
                log::info!(
                    "Migrated {} legacy settings keys to version {}",
                    legacy_keys.len(),
                    SETTINGS_VERSION
                );
            }
            Err(err) => log::warn!("Keeping legacy settings, migration failed: {}", err),
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    fn store() -> (MemoryStorage, SettingsStore) {
        let memory = MemoryStorage::new();
        let settings = SettingsStore::new(Rc::new(memory.clone()));
        (memory, settings)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_storage_loads_defaults_without_writing() {
        let (memory, settings) = store();
        let loaded = settings.load();
        assert_eq!(loaded, PersistedSettings::default());
        assert!(memory.keys().is_empty());
    }

    #[test]
    fn legacy_keys_are_migrated_and_removed() {
        let (memory, settings) = store();
        memory
            .set(
                "adminProfile",
                r#"{"name":"Dana","role":"HR Lead","email":"dana@example.com"}"#,
            )
            .unwrap();
        memory.set("attendance_2025-01-02", "Present").unwrap();
        memory.set("attendance_2025-01-03", "Absent").unwrap();
        memory.set("attendance_not-a-date", "Present").unwrap();
        memory.set("unrelated", "keep").unwrap();

        let loaded = settings.load();
        assert_eq!(loaded.version, SETTINGS_VERSION);
        assert_eq!(loaded.profile.name, "Dana");
        assert_eq!(loaded.profile.phone, AdminProfile::default().phone);
        assert_eq!(
            loaded.self_marks.get(&date(2025, 1, 2)),
            Some(&AttendanceStatus::Present)
        );
        assert_eq!(
            loaded.self_marks.get(&date(2025, 1, 3)),
            Some(&AttendanceStatus::Absent)
        );

        assert!(memory.get("adminProfile").is_none());
        assert!(memory.get("attendance_2025-01-02").is_none());
        assert!(memory.get("attendance_not-a-date").is_some());
        assert_eq!(memory.get("unrelated").as_deref(), Some("keep"));
        assert!(memory.get(SETTINGS_KEY).is_some());

        // Second load reads the migrated document.
        assert_eq!(settings.load(), loaded);
    }

    #[test]
    fn newer_document_is_left_untouched() {
        let (memory, settings) = store();
        let future = r#"{"version":99,"profile":{"name":"Future"}}"#;
        memory.set(SETTINGS_KEY, future).unwrap();

        let loaded = settings.load();
        assert_eq!(loaded, PersistedSettings::default());
        assert_eq!(memory.get(SETTINGS_KEY).as_deref(), Some(future));
    }

    #[test]
    fn writes_refuse_to_replace_newer_document() {
        let (memory, settings) = store();
        let future = r#"{"version":99,"profile":{"name":"Future"}}"#;
        memory.set(SETTINGS_KEY, future).unwrap();

        let err = settings
            .record_self_mark(date(2025, 1, 2), AttendanceStatus::Present)
            .unwrap_err();
        assert!(matches!(err, StorageError::NewerVersion { found: 99, .. }));
        assert!(settings
            .save_profile(&AdminProfile::default())
            .is_err());
        assert_eq!(memory.get(SETTINGS_KEY).as_deref(), Some(future));
    }

    #[test]
    fn corrupt_document_falls_back_to_defaults() {
        let (memory, settings) = store();
        memory.set(SETTINGS_KEY, "{not json").unwrap();
        assert_eq!(settings.load(), PersistedSettings::default());
    }

    #[test]
    fn profile_and_self_marks_persist_together() {
        let (_, settings) = store();
        let profile = AdminProfile {
            name: "Sam".into(),
            ..AdminProfile::default()
        };
        settings.save_profile(&profile).unwrap();
        settings
            .record_self_mark(date(2025, 2, 1), AttendanceStatus::Absent)
            .unwrap();

        assert_eq!(settings.profile().name, "Sam");
        assert_eq!(
            settings.self_mark(date(2025, 2, 1)),
            Some(AttendanceStatus::Absent)
        );
        assert_eq!(settings.self_mark(date(2025, 2, 2)), None);
        assert_eq!(settings.load().version, SETTINGS_VERSION);
    }
}
