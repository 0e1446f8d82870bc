use leptos::*;
use serde::{Deserialize, Serialize};

use crate::{
    state::settings::SettingsStore,
    utils::storage::StorageError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminProfile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Data URI of the uploaded picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Directory id used when the admin marks their own attendance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl Default for AdminProfile {
    fn default() -> Self {
        Self {
            name: "Admin User".into(),
            role: "HR Administrator".into(),
            email: "hr@company.com".into(),
            phone: String::new(),
            location: String::new(),
            avatar: None,
            employee_id: None,
        }
    }
}

impl AdminProfile {
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".into())
    }
}

/// Typed subject for the admin profile. Views read [`ProfileState::current`]
/// and re-render when [`ProfileState::save`] publishes a new value.
#[derive(Clone, Copy)]
pub struct ProfileState {
    profile: RwSignal<AdminProfile>,
    store: StoredValue<SettingsStore>,
}

impl ProfileState {
    pub fn new(store: SettingsStore) -> Self {
        let profile = create_rw_signal(store.profile());
        Self {
            profile,
            store: store_value(store),
        }
    }

    pub fn current(&self) -> ReadSignal<AdminProfile> {
        self.profile.read_only()
    }

    pub fn store(&self) -> SettingsStore {
        self.store.get_value()
    }

    /// Persists first so subscribers never observe a value that failed to save.
    pub fn save(&self, profile: AdminProfile) -> Result<(), StorageError> {
        self.store.with_value(|store| store.save_profile(&profile))?;
        self.profile.set(profile);
        Ok(())
    }

    pub fn reload(&self) {
        self.profile.set(self.store.with_value(SettingsStore::profile));
    }
}

pub fn provide_profile(store: SettingsStore) -> ProfileState {
    let state = ProfileState::new(store);
    provide_context(state);
    state
}

pub fn use_profile() -> ProfileState {
    match use_context::<ProfileState>() {
        Some(state) => state,
        None => provide_profile(SettingsStore::browser()),
    }
}
