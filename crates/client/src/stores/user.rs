//! User session store with persistence.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::storage::{self, KeyValueStore, PlatformStorage};

pub const STORAGE_KEY: &str = "fantasta_user";

/// Identity of the logged-in user. An empty `user_id` means no session.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStore {
    pub user_id: String,
    pub nickname: String,
    pub is_admin: bool,
}

impl UserStore {
    /// Restore the persisted identity, or the empty one if nothing usable
    /// was stored.
    pub fn load(store: &impl KeyValueStore) -> Self {
        storage::load(store, STORAGE_KEY).unwrap_or_default()
    }

    /// Write the identity to `store`, or drop the stored copy when there is
    /// no session.
    pub fn persist(&self, store: &impl KeyValueStore) -> bool {
        if self.is_authenticated() {
            storage::save(store, STORAGE_KEY, self)
        } else {
            store.remove(STORAGE_KEY);
            true
        }
    }

    /// Overwrite all three fields. No validation.
    pub fn set_user(&mut self, id: impl Into<String>, nickname: impl Into<String>, is_admin: bool) {
        self.user_id = id.into();
        self.nickname = nickname.into();
        self.is_admin = is_admin;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Only the user id gates authentication; the nickname may be empty.
    pub fn is_authenticated(&self) -> bool {
        !self.user_id.is_empty()
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Admin flag, never set without a session.
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.is_admin
    }
}

/// User session context provided to the app
#[derive(Clone, Copy, Debug)]
pub struct UserContext {
    pub identity: Signal<UserStore>,
}

impl UserContext {
    pub fn set_user(&mut self, id: impl Into<String>, nickname: impl Into<String>, is_admin: bool) {
        self.identity.write().set_user(id, nickname, is_admin);
    }

    /// Logout. Clears the identity; the sync effect drops the stored copy.
    pub fn clear(&mut self) {
        self.identity.write().clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.read().is_authenticated()
    }

    pub fn user_id(&self) -> String {
        self.identity.read().user_id.clone()
    }

    pub fn nickname(&self) -> String {
        self.identity.read().nickname.clone()
    }

    pub fn is_admin(&self) -> bool {
        self.identity.read().is_admin()
    }
}

/// Provider component that loads the persisted identity and keeps storage
/// in sync with it.
#[component]
pub fn UserProvider(children: Element) -> Element {
    let identity = use_signal(|| {
        let restored = UserStore::load(&PlatformStorage);
        if restored.is_authenticated() {
            crate::log_info!("Restored session for '{}'", restored.nickname);
        }
        restored
    });

    use_effect(move || {
        if !identity.read().persist(&PlatformStorage) {
            crate::log_warn!("Failed to persist user session");
        }
    });

    use_context_provider(|| UserContext { identity });

    children
}

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;
