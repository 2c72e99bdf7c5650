// 👤 Session Context - Who is connected
// Explicit value passed at construction; no process-wide singleton

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key under which the serialized session lives in the key-value store.
pub const USER_KEY: &str = "user";

// ============================================================================
// KEY-VALUE STORE
// ============================================================================

/// Minimal string key-value capability, standing in for browser-local
/// storage. Read-only from the core's point of view; `set_item` exists for
/// the login flow and test setup.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String);
}

/// In-memory store for tests and the demo binary.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

// ============================================================================
// SESSION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    #[serde(alias = "employee")]
    Employee,
    #[serde(alias = "admin")]
    Admin,
}

/// Session - The connected user, as serialized by the login flow:
/// `{"type": "Employee", "email": "a@a"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub user_type: UserType,

    #[serde(default)]
    pub email: String,
}

impl Session {
    pub fn employee(email: &str) -> Self {
        Session {
            user_type: UserType::Employee,
            email: email.to_string(),
        }
    }

    /// Read and deserialize the session from the key-value store.
    pub fn from_store(store: &impl KeyValueStore) -> Result<Self> {
        let raw = store
            .get_item(USER_KEY)
            .context("no connected user in session store")?;

        serde_json::from_str(&raw).context("malformed session entry")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trip_through_store() {
        let mut store = MemoryStore::new();
        store.set_item(
            USER_KEY,
            r#"{"type": "Employee", "email": "a@a"}"#.to_string(),
        );

        let session = Session::from_store(&store).unwrap();
        assert_eq!(session.user_type, UserType::Employee);
        assert_eq!(session.email, "a@a");
    }

    #[test]
    fn test_session_accepts_lowercase_type() {
        // Some login paths historically wrote "employee" in lowercase
        let mut store = MemoryStore::new();
        store.set_item(
            USER_KEY,
            r#"{"type": "employee", "email": "a@a"}"#.to_string(),
        );

        let session = Session::from_store(&store).unwrap();
        assert_eq!(session.user_type, UserType::Employee);
    }

    #[test]
    fn test_missing_session_is_an_error() {
        let store = MemoryStore::new();
        assert!(Session::from_store(&store).is_err());
    }

    #[test]
    fn test_session_without_email_defaults_empty() {
        let mut store = MemoryStore::new();
        store.set_item(USER_KEY, r#"{"type": "Employee"}"#.to_string());

        let session = Session::from_store(&store).unwrap();
        assert_eq!(session.email, "");
    }
}
