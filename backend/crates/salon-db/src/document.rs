//! Shape of the persisted JSON document.
//!
//! Only `auth.users` is typed. Every other key, at the top level or inside
//! `auth`, is carried through untouched so that collections owned by other
//! parts of the application survive a rewrite.

use salon_core::User;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Collections created alongside `auth` when a fresh document is seeded
pub const SEEDED_COLLECTIONS: [&str; 3] = ["services", "appointments", "stylists"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub auth: AuthSection,
    #[serde(flatten)]
    pub collections: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthSection {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Empty document with the sibling collections present
    pub fn seeded() -> Self {
        let collections = SEEDED_COLLECTIONS
            .iter()
            .map(|name| (name.to_string(), Value::Array(Vec::new())))
            .collect();

        Self {
            auth: AuthSection::default(),
            collections,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.auth.users
    }

    /// Next id: one past the largest numeric id, or 1 when there is none
    pub fn next_user_id(&self) -> u64 {
        self.auth
            .users
            .iter()
            .filter_map(User::numeric_id)
            .max()
            .map_or(1, |max| max + 1)
    }
}
