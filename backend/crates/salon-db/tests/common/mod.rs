#![allow(dead_code)]

use salon_core::NewUser;
use salon_db::{JsonStore, UserRepository};

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

/// Store in a fresh temp dir. Keep the `TempDir` alive for the test's duration.
pub async fn create_test_store() -> (TempDir, Arc<JsonStore>) {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::open(dir.path().join("db.json")).await.unwrap();
    (dir, Arc::new(store))
}

pub async fn create_test_repo() -> (TempDir, UserRepository) {
    let (dir, store) = create_test_store().await;
    (dir, UserRepository::new(store))
}

pub fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("db.json")
}

pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser::new(name, email, "$argon2id$test-hash".to_string()).unwrap()
}
