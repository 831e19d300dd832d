
use crate::{AuthService, AuthStore, InMemoryCredentialValidator, MemoryTokenStorage};

use std::sync::Arc;

use salon_core::{PublicUser, UserRole};

fn public_user(role: UserRole) -> PublicUser {
    PublicUser {
        id: String::from("1"),
        name: String::from("Ana"),
        email: String::from("ana@example.com"),
        role,
        created_at: None,
        updated_at: None,
    }
}

/// Store over the in-memory backend, plus handles to both halves
fn memory_store(
    validator: InMemoryCredentialValidator,
    storage: MemoryTokenStorage,
) -> (AuthStore, Arc<InMemoryCredentialValidator>, Arc<MemoryTokenStorage>) {
    let validator = Arc::new(validator);
    let storage = Arc::new(storage);
    let store = AuthStore::new(AuthService::new(validator.clone()), storage.clone());
    (store, validator, storage)
}
