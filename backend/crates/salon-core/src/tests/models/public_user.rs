use crate::{PublicUser, User, UserRole};

use chrono::Utc;

fn stored_user() -> User {
    let now = Utc::now();
    User {
        id: "7".to_string(),
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        role: UserRole::Cliente,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_public_user_json_has_no_password() {
    let public = stored_user().to_public();
    let json = serde_json::to_value(&public).unwrap();

    assert!(json.get("password").is_none());
    assert_eq!(json["id"], "7");
    assert_eq!(json["email"], "ana@x.com");
    assert_eq!(json["role"], "cliente");
    assert!(json.get("createdAt").is_some());
}

#[test]
fn test_user_json_uses_camel_case_timestamps() {
    let json = serde_json::to_value(stored_user()).unwrap();

    assert!(json.get("createdAt").is_some());
    assert!(json.get("updatedAt").is_some());
    assert!(json.get("created_at").is_none());
}

#[test]
fn test_public_user_accepts_missing_timestamps() {
    let json = r#"{"id":"1","name":"Eva","email":"eva@x.com","role":"admin"}"#;
    let user: PublicUser = serde_json::from_str(json).unwrap();

    assert_eq!(user.role, UserRole::Admin);
    assert!(user.created_at.is_none());
}

#[test]
fn test_user_has_email_ignores_case_and_whitespace() {
    let user = stored_user();
    assert!(user.has_email("  ANA@X.com "));
    assert!(!user.has_email("ana@y.com"));
}

#[test]
fn test_user_numeric_id() {
    let mut user = stored_user();
    assert_eq!(user.numeric_id(), Some(7));

    user.id = "abc".to_string();
    assert_eq!(user.numeric_id(), None);
}
