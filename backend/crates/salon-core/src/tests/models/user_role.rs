use crate::{CoreError, UserRole};

use std::str::FromStr;

#[test]
fn test_user_role_default_is_cliente() {
    assert_eq!(UserRole::default(), UserRole::Cliente);
}

#[test]
fn test_user_role_from_str_round_trips_as_str() {
    for role in [UserRole::Cliente, UserRole::Peluquera, UserRole::Admin] {
        assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_user_role_from_str_rejects_unknown() {
    let result = UserRole::from_str("manager");
    assert!(matches!(result, Err(CoreError::InvalidUserRole { value, .. }) if value == "manager"));
}

#[test]
fn test_user_role_serializes_lowercase() {
    let json = serde_json::to_string(&UserRole::Peluquera).unwrap();
    assert_eq!(json, "\"peluquera\"");
}
