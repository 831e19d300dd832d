use crate::{CoreError, NewUser, UserRole};

#[test]
fn test_new_user_normalizes_fields() {
    let user = NewUser::new("  Ana ", " Ana@X.COM ", "hash".to_string()).unwrap();

    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@x.com");
    assert_eq!(user.role, UserRole::Cliente);
}

#[test]
fn test_new_user_rejects_blank_name() {
    let result = NewUser::new("   ", "ana@x.com", "hash".to_string());
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_new_user_rejects_blank_email() {
    let result = NewUser::new("Ana", "", "hash".to_string());
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_new_user_with_role() {
    let user = NewUser::new("Eva", "eva@x.com", "hash".to_string())
        .unwrap()
        .with_role(UserRole::Peluquera);
    assert_eq!(user.role, UserRole::Peluquera);
}
