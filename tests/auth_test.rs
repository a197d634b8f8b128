//! Integration tests for JWT auth validation.
//!
//! These tests mint JWTs locally using the same HS256 secret the server
//! would read from `JWT_SECRET`, then validate them through
//! `validate_token`. No running server or database is needed.
//!
//! Run with: `cargo test --test auth_test`

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use vendora_backend::auth::jwt::{Claims, Role, validate_token};

/// A fake secret for testing — never use the real one in tests committed to git.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

/// Helper: mint a JWT signed with HS256 using the test secret.
fn mint_test_token(sub: &str, role: Role) -> String {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: sub.to_string(),
        role,
        exp: now + 3600, // 1 hour from now
        iat: Some(now),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to encode test JWT")
}

#[test]
fn test_valid_user_token_decodes_correctly() {
    let user_id = Uuid::new_v4();
    let token = mint_test_token(&user_id.to_string(), Role::User);

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.role, Role::User);
    assert_eq!(claims.principal_id().unwrap(), user_id);
}

#[test]
fn test_vendor_and_admin_roles_round_trip() {
    let vendor_token = mint_test_token(&Uuid::new_v4().to_string(), Role::Vendor);
    let admin_token = mint_test_token(&Uuid::new_v4().to_string(), Role::Admin);

    assert_eq!(
        validate_token(&vendor_token, TEST_SECRET).unwrap().role,
        Role::Vendor
    );
    assert_eq!(
        validate_token(&admin_token, TEST_SECRET).unwrap().role,
        Role::Admin
    );
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        role: Role::User,
        exp: now - 300, // expired 5 minutes ago (well past the 60s default leeway)
        iat: Some(now - 3600),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_token(&token, TEST_SECRET);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = mint_test_token(&Uuid::new_v4().to_string(), Role::Vendor);

    let result = validate_token(&token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    let result = validate_token("not.a.valid.jwt", TEST_SECRET);
    assert!(result.is_err());
}

#[test]
fn test_non_uuid_subject_fails_principal_id() {
    let token = mint_test_token("not-a-uuid", Role::User);

    // Signature and expiry are fine, so the token itself validates...
    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    // ...but it cannot resolve to a principal.
    assert!(claims.principal_id().is_err());
}
