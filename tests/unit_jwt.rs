use snapschool::config::jwt::JwtConfig;
use snapschool::utils::jwt::{create_access_token, verify_token};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();

    let result = create_access_token("test@example.com", &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_verify_token_round_trip() {
    let jwt_config = get_test_jwt_config();

    let token = create_access_token("a@x.com", &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.exp, claims.iat + 3600);
}

#[test]
fn test_verify_token_invalid() {
    let jwt_config = get_test_jwt_config();

    let result = verify_token("invalid.token.here", &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token("test@example.com", &jwt_config).unwrap();

    let other_config = JwtConfig {
        secret: "a_completely_different_secret".to_string(),
        access_token_expiry: 3600,
    };
    let result = verify_token(&token, &other_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_expired() {
    // Negative expiry puts `exp` in the past at signing time
    let jwt_config = JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: -3600,
    };

    let token = create_access_token("test@example.com", &jwt_config).unwrap();
    let result = verify_token(&token, &jwt_config);

    assert!(result.is_err());
}
