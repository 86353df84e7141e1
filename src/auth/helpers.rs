use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};

use super::{TokenGenerator, parse_token};
use crate::store::Store;
use crate::types::{Token, User};

#[derive(Debug, PartialEq, Eq)]
pub enum TokenValidationError {
    InvalidScheme,
    InvalidToken,
    TokenExpired,
    InternalError,
}

pub struct ValidatedToken {
    pub token: Token,
    pub user: Option<User>,
}

/// Extracts a token string from a Basic auth header.
/// Expects format: Basic base64(x-token:actual_token)
fn extract_basic_auth_token(header: &str) -> Option<String> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;

    match credentials.split_once(':')? {
        ("x-token", password) => Some(password.to_string()),
        _ => None,
    }
}

/// Extracts the raw token from an Authorization header value.
/// `Ok(None)` means the header was absent.
pub fn extract_token_from_header(
    auth_header: Option<&str>,
) -> Result<Option<String>, TokenValidationError> {
    let Some(header) = auth_header else {
        return Ok(None);
    };

    if let Some(token) = header.strip_prefix("Bearer ") {
        return Ok(Some(token.trim().to_string()));
    }
    if header.starts_with("Basic ") {
        return extract_basic_auth_token(header)
            .map(Some)
            .ok_or(TokenValidationError::InvalidToken);
    }
    Err(TokenValidationError::InvalidScheme)
}

/// Validates a raw token string against the store.
/// Returns the token and, for user tokens, the user it belongs to.
pub fn validate_token(
    store: &dyn Store,
    raw_token: &str,
    now: DateTime<Utc>,
) -> Result<ValidatedToken, TokenValidationError> {
    let (lookup, _secret) =
        parse_token(raw_token).map_err(|_| TokenValidationError::InvalidToken)?;

    let token = store
        .get_token_by_lookup(&lookup)
        .map_err(|_| TokenValidationError::InternalError)?
        .ok_or(TokenValidationError::InvalidToken)?;

    let generator = TokenGenerator::new();
    if !generator
        .verify(raw_token, &token.token_hash)
        .map_err(|_| TokenValidationError::InternalError)?
    {
        return Err(TokenValidationError::InvalidToken);
    }

    if token.expires_at.is_some_and(|expires_at| expires_at < now) {
        return Err(TokenValidationError::TokenExpired);
    }

    let user = match &token.user_id {
        Some(user_id) => store
            .get_user(user_id)
            .map_err(|_| TokenValidationError::InternalError)?,
        None => None,
    };

    if let Err(e) = store.update_token_last_used(&token.id) {
        tracing::warn!("Failed to update token last_used_at: {e}");
    }

    Ok(ValidatedToken { token, user })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use tempfile::TempDir;

    use super::*;
    use crate::auth::issue_token;
    use crate::store::SqliteStore;

    fn setup() -> (TempDir, SqliteStore) {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path().join("test.db")).unwrap();
        store.initialize().unwrap();
        let now = Utc::now();
        store
            .create_user(&User {
                id: "u1".to_string(),
                username: "alice".to_string(),
                created_at: now,
                updated_at: now,
            })
            .unwrap();
        (temp, store)
    }

    #[test]
    fn test_header_schemes() {
        assert_eq!(extract_token_from_header(None), Ok(None));
        assert_eq!(
            extract_token_from_header(Some("Bearer abc")),
            Ok(Some("abc".to_string()))
        );

        let basic = format!("Basic {}", STANDARD.encode("x-token:abc"));
        assert_eq!(
            extract_token_from_header(Some(&basic)),
            Ok(Some("abc".to_string()))
        );

        let wrong_user = format!("Basic {}", STANDARD.encode("alice:abc"));
        assert_eq!(
            extract_token_from_header(Some(&wrong_user)),
            Err(TokenValidationError::InvalidToken)
        );
        assert_eq!(
            extract_token_from_header(Some("Digest abc")),
            Err(TokenValidationError::InvalidScheme)
        );
    }

    #[test]
    fn test_validate_user_token() {
        let (_temp, store) = setup();
        let (token, raw) = issue_token(&TokenGenerator::new(), false, Some("u1".to_string())).unwrap();
        store.create_token(&token).unwrap();

        let validated = validate_token(&store, &raw, Utc::now()).unwrap();
        assert_eq!(validated.token.id, token.id);
        assert_eq!(validated.user.unwrap().username, "alice");

        let stored = store.get_token_by_id(&token.id).unwrap().unwrap();
        assert!(stored.last_used_at.is_some());
    }

    #[test]
    fn test_validate_rejects_bad_tokens() {
        let (_temp, store) = setup();
        let generator = TokenGenerator::new();
        let (mut token, raw) = issue_token(&generator, false, Some("u1".to_string())).unwrap();
        token.expires_at = Some(Utc::now() - Duration::hours(1));
        store.create_token(&token).unwrap();

        assert!(matches!(
            validate_token(&store, &raw, Utc::now()),
            Err(TokenValidationError::TokenExpired)
        ));
        assert!(matches!(
            validate_token(&store, "rollcall_nope", Utc::now()),
            Err(TokenValidationError::InvalidToken)
        ));

        let (_, unknown) = issue_token(&generator, false, None).unwrap();
        assert!(matches!(
            validate_token(&store, &unknown, Utc::now()),
            Err(TokenValidationError::InvalidToken)
        ));
    }
}
