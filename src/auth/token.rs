//! API tokens look like `rollcall_<lookup>_<secret>`. The lookup half indexes
//! the stored row and the whole string is checked against an Argon2id hash.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::types::Token;

const ARGON2_MEMORY_KIB: u32 = 64 * 1024;
const ARGON2_ITERATIONS: u32 = 1;
const ARGON2_PARALLELISM: u32 = 4;
const ARGON2_OUTPUT_LEN: usize = 32;

const TOKEN_PREFIX: &str = "rollcall";
const LOOKUP_LEN: usize = 8;
const SECRET_BYTES: usize = 12;
const SECRET_LEN: usize = SECRET_BYTES * 2;

/// Hashes and verifies raw tokens.
pub struct TokenGenerator {
    argon2: Argon2<'static>,
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenGenerator {
    #[must_use]
    pub fn new() -> Self {
        let params = Params::new(
            ARGON2_MEMORY_KIB,
            ARGON2_ITERATIONS,
            ARGON2_PARALLELISM,
            Some(ARGON2_OUTPUT_LEN),
        )
        .expect("argon2 params are constant and valid");

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    fn hash(&self, raw: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(raw.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::Config(format!("failed to hash token: {e}")))
    }

    pub fn verify(&self, raw: &str, hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| Error::Config(format!("invalid hash format: {e}")))?;

        match self.argon2.verify_password(raw.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(Error::Config(format!("failed to verify token: {e}"))),
        }
    }
}

/// Mints a fresh token. Returns the record to store and the raw string,
/// which is shown once and never persisted.
pub fn issue_token(
    generator: &TokenGenerator,
    is_admin: bool,
    user_id: Option<String>,
) -> Result<(Token, String)> {
    let lookup = Uuid::new_v4().simple().to_string()[..LOOKUP_LEN].to_string();

    let mut secret = [0u8; SECRET_BYTES];
    rand::thread_rng().fill(&mut secret);
    let secret: String = secret.iter().map(|b| format!("{b:02x}")).collect();

    let raw = format!("{TOKEN_PREFIX}_{lookup}_{secret}");
    let token = Token {
        id: Uuid::new_v4().to_string(),
        token_hash: generator.hash(&raw)?,
        token_lookup: lookup,
        is_admin,
        user_id,
        created_at: Utc::now(),
        expires_at: None,
        last_used_at: None,
    };
    Ok((token, raw))
}

/// Splits a raw token into its lookup and secret halves.
pub fn parse_token(raw: &str) -> Result<(String, String)> {
    let (lookup, secret) = raw
        .strip_prefix(TOKEN_PREFIX)
        .and_then(|rest| rest.strip_prefix('_'))
        .and_then(|rest| rest.split_once('_'))
        .ok_or(Error::InvalidTokenFormat)?;

    if lookup.len() != LOOKUP_LEN || secret.len() != SECRET_LEN || secret.contains('_') {
        return Err(Error::InvalidTokenFormat);
    }

    Ok((lookup.to_string(), secret.to_string()))
}
