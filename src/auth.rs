//! Authentication and session management.
//!
//! Player credentials live in a flat JSON file mapping username to argon2
//! hash, read wholesale and rewritten wholesale on every change. The
//! moderator credential is fixed and kept separate from the player file.
//! Sessions are HMAC-signed cookies carrying the username and role.

use axum_extra::extract::CookieJar;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use subtle::ConstantTimeEq;

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};

use crate::models::{AuthError, Role, Session};

type HmacSha256 = Hmac<Sha256>;

/// Session cookie name
pub const SESSION_COOKIE: &str = "oceanmap_session";

/// Session time-to-live in hours
pub const SESSION_TTL_HOURS: i64 = 24;

/// The fixed moderator account, checked independently of the player file.
pub const MODERATOR_USERNAME: &str = "DM";

// ============================================================================
// Password Hashing
// ============================================================================

/// Hash a password with Argon2id and a fresh per-record salt.
pub fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("argon2 hashing with a generated salt cannot fail")
        .to_string()
}

/// Verify a password against a stored PHC-format hash. Unparseable hashes
/// verify as false rather than erroring.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Hash the moderator password once at startup (Argon2id — ~100ms, done once).
/// Password comes from OCEANMAP_DM_PASSWORD, defaulting to the stock campaign
/// password so a fresh checkout runs out of the box.
pub fn hash_moderator_password_at_startup() -> String {
    let password = env::var("OCEANMAP_DM_PASSWORD").unwrap_or_else(|_| "Massa".to_string());
    hash_password(&password)
}

/// Secret key for signing session cookies: OCEANMAP_SECRET if set, otherwise
/// a random per-run key (sessions then expire when the server restarts).
pub fn session_secret() -> Vec<u8> {
    if let Ok(secret) = env::var("OCEANMAP_SECRET") {
        return secret.into_bytes();
    }
    let key: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    key.into_bytes()
}

// ============================================================================
// Credential Store
// ============================================================================

/// Flat file of player credentials: a single JSON object mapping username to
/// password hash. The whole file is read at open and rewritten on insert.
pub struct CredentialStore {
    path: PathBuf,
    records: HashMap<String, String>,
}

impl CredentialStore {
    /// Open the store, creating an empty file if none exists. A file that
    /// fails to parse is treated as empty rather than crashing the server.
    pub fn open(path: PathBuf) -> Self {
        let records = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => {
                fs::write(&path, "{}").ok();
                HashMap::new()
            }
        };
        Self { path, records }
    }

    pub fn lookup(&self, username: &str) -> Option<&str> {
        self.records.get(username).map(String::as_str)
    }

    /// Insert a new credential, failing if the username is already taken.
    /// Callers serialize access (the store sits behind the AppState mutex),
    /// so check-then-insert cannot race between requests.
    pub fn insert(&mut self, username: &str, hash: &str) -> Result<(), AuthError> {
        if self.records.contains_key(username) {
            return Err(AuthError::UsernameTaken);
        }
        self.records.insert(username.to_string(), hash.to_string());
        self.save();
        Ok(())
    }

    /// Rewrite the whole file. A write failure is surfaced as a warning and
    /// the in-memory records remain authoritative for this process.
    fn save(&self) {
        let json = serde_json::to_string(&self.records).unwrap_or_else(|_| "{}".to_string());
        if let Err(e) = fs::write(&self.path, json) {
            eprintln!(
                "warning: failed to persist {}: {}",
                self.path.display(),
                e
            );
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Login / Register
// ============================================================================

/// Check the player file first, then the moderator credential; either match
/// establishes a session with the corresponding role.
pub fn login(
    players: &CredentialStore,
    moderator_hash: &str,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let username = username.trim();

    if let Some(hash) = players.lookup(username) {
        if verify_password(password, hash) {
            return Ok(Session {
                username: username.to_string(),
                role: Role::Player,
            });
        }
    }

    if username == MODERATOR_USERNAME && verify_password(password, moderator_hash) {
        return Ok(Session {
            username: username.to_string(),
            role: Role::Moderator,
        });
    }

    Err(AuthError::InvalidCredentials)
}

/// Register a new player and log them in. Empty username or password is
/// rejected before any hashing work.
pub fn register(
    players: &mut CredentialStore,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingField);
    }

    let hash = hash_password(password);
    players.insert(username, &hash)?;

    Ok(Session {
        username: username.to_string(),
        role: Role::Player,
    })
}

// ============================================================================
// Session Tokens
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionToken {
    username: String,
    role: Role,
    created: i64,
    expires: i64,
    nonce: String,
}

/// Create a signed session token for an authenticated identity.
pub fn create_session_token(session: &Session, secret: &[u8]) -> Option<String> {
    let now = Utc::now().timestamp();
    let nonce: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(16)
        .map(char::from)
        .collect();

    let token = SessionToken {
        username: session.username.clone(),
        role: session.role,
        created: now,
        expires: now + SESSION_TTL_HOURS * 3600,
        nonce,
    };
    let token_json = serde_json::to_string(&token).ok()?;

    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(token_json.as_bytes());
    let signature = hex_encode(mac.finalize().into_bytes().as_slice());

    Some(format!("{}.{}", base64_encode(&token_json), signature))
}

/// Verify a session token and recover the identity it carries. Returns None
/// for malformed, tampered, or expired tokens — an absent session is never
/// an error.
pub fn verify_session_token(token: &str, secret: &[u8]) -> Option<Session> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 2 {
        return None;
    }

    let token_json = base64_decode(parts[0])?;

    // Verify signature
    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(token_json.as_bytes());
    let expected_sig = hex_encode(mac.finalize().into_bytes().as_slice());

    // Constant-time comparison to prevent timing attacks
    let sig_bytes = parts[1].as_bytes();
    let expected_bytes = expected_sig.as_bytes();
    if sig_bytes.len() != expected_bytes.len() {
        return None;
    }
    if sig_bytes.ct_eq(expected_bytes).unwrap_u8() != 1 {
        return None;
    }

    let token: SessionToken = serde_json::from_str(&token_json).ok()?;
    if Utc::now().timestamp() >= token.expires {
        return None;
    }

    Some(Session {
        username: token.username,
        role: token.role,
    })
}

/// Recover the session from the request's cookie jar, if any.
pub fn session_from_jar(jar: &CookieJar, secret: &[u8]) -> Option<Session> {
    let cookie = jar.get(SESSION_COOKIE)?;
    verify_session_token(cookie.value(), secret)
}

/// Set-Cookie value establishing a session.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
        SESSION_COOKIE,
        token,
        SESSION_TTL_HOURS * 3600
    )
}

/// Set-Cookie value clearing the session. Clearing an already-absent cookie
/// is harmless, so logout is idempotent.
pub fn logout_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}

// ============================================================================
// Encoding Helpers
// ============================================================================

/// Encode a string as base64
pub fn base64_encode(s: &str) -> String {
    STANDARD.encode(s.as_bytes())
}

/// Decode a base64 string
pub fn base64_decode(s: &str) -> Option<String> {
    let bytes = STANDARD.decode(s).ok()?;
    String::from_utf8(bytes).ok()
}

/// Encode bytes as hexadecimal
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> CredentialStore {
        let n: u64 = rand::thread_rng().gen();
        let path = std::env::temp_dir().join(format!("oceanmap_players_{}.json", n));
        CredentialStore::open(path)
    }

    #[test]
    fn test_register_then_login_roundtrip() {
        let mut players = temp_store();
        let session = register(&mut players, "fjord", "tide-pool").unwrap();
        assert_eq!(session.role, Role::Player);
        assert_eq!(session.username, "fjord");

        let session = login(&players, "unused", "fjord", "tide-pool").unwrap();
        assert_eq!(session.role, Role::Player);
        assert_eq!(session.username, "fjord");
    }

    #[test]
    fn test_duplicate_registration_keeps_first_hash() {
        let mut players = temp_store();
        register(&mut players, "gull", "first-pw").unwrap();
        let first_hash = players.lookup("gull").unwrap().to_string();

        let err = register(&mut players, "gull", "second-pw").unwrap_err();
        assert_eq!(err, AuthError::UsernameTaken);
        assert_eq!(players.lookup("gull"), Some(first_hash.as_str()));
        assert_eq!(players.len(), 1);
    }

    #[test]
    fn test_register_rejects_missing_fields() {
        let mut players = temp_store();
        assert_eq!(
            register(&mut players, "", "pw").unwrap_err(),
            AuthError::MissingField
        );
        assert_eq!(
            register(&mut players, "name", "").unwrap_err(),
            AuthError::MissingField
        );
        // Whitespace-only usernames trim to empty.
        assert_eq!(
            register(&mut players, "   ", "pw").unwrap_err(),
            AuthError::MissingField
        );
        assert!(players.is_empty());
    }

    #[test]
    fn test_wrong_password_does_not_mutate_state() {
        let mut players = temp_store();
        register(&mut players, "kelp", "right").unwrap();
        let hash_before = players.lookup("kelp").unwrap().to_string();

        let err = login(&players, "unused", "kelp", "wrong").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(players.lookup("kelp"), Some(hash_before.as_str()));
    }

    #[test]
    fn test_moderator_login_checked_separately() {
        let players = temp_store();
        let moderator_hash = hash_password("secret-tide");

        let session = login(&players, &moderator_hash, MODERATOR_USERNAME, "secret-tide").unwrap();
        assert_eq!(session.role, Role::Moderator);

        // Moderator password only works for the moderator username.
        assert!(login(&players, &moderator_hash, "someone", "secret-tide").is_err());
    }

    #[test]
    fn test_session_token_roundtrip() {
        let secret = b"test-secret-key";
        let session = Session {
            username: "fjord".to_string(),
            role: Role::Moderator,
        };
        let token = create_session_token(&session, secret).unwrap();
        let recovered = verify_session_token(&token, secret).unwrap();
        assert_eq!(recovered, session);
    }

    #[test]
    fn test_session_token_rejects_tampering() {
        let secret = b"test-secret-key";
        let session = Session {
            username: "fjord".to_string(),
            role: Role::Player,
        };
        let token = create_session_token(&session, secret).unwrap();

        // Forge a moderator payload without re-signing.
        let sig = token.split('.').nth(1).unwrap();
        let forged_payload = base64_encode(
            &serde_json::json!({
                "username": "fjord",
                "role": "moderator",
                "created": 0,
                "expires": i64::MAX,
                "nonce": "x"
            })
            .to_string(),
        );
        let forged = format!("{}.{}", forged_payload, sig);
        assert!(verify_session_token(&forged, secret).is_none());

        // Wrong secret fails too.
        assert!(verify_session_token(&token, b"other-secret").is_none());
    }

    #[test]
    fn test_verify_password_rejects_garbage_hash() {
        assert!(!verify_password("pw", "not-a-phc-hash"));
    }
}
