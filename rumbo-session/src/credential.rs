use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use rumbo_shared::Role;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

// ============================================================================
// Claims
// ============================================================================

/// Payload of the bearer credential issued by the backend.
///
/// The client never verifies the signature (it holds no secret); it only
/// reads the payload for identity and role. The backend's 401 responses are
/// the authority on whether the credential is still good.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub exp: usize,
}

impl Claims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp as i64, 0)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expires_at) => expires_at <= now,
            None => true,
        }
    }
}

/// Decode the payload segment of a JWT without verifying it.
pub fn decode_claims(credential: &str) -> Result<Claims, CredentialError> {
    let mut segments = credential.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(CredentialError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| CredentialError::Malformed)?;

    serde_json::from_slice(&bytes).map_err(|_| CredentialError::Malformed)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Credential is not a decodable token")]
    Malformed,
}

// ============================================================================
// Credential storage
// ============================================================================

/// Storage for the single persisted credential string.
///
/// The UI shell supplies the real implementation (browser local storage,
/// keychain); this crate only defines the seam and an in-memory stand-in.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, credential: &str);
    fn clear(&self);
}

#[derive(Default)]
pub struct MemoryCredentialStore {
    credential: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(credential: &str) -> Self {
        Self {
            credential: Mutex::new(Some(credential.to_string())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.credential.lock().expect("credential lock poisoned").clone()
    }

    fn save(&self, credential: &str) {
        *self.credential.lock().expect("credential lock poisoned") = Some(credential.to_string());
    }

    fn clear(&self) {
        *self.credential.lock().expect("credential lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(claims: &Claims) -> String {
        encode(&Header::default(), claims, &EncodingKey::from_secret(b"test-secret"))
            .expect("Failed to encode")
    }

    #[test]
    fn test_decode_roundtrip() {
        let claims = Claims {
            sub: "user-1".to_string(),
            email: "ana@example.com".to_string(),
            role: Role::User,
            exp: 4_102_444_800,
        };

        let decoded = decode_claims(&token(&claims)).expect("Failed to decode");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(decode_claims("not-a-token"), Err(CredentialError::Malformed));
        assert_eq!(decode_claims("a.b"), Err(CredentialError::Malformed));
        assert_eq!(decode_claims("a.!!!.c"), Err(CredentialError::Malformed));
    }

    #[test]
    fn test_expiry_check() {
        let claims = Claims {
            sub: "user-1".to_string(),
            email: "ana@example.com".to_string(),
            role: Role::User,
            exp: 1_000,
        };
        assert!(claims.is_expired(Utc::now()));
    }
}
