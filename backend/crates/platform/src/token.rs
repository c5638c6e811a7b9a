//! Signed Bearer Tokens
//!
//! Issues and validates HS256-signed, time-limited bearer tokens carrying
//! a user identity claim. Tokens are stateless: there is no revocation
//! list, expiry is the only termination mechanism.
//!
//! Validation is pure computation (no I/O) and classifies every failure,
//! so callers can log the exact reason while returning a generic
//! unauthorized response to the client.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Fixed token lifetime: 15 minutes.
pub const TOKEN_TTL_SECS: i64 = 15 * 60;

/// Token claims.
///
/// Tagged structure validated on decode: unknown or missing fields are
/// rejected instead of being read from an untyped map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Claims {
    /// Always true for tokens issued by this service.
    pub authorized: bool,
    /// Identity of the authenticated user.
    pub user_id: Uuid,
    /// Expiration (unix timestamp, seconds).
    pub exp: i64,
}

/// Classified token failures.
///
/// Every variant maps to the same unauthorized response client-side;
/// the distinction exists for server-side logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a decodable token, or the claims do not match the tagged shape.
    #[error("token is malformed")]
    Malformed,
    /// Signature does not match the configured secret.
    #[error("token signature is invalid")]
    BadSignature,
    /// Signed with an algorithm other than HS256. Accepting any other
    /// algorithm is a forgery vector, so this is checked explicitly.
    #[error("token uses an unexpected signing algorithm")]
    WrongAlgorithm,
    /// `exp` has passed.
    #[error("token has expired")]
    Expired,
    /// Signing failed (key misconfiguration, not a per-request condition).
    #[error("token signing failed")]
    Signing,
}

/// Issues and validates bearer tokens with a single shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the signing secret.
    pub fn new(secret: &[u8]) -> Self {
        // HS256 is the only accepted algorithm, at issuance and validation
        let validation = Validation::new(Algorithm::HS256);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a signed token for a user, valid for [`TOKEN_TTL_SECS`].
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let claims = Claims {
            authorized: true,
            user_id,
            exp: Utc::now().timestamp() + TOKEN_TTL_SECS,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::Signing)
    }

    /// Validate a token and extract the authenticated user identity.
    ///
    /// Checks, in order: decodability and claim shape, signing algorithm,
    /// signature, expiry. Never returns a partially-trusted identity.
    pub fn validate(&self, token: &str) -> Result<Uuid, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(classify_error)?;

        // A token built by hand with `authorized: false` is not ours
        if !data.claims.authorized {
            return Err(TokenError::Malformed);
        }

        Ok(data.claims.user_id)
    }
}

fn classify_error(err: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::BadSignature,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            TokenError::WrongAlgorithm
        }
        // Undecodable input, claim shape mismatches, missing `exp`, etc.
        _ => TokenError::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    const SECRET: &[u8] = b"test-signing-secret";

    fn service() -> TokenService {
        TokenService::new(SECRET)
    }

    #[test]
    fn issue_and_validate_roundtrip() {
        let svc = service();
        let user_id = Uuid::new_v4();

        let token = svc.issue(user_id).unwrap();
        let validated = svc.validate(&token).unwrap();

        assert_eq!(validated, user_id);
    }

    #[test]
    fn expired_token_rejected() {
        let svc = service();
        // 120s in the past clears the default 60s leeway
        let claims = Claims {
            authorized: true,
            user_id: Uuid::new_v4(),
            exp: Utc::now().timestamp() - 120,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(svc.validate(&token), Err(TokenError::Expired));
    }

    #[test]
    fn wrong_algorithm_rejected() {
        let svc = service();
        // Valid-looking payload, same secret, different algorithm
        let claims = Claims {
            authorized: true,
            user_id: Uuid::new_v4(),
            exp: Utc::now().timestamp() + 600,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(svc.validate(&token), Err(TokenError::WrongAlgorithm));
    }

    #[test]
    fn wrong_secret_rejected() {
        let issuer = TokenService::new(b"secret-a");
        let verifier = TokenService::new(b"secret-b");

        let token = issuer.issue(Uuid::new_v4()).unwrap();

        assert_eq!(verifier.validate(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn garbage_rejected_as_malformed() {
        let svc = service();
        assert_eq!(svc.validate("garbage"), Err(TokenError::Malformed));
        assert_eq!(
            svc.validate("still.not.a-token"),
            Err(TokenError::Malformed)
        );
        assert_eq!(svc.validate(""), Err(TokenError::Malformed));
    }

    #[test]
    fn unknown_claim_rejected() {
        #[derive(Serialize)]
        struct SmuggledClaims {
            authorized: bool,
            user_id: Uuid,
            exp: i64,
            role: &'static str,
        }

        let svc = service();
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &SmuggledClaims {
                authorized: true,
                user_id: Uuid::new_v4(),
                exp: Utc::now().timestamp() + 600,
                role: "admin",
            },
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(svc.validate(&token), Err(TokenError::Malformed));
    }

    #[test]
    fn missing_claim_rejected() {
        #[derive(Serialize)]
        struct PartialClaims {
            authorized: bool,
            exp: i64,
        }

        let svc = service();
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &PartialClaims {
                authorized: true,
                exp: Utc::now().timestamp() + 600,
            },
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(svc.validate(&token), Err(TokenError::Malformed));
    }

    #[test]
    fn unauthorized_claim_rejected() {
        let svc = service();
        let claims = Claims {
            authorized: false,
            user_id: Uuid::new_v4(),
            exp: Utc::now().timestamp() + 600,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(svc.validate(&token), Err(TokenError::Malformed));
    }
}
