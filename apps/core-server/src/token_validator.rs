use std::collections::HashSet;
use std::time::Duration;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    get_current_timestamp,
};
use rbac_core::model::role::Role;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Tokens without expiration stay valid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Empty token")]
    EmptyToken,
    #[error("Token signing secret not configured")]
    MissingSecret,
    #[error("Token expired")]
    Expired,
    #[error("Invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Verifies and issues HS256 access tokens with a shared secret.
#[derive(Clone)]
pub struct TokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenAuthority {
    pub fn new(secret: &SecretString, leeway: u64) -> Result<Self, TokenError> {
        let secret = secret.expose_secret().as_bytes();
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway;
        // `exp` is checked only when present
        validation.required_spec_claims = HashSet::from(["sub".to_string()]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::EmptyToken);
        }

        decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(err),
            })
    }

    /// Mints a token for `subject` holding `roles`, optionally limited to `lifetime`
    pub fn issue_access_token(
        &self,
        subject: &str,
        roles: &[Role],
        lifetime: Option<Duration>,
    ) -> Result<String, TokenError> {
        let now = get_current_timestamp();
        let claims = AccessTokenClaims {
            sub: subject.to_owned(),
            roles: roles.iter().map(ToString::to_string).collect(),
            iat: Some(now),
            exp: lifetime.map(|lifetime| now + lifetime.as_secs()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Invalid)
    }
}
