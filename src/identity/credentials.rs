//! Credential acceptor.
//!
//! There is no user store: any pair of non-empty strings is accepted and
//! answered with a fabricated token. The token is opaque and never checked
//! again by anyone.

use rand::{Rng, distributions::Alphanumeric};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub const TOKEN_LENGTH: usize = 32;
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";
pub const MISSING_FIELDS_MESSAGE: &str = "Username and password are required";

/// Credentials as submitted by the client. Missing fields deserialize as empty.
#[derive(ToSchema, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default = "empty_secret")]
    #[schema(value_type = String, format = Password)]
    pub password: SecretString,
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

impl Default for LoginRequest {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: empty_secret(),
        }
    }
}

impl LoginRequest {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Wire shape of the login answer, for both outcomes.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A successful login: the echoed username and its throwaway token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    pub username: String,
    pub token: String,
}

impl From<LoginGrant> for LoginResponse {
    fn from(grant: LoginGrant) -> Self {
        Self {
            success: true,
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
            token: Some(grant.token),
            username: Some(grant.username),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    MissingFields,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => f.write_str(MISSING_FIELDS_MESSAGE),
        }
    }
}

impl std::error::Error for CredentialError {}

impl From<CredentialError> for LoginResponse {
    fn from(err: CredentialError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            token: None,
            username: None,
        }
    }
}

/// Accept the credentials if both fields are non-empty.
///
/// No trimming and no format checks: `" "` is a valid username.
///
/// # Errors
/// Returns [`CredentialError::MissingFields`] when either field is empty.
pub fn authenticate<R: Rng + ?Sized>(
    request: &LoginRequest,
    rng: &mut R,
) -> Result<LoginGrant, CredentialError> {
    if request.username.is_empty() || request.password.expose_secret().is_empty() {
        return Err(CredentialError::MissingFields);
    }

    Ok(LoginGrant {
        username: request.username.clone(),
        token: generate_token(rng),
    })
}

/// Random `[A-Za-z0-9]` string of [`TOKEN_LENGTH`] characters. Not meant to be
/// cryptographically meaningful.
pub fn generate_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TOKEN_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
