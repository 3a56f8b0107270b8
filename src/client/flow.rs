//! Login and profile flows as a user sees them: transport details collapse
//! into a fixed message, the underlying [`ClientError`] stays reachable via
//! `source()` for logs.

use crate::{
    client::{
        error::ClientError,
        http::ApiClient,
        session::{Session, SessionStore},
    },
    identity::ProfileRecord,
};
use secrecy::SecretString;
use std::fmt;
use tracing::{info, warn};

pub const LOGIN_ERROR_MESSAGE: &str = "An error occurred during login. Please try again.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const PROFILE_ERROR_MESSAGE: &str = "Failed to load user information";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const NOT_AUTHENTICATED_MESSAGE: &str = "Not logged in";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// No username in the session store.
    NotAuthenticated,
    /// The server answered and said no.
    Rejected(String),
    /// Empty profile answer.
    UserNotFound,
    Failed {
        message: &'static str,
        cause: ClientError,
    },
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => f.write_str(NOT_AUTHENTICATED_MESSAGE),
            Self::Rejected(message) => f.write_str(message),
            Self::UserNotFound => f.write_str(USER_NOT_FOUND_MESSAGE),
            Self::Failed { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for FlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Failed { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

/// Submit credentials and record the session on success.
///
/// # Errors
/// [`FlowError::Rejected`] with the server's message when the login is
/// refused, [`FlowError::Failed`] on transport or storage failures.
pub async fn login<S: SessionStore>(
    api: &ApiClient,
    session: &mut Session<S>,
    username: &str,
    password: &SecretString,
) -> Result<String, FlowError> {
    let failed = |cause: ClientError| {
        warn!("login request failed: {}", cause);
        FlowError::Failed {
            message: LOGIN_ERROR_MESSAGE,
            cause,
        }
    };

    let response = api.login(username, password).await.map_err(failed)?;

    if session.record_login(&response).map_err(failed)? {
        let username = response.username.unwrap_or_default();
        info!("logged in as {}", username);
        Ok(username)
    } else if response.message.is_empty() {
        Err(FlowError::Rejected(LOGIN_FAILED_MESSAGE.to_string()))
    } else {
        Err(FlowError::Rejected(response.message))
    }
}

/// Load the profile of the user stored in the session.
///
/// # Errors
/// [`FlowError::NotAuthenticated`] without a stored username,
/// [`FlowError::UserNotFound`] on an empty answer, [`FlowError::Failed`]
/// on anything else.
pub async fn load_profile<S: SessionStore>(
    api: &ApiClient,
    session: &Session<S>,
) -> Result<ProfileRecord, FlowError> {
    let failed = |cause: ClientError| {
        warn!("profile request failed: {}", cause);
        FlowError::Failed {
            message: PROFILE_ERROR_MESSAGE,
            cause,
        }
    };

    let username = session
        .username()
        .map_err(failed)?
        .ok_or(FlowError::NotAuthenticated)?;

    api.user_info(&username)
        .await
        .map_err(failed)?
        .ok_or(FlowError::UserNotFound)
}
