//! Thin `reqwest` wrapper for the three endpoints the service exposes. Every
//! request carries the crate user agent and gives up after
//! [`DEFAULT_TIMEOUT`].

use crate::{
    APP_USER_AGENT,
    api::handlers::health::Health,
    client::error::ClientError,
    identity::{LoginResponse, ProfileRecord},
};
use reqwest::{Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Applied to every request, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client for the API rooted at `base_url`.
    ///
    /// # Errors
    /// Returns [`ClientError::Setup`] if the URL is not an absolute http(s)
    /// URL or the HTTP client cannot be created.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|err| ClientError::Setup(format!("Invalid API URL {base_url}: {err}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::Setup(format!(
                "Unsupported API URL scheme: {}",
                base_url.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|err| ClientError::Setup(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { base_url, http })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submit credentials. Both the accepted (200) and the rejected (400)
    /// answers carry a [`LoginResponse`], so both are returned as `Ok`.
    ///
    /// # Errors
    /// Returns an error on transport failures, any other status, or an
    /// undecodable body.
    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, ClientError> {
        let body = Credentials {
            username,
            password: password.expose_secret(),
        };

        let response = self
            .http
            .post(self.endpoint("/api/login")?)
            .json(&body)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::BAD_REQUEST => Ok(response.json::<LoginResponse>().await?),
            _ => Err(http_error(response).await),
        }
    }

    /// Fetch the profile for `username`. `None` when the server has nothing
    /// to return (404 or a JSON `null`).
    ///
    /// # Errors
    /// Returns an error on transport failures, unexpected statuses, or an
    /// undecodable body.
    #[instrument(skip(self))]
    pub async fn user_info(&self, username: &str) -> Result<Option<ProfileRecord>, ClientError> {
        let response = self
            .http
            .get(self.endpoint("/api/user/info")?)
            .query(&[("username", username)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("no profile for {}", username);
            return Ok(None);
        }

        if response.status().is_success() {
            Ok(response.json::<Option<ProfileRecord>>().await?)
        } else {
            Err(http_error(response).await)
        }
    }

    /// # Errors
    /// Returns an error if the service is unreachable or unhealthy.
    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self.http.get(self.endpoint("/health")?).send().await?;

        if response.status().is_success() {
            Ok(response.json::<Health>().await?)
        } else {
            Err(http_error(response).await)
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let url = build_url(self.base_url.as_str(), path);
        Url::parse(&url).map_err(|err| ClientError::Setup(format!("Invalid endpoint {url}: {err}")))
    }
}

/// Join base and path without dropping a base path prefix.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    format!("{}/{}", base, path.trim().trim_start_matches('/'))
}

async fn http_error(response: Response) -> ClientError {
    let code = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ClientError::Status {
        code,
        body: sanitize_body(&body),
    }
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
