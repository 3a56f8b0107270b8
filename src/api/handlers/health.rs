//! Liveness probe. The service has no dependencies to check, so the answer is
//! always `ok` together with the server clock.

use crate::{GIT_COMMIT_HASH, identity::timestamp};
use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: String,
    #[serde(with = "crate::identity::timestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path= "/health",
    responses (
        (status = 200, description = "Service is up", body = Health)
    ),
    tag = "health",
)]
/// Report that the process is alive.
pub async fn health() -> impl IntoResponse {
    let health = Health {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    };
    debug!("health probe at {}", timestamp::format(&health.timestamp));

    (StatusCode::OK, x_app_headers(), Json(health))
}

/// `X-App: <name>:<version>:<short commit>`
fn x_app_headers() -> HeaderMap {
    let short_hash = if GIT_COMMIT_HASH.len() > 7 {
        &GIT_COMMIT_HASH[0..7]
    } else {
        ""
    };

    format!(
        "{}:{}:{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        short_hash
    )
    .parse::<HeaderValue>()
    .map(|x_app_header_value| {
        let mut headers = HeaderMap::new();
        headers.insert("X-App", x_app_header_value);
        headers
    })
    .map_err(|err| {
        debug!("Failed to parse X-App header: {}", err);
    })
    .unwrap_or_else(|()| HeaderMap::new())
}
