//! `GET /api/user/info`
//!
//! Builds a new synthetic profile on every call. The query is optional; a
//! missing, empty or unparsable `username` falls back to `user`.

use crate::identity::{
    ProfileRecord, SharedEntropy,
    profile::{synthesize, username_or_default},
};
use axum::{
    Json,
    extract::{Extension, Query, rejection::QueryRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header::CACHE_CONTROL},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, instrument};
use utoipa::IntoParams;

#[derive(IntoParams, Debug, Deserialize, Default)]
#[into_params(parameter_in = Query)]
pub struct UserInfoArgs {
    /// Username the profile is generated for, defaults to `user`
    username: Option<String>,
}

#[utoipa::path(
    get,
    path= "/api/user/info",
    params(UserInfoArgs),
    responses (
        (status = 200, description = "Freshly synthesized profile", body = ProfileRecord),
    ),
    tag = "user",
)]
#[instrument(skip(entropy, query))]
pub async fn user_info(
    Extension(entropy): Extension<SharedEntropy>,
    query: Result<Query<UserInfoArgs>, QueryRejection>,
) -> (StatusCode, HeaderMap, Json<ProfileRecord>) {
    let args = parse_user_info_args(query);
    let username = username_or_default(args.username.as_deref());

    let mut rng = entropy.rng();
    let profile = synthesize(username, &mut *rng, Utc::now());
    debug!("Synthesized profile {} for {:?}", profile.id, profile.username);

    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    (StatusCode::OK, headers, Json(profile))
}

fn parse_user_info_args(query: Result<Query<UserInfoArgs>, QueryRejection>) -> UserInfoArgs {
    match query {
        Ok(Query(args)) => args,
        Err(rejection) => {
            debug!("Ignoring unparsable query: {}", rejection.body_text());
            UserInfoArgs::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::OsEntropy;
    use anyhow::{Result, anyhow};
    use axum::http::Uri;
    use std::sync::Arc;

    fn entropy() -> Extension<SharedEntropy> {
        Extension(Arc::new(OsEntropy))
    }

    fn query(uri: &str) -> Result<Result<Query<UserInfoArgs>, QueryRejection>> {
        let uri: Uri = uri.parse()?;
        Ok(Query::<UserInfoArgs>::try_from_uri(&uri))
    }

    #[tokio::test]
    async fn echoes_requested_username() -> Result<()> {
        let (status, _, Json(profile)) =
            user_info(entropy(), query("http://example.com/api/user/info?username=alice")?).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile.username, "alice");
        assert!(profile.joined_date <= profile.last_login);
        Ok(())
    }

    #[tokio::test]
    async fn missing_username_defaults_to_user() -> Result<()> {
        let (_, _, Json(profile)) =
            user_info(entropy(), query("http://example.com/api/user/info")?).await;
        assert_eq!(profile.username, "user");
        Ok(())
    }

    #[tokio::test]
    async fn empty_username_defaults_to_user() -> Result<()> {
        let (_, _, Json(profile)) =
            user_info(entropy(), query("http://example.com/api/user/info?username=")?).await;
        assert_eq!(profile.username, "user");
        Ok(())
    }

    #[tokio::test]
    async fn percent_encoded_username_is_decoded() -> Result<()> {
        let (_, _, Json(profile)) = user_info(
            entropy(),
            query("http://example.com/api/user/info?username=jane%20doe%2B1")?,
        )
        .await;
        assert_eq!(profile.username, "jane doe+1");
        Ok(())
    }

    #[tokio::test]
    async fn repeated_calls_differ() -> Result<()> {
        let uri = "http://example.com/api/user/info?username=alice";
        let (_, _, Json(first)) = user_info(entropy(), query(uri)?).await;
        let (_, _, Json(second)) = user_info(entropy(), query(uri)?).await;
        assert_eq!(first.username, second.username);
        assert_ne!(first.id, second.id);
        Ok(())
    }

    #[test]
    fn parse_user_info_args_accepts_valid_query() -> Result<()> {
        let args = parse_user_info_args(query("http://example.com/?username=bob")?);
        assert_eq!(args.username.as_deref(), Some("bob"));
        Ok(())
    }

    #[test]
    fn parse_user_info_args_falls_back_on_rejection() -> Result<()> {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Strict {
            count: u8,
        }

        let uri: Uri = "http://example.com/?count=nope".parse()?;
        let rejection = Query::<Strict>::try_from_uri(&uri)
            .err()
            .ok_or_else(|| anyhow!("expected query rejection"))?;
        let args = parse_user_info_args(Err(rejection));
        assert!(args.username.is_none());
        Ok(())
    }
}
