//! `POST /api/login`
//!
//! Any non-empty username/password pair is accepted and answered with a fresh
//! opaque token. A missing or unreadable body counts as empty credentials.

use crate::identity::{LoginRequest, LoginResponse, SharedEntropy, authenticate};
use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header::CACHE_CONTROL},
};
use tracing::{debug, instrument};

type LoginReply = (StatusCode, HeaderMap, Json<LoginResponse>);

#[utoipa::path(
    post,
    path= "/api/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Credentials accepted, token issued", body = LoginResponse),
        (status = 400, description = "Username or password is empty", body = LoginResponse),
    ),
    tag = "auth",
)]
#[instrument(skip(entropy, payload))]
pub async fn login(
    Extension(entropy): Extension<SharedEntropy>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> LoginReply {
    let request = parse_login_request(payload);

    let mut rng = entropy.rng();
    let (status, response) = match authenticate(&request, &mut *rng) {
        Ok(grant) => {
            debug!("Login accepted for username: {:?}", grant.username);
            (StatusCode::OK, LoginResponse::from(grant))
        }
        Err(err) => {
            debug!("Login rejected: {}", err);
            (StatusCode::BAD_REQUEST, LoginResponse::from(err))
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    (status, headers, Json(response))
}

fn parse_login_request(payload: Result<Json<LoginRequest>, JsonRejection>) -> LoginRequest {
    match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Unreadable login payload: {}", rejection.body_text());
            LoginRequest::default()
        }
    }
}
