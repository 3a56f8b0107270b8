//! Failures the client side can hit, grouped by where they happen: building
//! the client, talking to the service, reading its answer, or touching the
//! session store.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientError {
    /// Bad base URL or an HTTP client that could not be built.
    Setup(String),
    /// Connection refused, DNS failure, TLS handshake and the like.
    Unreachable(String),
    TimedOut,
    /// A status the endpoint does not document, with a trimmed body.
    Status { code: u16, body: String },
    /// The body did not match the expected payload.
    Decode(String),
    Storage(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(detail) => write!(f, "client setup failed: {detail}"),
            Self::Unreachable(detail) => write!(f, "mockid API unreachable: {detail}"),
            Self::TimedOut => f.write_str("mockid API did not answer in time"),
            Self::Status { code, body } => write!(f, "unexpected HTTP {code}: {body}"),
            Self::Decode(detail) => write!(f, "unreadable answer: {detail}"),
            Self::Storage(detail) => write!(f, "session store: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::TimedOut;
        }
        let detail = err.to_string();
        if err.is_decode() {
            Self::Decode(detail)
        } else if err.is_builder() {
            Self::Setup(detail)
        } else {
            Self::Unreachable(detail)
        }
    }
}
