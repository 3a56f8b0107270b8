//! # mockid (mock identity + synthesized profiles)
//!
//! `mockid` is a small HTTP service used to demo login flows without a real
//! identity provider behind them. It exposes two endpoints that matter:
//!
//! 1. **`POST /api/login`**: accepts *any* non-empty username/password pair and
//!    answers with a freshly fabricated opaque token. Nothing is verified,
//!    hashed or stored.
//! 2. **`GET /api/user/info`**: returns a randomly generated profile for the
//!    requested username. Every call produces new data; only the username is
//!    echoed back verbatim.
//!
//! ## Client-held session
//!
//! The [`client`] module contains the consumer side of the exchange. The
//! session is a pair of keys (`username`, `token`) kept in a local store, and
//! "authenticated" simply means the `username` key is present. The server never
//! looks at the token again.
//!
//! ## Randomness
//!
//! All synthesized values are drawn through [`identity::Entropy`]. Production
//! uses a fresh OS-seeded RNG per request; tests and `--seed` runs plug in a
//! seeded source so output is reproducible.

pub mod api;
pub mod cli;
pub mod client;
pub mod identity;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
