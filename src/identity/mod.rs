//! The two halves of the mock identity exchange: accepting credentials and
//! synthesizing the profile that goes with a username.

mod catalog;
pub mod credentials;
pub mod entropy;
pub mod profile;
pub mod timestamp;

pub use self::credentials::{
    CredentialError, LoginGrant, LoginRequest, LoginResponse, authenticate,
};
pub use self::entropy::{Entropy, OsEntropy, SeededEntropy, SharedEntropy};
pub use self::profile::{Address, DEFAULT_USERNAME, ProfileRecord, synthesize};
