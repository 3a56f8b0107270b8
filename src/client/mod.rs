//! Consumer side of the mock identity exchange: an HTTP client for the API,
//! the client-held session, and the login/profile flows built on both.

pub mod error;
pub mod flow;
pub mod http;
pub mod render;
pub mod session;

pub use self::error::ClientError;
pub use self::flow::{FlowError, load_profile, login};
pub use self::http::{ApiClient, DEFAULT_API_URL};
pub use self::session::{FileStore, MemoryStore, Session, SessionStore};
