pub mod health;
pub use self::health::health;

pub mod login;
pub use self::login::login;

pub mod user_info;
pub use self::user_info::user_info;
