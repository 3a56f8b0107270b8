use crate::cli::actions::{Action, login, logout, profile, server, status};
use anyhow::Result;

/// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Server(args) => server::execute(args).await,
        Action::Login(args) => login::execute(args).await,
        Action::Profile(args) => profile::execute(args).await,
        Action::Logout(args) => logout::execute(&args),
        Action::Status(args) => status::execute(&args),
    }
}
