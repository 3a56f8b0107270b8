pub mod login;
pub mod logout;
pub mod profile;
pub mod server;
pub mod status;

// Internal "interpreter" for `Action`, keeps the match out of this file.
mod run;

#[derive(Debug)]
pub enum Action {
    Server(server::Args),
    Login(login::Args),
    Profile(profile::Args),
    Logout(logout::Args),
    Status(status::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
