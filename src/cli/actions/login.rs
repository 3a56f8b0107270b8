use crate::{
    cli::globals::GlobalArgs,
    client::{ApiClient, flow},
};
use anyhow::Result;
use secrecy::SecretString;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub api_url: String,
    pub username: String,
    pub password: SecretString,
}

/// Log in and store the session.
/// # Errors
/// Returns the user-facing login error.
pub async fn execute(args: Args) -> Result<()> {
    let api = ApiClient::new(&args.api_url)?;
    let mut session = args.globals.session();

    let username = flow::login(&api, &mut session, &args.username, &args.password).await?;
    println!("Logged in as {username}");
    Ok(())
}
