use crate::{
    cli::globals::GlobalArgs,
    client::{Session, SessionStore},
};
use anyhow::Result;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// # Errors
/// Returns an error if the session file cannot be read.
pub fn execute(args: &Args) -> Result<()> {
    println!("{}", describe(&args.globals.session())?);
    Ok(())
}

fn describe<S: SessionStore>(session: &Session<S>) -> Result<String> {
    let Some(username) = session.username()? else {
        return Ok("Not logged in".to_string());
    };
    let token = if session.token()?.is_some() {
        "token stored"
    } else {
        "no token"
    };
    Ok(format!("Logged in as {username} ({token})"))
}
