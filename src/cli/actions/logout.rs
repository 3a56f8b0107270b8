use crate::cli::globals::GlobalArgs;
use anyhow::Result;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// # Errors
/// Returns an error if the session file cannot be updated.
pub fn execute(args: &Args) -> Result<()> {
    args.globals.session().logout()?;
    println!("Logged out");
    Ok(())
}
