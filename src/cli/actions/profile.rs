use crate::{
    cli::globals::GlobalArgs,
    client::{ApiClient, FlowError, flow, render},
};
use anyhow::{Result, bail};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub api_url: String,
}

/// Fetch and print the profile of the stored user.
/// # Errors
/// Returns an error when no session is stored or the profile cannot be loaded.
pub async fn execute(args: Args) -> Result<()> {
    let api = ApiClient::new(&args.api_url)?;
    let session = args.globals.session();

    match flow::load_profile(&api, &session).await {
        Ok(record) => {
            println!("{}", render::profile_page(&record));
            Ok(())
        }
        Err(FlowError::NotAuthenticated) => {
            bail!("Not logged in, run `mockid login` first")
        }
        Err(err) => Err(err.into()),
    }
}
