use crate::cli::{
    actions::{Action, login, logout, profile, server, status},
    commands::{
        ARG_SESSION_FILE,
        client::{ARG_API_URL, ARG_PASSWORD, ARG_USERNAME, CMD_LOGIN, CMD_LOGOUT, CMD_PROFILE, CMD_STATUS},
        server::{ARG_PORT, ARG_SEED, CMD_SERVER},
    },
    globals::GlobalArgs,
};
use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use secrecy::SecretString;
use std::path::PathBuf;

/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = GlobalArgs::new(matches.get_one::<PathBuf>(ARG_SESSION_FILE).cloned());

    let Some((name, sub)) = matches.subcommand() else {
        bail!("missing subcommand");
    };

    let action = match name {
        CMD_SERVER => Action::Server(server::Args {
            port: sub.get_one::<u16>(ARG_PORT).copied().unwrap_or(3001),
            seed: sub.get_one::<u64>(ARG_SEED).copied(),
        }),
        CMD_LOGIN => Action::Login(login::Args {
            globals,
            api_url: api_url(sub)?,
            username: sub
                .get_one::<String>(ARG_USERNAME)
                .cloned()
                .context("missing required argument: --username")?,
            password: sub
                .get_one::<String>(ARG_PASSWORD)
                .cloned()
                .map(SecretString::from)
                .context("missing required argument: --password")?,
        }),
        CMD_PROFILE => Action::Profile(profile::Args {
            globals,
            api_url: api_url(sub)?,
        }),
        CMD_LOGOUT => Action::Logout(logout::Args { globals }),
        CMD_STATUS => Action::Status(status::Args { globals }),
        other => bail!("unknown subcommand: {other}"),
    };

    Ok(action)
}

fn api_url(matches: &ArgMatches) -> Result<String> {
    matches
        .get_one::<String>(ARG_API_URL)
        .cloned()
        .context("missing required argument: --api-url")
}
