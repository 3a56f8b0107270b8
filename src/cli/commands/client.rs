use crate::client::DEFAULT_API_URL;
use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_PROFILE: &str = "profile";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_STATUS: &str = "status";

pub const ARG_API_URL: &str = "api-url";
pub const ARG_USERNAME: &str = "username";
pub const ARG_PASSWORD: &str = "password";

fn api_url_arg() -> Arg {
    Arg::new(ARG_API_URL)
        .long("api-url")
        .help("Base URL of the mock identity API")
        .default_value(DEFAULT_API_URL)
        .env("MOCKID_API_URL")
}

#[must_use]
pub fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Log in with any non-empty username and password")
        .arg(api_url_arg())
        .arg(
            Arg::new(ARG_USERNAME)
                .short('u')
                .long("username")
                .help("Username to log in as")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .long("password")
                .help("Password, anything non-empty is accepted")
                .env("MOCKID_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}

#[must_use]
pub fn profile() -> Command {
    Command::new(CMD_PROFILE)
        .about("Show the profile of the logged in user")
        .arg(api_url_arg())
}

#[must_use]
pub fn logout() -> Command {
    Command::new(CMD_LOGOUT).about("Forget the stored session")
}

#[must_use]
pub fn status() -> Command {
    Command::new(CMD_STATUS).about("Show whether a session is stored")
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(login())
        .subcommand(profile())
        .subcommand(logout())
        .subcommand(status())
}
