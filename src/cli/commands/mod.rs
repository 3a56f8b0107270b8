pub mod client;
pub mod logging;
pub mod server;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_SESSION_FILE: &str = "session-file";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("mockid")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long("session-file")
                .help("Where the client keeps its session (default: $HOME/.mockid/session.json)")
                .env("MOCKID_SESSION_FILE")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .subcommand(server::command());

    let command = client::with_subcommands(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const MOCKID_VARS: [&str; 6] = [
        "MOCKID_PORT",
        "MOCKID_SEED",
        "MOCKID_API_URL",
        "MOCKID_PASSWORD",
        "MOCKID_SESSION_FILE",
        "MOCKID_LOG_LEVEL",
    ];

    fn without_env<F: FnOnce()>(f: F) {
        temp_env::with_vars_unset(MOCKID_VARS, f);
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "mockid");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
        let names: Vec<&str> = command.get_subcommands().map(Command::get_name).collect();
        assert_eq!(names, ["server", "login", "profile", "logout", "status"]);
    }

    #[test]
    fn test_server_defaults() {
        without_env(|| {
            let matches = new().get_matches_from(vec!["mockid", "server"]);
            let Some(("server", sub)) = matches.subcommand() else {
                panic!("server subcommand expected");
            };
            assert_eq!(sub.get_one::<u16>(server::ARG_PORT).copied(), Some(3001));
            assert_eq!(sub.get_one::<u64>(server::ARG_SEED), None);
        });
    }

    #[test]
    fn test_server_env() {
        temp_env::with_vars(
            [
                ("MOCKID_PORT", Some("8443")),
                ("MOCKID_SEED", Some("42")),
                ("MOCKID_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["mockid", "server"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                let Some(("server", sub)) = matches.subcommand() else {
                    panic!("server subcommand expected");
                };
                assert_eq!(sub.get_one::<u16>(server::ARG_PORT).copied(), Some(8443));
                assert_eq!(sub.get_one::<u64>(server::ARG_SEED).copied(), Some(42));
            },
        );
    }

    #[test]
    fn test_server_rejects_bad_port() {
        without_env(|| {
            let result = new().try_get_matches_from(vec!["mockid", "server", "--port", "70000"]);
            assert_eq!(
                result.map(|_| ()).map_err(|e| e.kind()),
                Err(clap::error::ErrorKind::ValueValidation)
            );
        });
    }

    #[test]
    fn test_login_args() {
        without_env(|| {
            let matches = new().get_matches_from(vec![
                "mockid",
                "--session-file",
                "/tmp/session.json",
                "login",
                "-u",
                "alice",
                "--password",
                "secret",
            ]);
            assert_eq!(
                matches.get_one::<PathBuf>(ARG_SESSION_FILE).cloned(),
                Some(PathBuf::from("/tmp/session.json"))
            );
            let Some(("login", sub)) = matches.subcommand() else {
                panic!("login subcommand expected");
            };
            assert_eq!(
                sub.get_one::<String>(client::ARG_USERNAME).cloned(),
                Some("alice".to_string())
            );
            assert_eq!(
                sub.get_one::<String>(client::ARG_PASSWORD).cloned(),
                Some("secret".to_string())
            );
            assert_eq!(
                sub.get_one::<String>(client::ARG_API_URL).cloned(),
                Some("http://localhost:3001".to_string())
            );
        });
    }

    #[test]
    fn test_login_requires_credentials() {
        without_env(|| {
            let result = new().try_get_matches_from(vec!["mockid", "login", "-u", "alice"]);
            assert_eq!(
                result.map(|_| ()).map_err(|e| e.kind()),
                Err(clap::error::ErrorKind::MissingRequiredArgument)
            );
        });
    }

    #[test]
    fn test_client_env() {
        temp_env::with_vars(
            [
                ("MOCKID_API_URL", Some("http://mock.tld:9000")),
                ("MOCKID_PASSWORD", Some("from-env")),
                ("MOCKID_SESSION_FILE", Some("/var/tmp/s.json")),
            ],
            || {
                let matches = new().get_matches_from(vec!["mockid", "login", "-u", "bob"]);
                assert_eq!(
                    matches.get_one::<PathBuf>(ARG_SESSION_FILE).cloned(),
                    Some(PathBuf::from("/var/tmp/s.json"))
                );
                let Some(("login", sub)) = matches.subcommand() else {
                    panic!("login subcommand expected");
                };
                assert_eq!(
                    sub.get_one::<String>(client::ARG_API_URL).cloned(),
                    Some("http://mock.tld:9000".to_string())
                );
                assert_eq!(
                    sub.get_one::<String>(client::ARG_PASSWORD).cloned(),
                    Some("from-env".to_string())
                );
            },
        );
    }

    #[test]
    fn test_subcommand_required() {
        without_env(|| {
            let result = new().try_get_matches_from(vec!["mockid"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("MOCKID_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["mockid", "status"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            without_env(|| {
                let mut args = vec!["mockid".to_string(), "status".to_string()];

                // global flag, accepted after the subcommand too
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}
