use clap::{Arg, Command};

pub const CMD_SERVER: &str = "server";
pub const ARG_PORT: &str = "port";
pub const ARG_SEED: &str = "seed";

pub const DEFAULT_PORT: &str = "3001";

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_SERVER)
        .about("Run the mock identity API")
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value(DEFAULT_PORT)
                .env("MOCKID_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_SEED)
                .long("seed")
                .help("Seed the random generator so tokens and profiles are reproducible")
                .long_help(
                    "Seed the random generator. The same seed and the same sequence of requests produce the same tokens and profiles. Meant for demos and tests.",
                )
                .env("MOCKID_SEED")
                .value_parser(clap::value_parser!(u64)),
        )
}
