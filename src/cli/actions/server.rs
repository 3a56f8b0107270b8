use crate::{api, cli::telemetry, identity::entropy};
use anyhow::Result;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub seed: Option<u64>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the port cannot be bound or the server fails.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    let entropy = entropy::from_seed(args.seed);
    let result = api::new(args.port, entropy).await;

    telemetry::shutdown_tracer();
    result
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        ("entropy", randomness_mode(args.seed)),
        ("swagger_ui", format!("http://localhost:{}/swagger-ui", args.port)),
    ];
    info!("{}", startup_message(&entries));
}

fn randomness_mode(seed: Option<u64>) -> String {
    seed.map_or_else(|| "os".to_string(), |seed| format!("seeded ({seed})"))
}

fn startup_message(entries: &[(&str, String)]) -> String {
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!("{}\n\nStartup configuration:", banner());
    for (key, value) in entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    message
}

fn banner() -> String {
    BANNER.replace(
        "{VERSION}",
        &format!(
            " - {} - {}",
            env!("CARGO_PKG_VERSION"),
            short_commit(crate::GIT_COMMIT_HASH)
        ),
    )
}

fn short_commit(hash: &str) -> &str {
    let trimmed = hash.trim();
    trimmed.get(..7).unwrap_or(trimmed)
}

const BANNER: &str = r"
   .-----.
  ( o   o )
   \  ^  /
  --'---'--  M O C K I D{VERSION}";
