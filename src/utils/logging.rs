use std::str::FromStr;
use tracing::Level;

// json logs on stdout; hosted log collectors add their own ingestion time
pub fn setup_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .init();
}

pub(crate) fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}
