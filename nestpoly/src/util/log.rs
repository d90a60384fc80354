use ::log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Environment variable holding the log level (`off`, `error`, ..., `trace`).
pub const LOG_LEVEL_ENV: &str = "NESTPOLY_LOG";

/// Installs a terminal logger (stderr) showing records of this crate only.
pub fn init_logger(l: LevelFilter) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .add_filter_allow_str("nestpoly")
        .build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto
    )
}

/// `init_logger` with the level read from `NESTPOLY_LOG`, defaulting to `warn`.
pub fn init_logger_from_env() -> Result<(), SetLoggerError> {
    let l = std::env::var(LOG_LEVEL_ENV).ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(LevelFilter::Warn);
    init_logger(l)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    s.trim().parse().ok()
}
