use env_logger::Env;
use log::LevelFilter;

/// Environment variable that overrides --log-level, in env_logger filter syntax
pub const LOG_ENV: &str = "BCRUN_LOG";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);
impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" | "warning" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" | "none" => LevelFilter::Off,
            _ => return Err(format!("Invalid log level: {}", s)),
        };
        Ok(LogLevel(level))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(LevelFilter::Info)
    }
}

/// Install env_logger as the global logger. Safe to call more than once; later calls are no-ops
pub fn setup_logger(log_level: LogLevel) {
    let env = Env::default().filter(LOG_ENV);
    let _ = env_logger::Builder::new()
        .filter_level(log_level.into())
        .parse_env(env)
        .format_timestamp_secs()
        .try_init();
}
