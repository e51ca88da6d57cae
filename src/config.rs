//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "countdown")]
#[command(about = "A terminal countdown timer with start, pause, resume and reset")]
#[command(version)]
pub struct Config {
    /// Initial duration in seconds, entered and set on startup
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Ticker period in milliseconds
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_second_ticks() {
        let config = Config::try_parse_from(["countdown"]).unwrap();
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.duration, None);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn reads_flags() {
        let config = Config::try_parse_from(["countdown", "-d", "90", "--tick-ms", "250", "-v"]).unwrap();
        assert_eq!(config.duration.as_deref(), Some("90"));
        assert_eq!(config.tick_period(), Duration::from_millis(250));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_zero_tick_period() {
        assert!(Config::try_parse_from(["countdown", "--tick-ms", "0"]).is_err());
    }
}
