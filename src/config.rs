//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::TimerDefaults;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "tomato-clock")]
#[command(about = "A session/break countdown timer with an HTTP control surface")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20525")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Default session length in minutes, restored on reset
    #[arg(long, default_value = "25", value_parser = clap::value_parser!(u32).range(1..=60))]
    pub session_length: u32,

    /// Default break length in minutes, restored on reset
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=60))]
    pub break_length: u32,

    /// Ring the terminal bell when the timer switches modes
    #[arg(long)]
    pub bell: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Lengths loaded at startup and on reset
    pub fn timer_defaults(&self) -> TimerDefaults {
        TimerDefaults::new(self.session_length, self.break_length)
    }
}
