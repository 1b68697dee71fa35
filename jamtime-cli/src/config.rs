// Command-line and environment configuration

use clap::{Parser, Subcommand, ValueEnum};
use jamtime_core::DateZone;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "jamtime")]
#[command(version, about = "Clock and converter for JAM Common Era timeslots", long_about = None)]
pub struct Cli {
    /// Time zone for rendered dates and for date strings without an offset
    #[arg(long, value_enum, default_value_t = Zone::Local, env = "JAMTIME_ZONE", global = true)]
    pub zone: Zone,

    /// Live clock refresh interval in milliseconds
    #[arg(
        long,
        default_value_t = 60,
        env = "JAMTIME_REFRESH_MS",
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub refresh_ms: u64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn", env = "JAMTIME_LOG", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Interactive terminal (default)
    Repl,
    /// Live clock, until Ctrl-C
    Clock,
    /// Run a single command line and exit
    Exec {
        /// The command line, e.g. `slot -1` or `time 2025-01-01 12:00:00`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Utc,
}

impl From<Zone> for DateZone {
    fn from(zone: Zone) -> Self {
        match zone {
            Zone::Local => DateZone::Local,
            Zone::Utc => DateZone::Utc,
        }
    }
}

/// Settings the host runs with, resolved from [`Cli`].
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub zone: DateZone,
    pub refresh: Duration,
    pub log_level: String,
    pub mode: Mode,
}

impl From<Cli> for HostConfig {
    fn from(cli: Cli) -> Self {
        HostConfig {
            zone: cli.zone.into(),
            refresh: Duration::from_millis(cli.refresh_ms),
            log_level: cli.log_level,
            mode: cli.command.unwrap_or(Mode::Repl),
        }
    }
}
