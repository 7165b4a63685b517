//! Command-line configuration for the terminal player.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use crate::types::{PieceKind, DEFAULT_TICK_MS};

/// Terminal falling-block puzzle game.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args {
    /// Seed for the piece sequence (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Gravity interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Kind of the first piece (I, O, S, Z, J, L, T); random when omitted
    #[arg(long)]
    pub first_piece: Option<PieceKind>,

    /// Write a log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

/// Settings the driver runs with
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub tick: Duration,
    pub first_piece: Option<PieceKind>,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            seed: args.seed,
            tick: Duration::from_millis(args.tick_ms),
            first_piece: args.first_piece,
            log_file: args.log_file,
            log_level: args.log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            first_piece: None,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Parse from the process arguments
    pub fn from_env() -> Self {
        Args::parse().into()
    }

    /// Parse from an explicit argument list (first item is the binary name)
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Args::try_parse_from(args).map(Into::into)
    }
}
