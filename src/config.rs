//! Command-line and environment configuration.
//!
//! Every option can also be set through a `BLOCKFALL_*` environment variable;
//! flags win over the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};
use clap::{ArgAction, Parser};
use tracing::Level;

use crate::types::{BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH};

pub const MIN_BOARD_SIDE: u8 = 4;
pub const MAX_BOARD_WIDTH: u8 = 40;
pub const MAX_BOARD_HEIGHT: u8 = 60;

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Config {
    /// Seed for piece selection (defaults to the current time)
    #[arg(long, env = "BLOCKFALL_SEED")]
    pub seed: Option<u32>,

    /// Gravity interval in milliseconds
    #[arg(long = "drop-ms", env = "BLOCKFALL_DROP_MS", default_value_t = BASE_DROP_MS)]
    pub drop_ms: u32,

    /// Board width in cells
    #[arg(long, env = "BLOCKFALL_WIDTH", default_value_t = BOARD_WIDTH)]
    pub width: u8,

    /// Board height in cells
    #[arg(long, env = "BLOCKFALL_HEIGHT", default_value_t = BOARD_HEIGHT)]
    pub height: u8,

    /// Append logs to this file (stdout belongs to the game)
    #[arg(long = "log-file", env = "BLOCKFALL_LOG")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v = DEBUG, -vv = TRACE)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            drop_ms: BASE_DROP_MS,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            log_file: None,
            verbose: 0,
        }
    }
}

impl Config {
    /// Reject settings the game cannot run with.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.drop_ms >= 1, "drop interval must be at least 1ms");
        ensure!(
            (MIN_BOARD_SIDE..=MAX_BOARD_WIDTH).contains(&self.width),
            "board width {} out of range {}..={}",
            self.width,
            MIN_BOARD_SIDE,
            MAX_BOARD_WIDTH
        );
        ensure!(
            (MIN_BOARD_SIDE..=MAX_BOARD_HEIGHT).contains(&self.height),
            "board height {} out of range {}..={}",
            self.height,
            MIN_BOARD_SIDE,
            MAX_BOARD_HEIGHT
        );
        Ok(())
    }

    /// Configured seed, or one derived from the clock.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
