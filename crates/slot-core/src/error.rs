//! Error types for the slot machine core

use thiserror::Error;

use crate::symbols::Symbol;

/// Slot machine error type
#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid reel count: {0} (need at least one reel)")]
    InvalidReelCount(usize),

    #[error("Invalid wager unit value: {0} (need at least one minor unit)")]
    InvalidWagerUnit(u32),

    #[error("Negative odds for {symbol}: {value}")]
    NegativeOdds { symbol: Symbol, value: f64 },

    #[error("Non-finite odds for {symbol}")]
    NonFiniteOdds { symbol: Symbol },

    #[error("Odds must sum to 1.0, got {sum}")]
    OddsSumMismatch { sum: f64 },

    #[error("Session totals overflow")]
    TotalsOverflow,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report sink failed: {0}")]
    Report(std::io::Error),
}

/// Result type alias
pub type SlotResult<T> = Result<T, SlotError>;
