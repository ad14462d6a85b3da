//! Spin outcomes and report sinks

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::paytable::PayoutRule;
use crate::symbols::{Symbol, display_names};

/// Result of one non-zero spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Drawn symbols, one per reel, in draw order
    pub symbols: Vec<Symbol>,
    /// Wager value in minor units
    pub wager_value: u64,
    /// Rule that decided the payout
    pub rule: PayoutRule,
    /// Payout in minor units
    pub payout: u64,
}

impl SpinOutcome {
    /// Check if the spin paid anything
    pub fn is_win(&self) -> bool {
        self.payout > 0
    }
}

/// Renders the two-line report: symbol names, then `payout = $X.XX`
impl fmt::Display for SpinOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", display_names(&self.symbols))?;
        write!(f, "payout = {}", format_currency(self.payout))
    }
}

/// Format minor units as dollars with two fractional digits
pub fn format_currency(minor_units: u64) -> String {
    format!("${}.{:02}", minor_units / 100, minor_units % 100)
}

// ═══════════════════════════════════════════════════════════════════════════════
// SINKS
// ═══════════════════════════════════════════════════════════════════════════════

/// Destination for per-spin reports
pub trait ReportSink: Send {
    fn emit(&mut self, outcome: &SpinOutcome) -> io::Result<()>;
}

/// Reports through the `log` facade at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn emit(&mut self, outcome: &SpinOutcome) -> io::Result<()> {
        log::info!("{outcome}");
        Ok(())
    }
}

/// Writes report text to any writer
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ReportSink for WriterSink<W> {
    fn emit(&mut self, outcome: &SpinOutcome) -> io::Result<()> {
        writeln!(self.writer, "{outcome}")?;
        self.writer.flush()
    }
}

/// Discards reports
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn emit(&mut self, _outcome: &SpinOutcome) -> io::Result<()> {
        Ok(())
    }
}
