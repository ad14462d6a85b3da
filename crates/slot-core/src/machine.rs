//! Slot machine: spin orchestration and session tracking

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::MachineConfig;
use crate::error::{SlotError, SlotResult};
use crate::paytable::classify;
use crate::report::{LogSink, ReportSink, SpinOutcome};
use crate::sampler::SymbolSampler;
use crate::stats::SessionTotals;

/// A multi-reel slot machine
///
/// Owns its random source, its report sink and its session totals.
/// Configuration is validated at construction and fixed afterwards.
pub struct SlotMachine<R: Rng = ChaCha8Rng> {
    /// Configuration
    config: MachineConfig,
    /// Weighted draw built from the config odds
    sampler: SymbolSampler,
    /// Random number generator
    rng: R,
    /// Where spin reports go
    sink: Box<dyn ReportSink>,
    /// Current session totals
    totals: SessionTotals,
}

impl SlotMachine<ChaCha8Rng> {
    /// Create a machine seeded from OS entropy
    pub fn new(config: MachineConfig) -> SlotResult<Self> {
        Self::with_rng(config, ChaCha8Rng::from_os_rng())
    }

    /// Create a machine with a fixed seed for reproducible sessions
    pub fn seeded(config: MachineConfig, seed: u64) -> SlotResult<Self> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> SlotMachine<R> {
    /// Create a machine with an injected random source
    pub fn with_rng(config: MachineConfig, rng: R) -> SlotResult<Self> {
        config.validate()?;
        let sampler = SymbolSampler::new(&config.odds)?;
        log::debug!(
            "slot machine ready: {} reels, wager unit {}",
            config.reels,
            config.wager_unit_value
        );

        Ok(Self {
            config,
            sampler,
            rng,
            sink: Box::new(LogSink),
            totals: SessionTotals::default(),
        })
    }

    /// Replace the report sink
    pub fn with_sink(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Get current config
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Get session totals
    pub fn totals(&self) -> SessionTotals {
        self.totals
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SPIN EXECUTION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Pull the lever with `num_wager_units` tokens inserted
    ///
    /// Zero units is a no-op and returns `Ok(None)`. Otherwise the reels are
    /// drawn, the payout evaluated and reported, and the totals updated.
    /// Totals are only touched once the report has been emitted, so a failed
    /// spin leaves them as they were.
    pub fn spin(&mut self, num_wager_units: u32) -> SlotResult<Option<SpinOutcome>> {
        if num_wager_units == 0 {
            return Ok(None);
        }

        // u32 × u32 always fits in u64
        let wager_value = u64::from(num_wager_units) * u64::from(self.config.wager_unit_value);

        let symbols = self.sampler.draw_reels(self.config.reels, &mut self.rng);
        let rule = classify(&symbols);
        let payout = wager_value.saturating_mul(rule.multiplier());

        let outcome = SpinOutcome {
            symbols,
            wager_value,
            rule,
            payout,
        };
        log::debug!("spin {:?} wager={} payout={}", outcome.rule, wager_value, payout);

        let totals = self.totals.with_spin(wager_value, payout)?;
        self.sink.emit(&outcome).map_err(SlotError::Report)?;
        self.totals = totals;
        Ok(Some(outcome))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // STATISTICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Payout to date as a percentage of receipts
    pub fn payout_percent(&self) -> f64 {
        self.totals.payout_percent()
    }

    /// Clear receipts and payout; config, generator and sink are kept
    pub fn reset(&mut self) {
        if !self.totals.is_empty() {
            log::info!(
                "resetting session after {} spins ({:.2}% paid out)",
                self.totals.spins,
                self.totals.payout_percent()
            );
        }
        self.totals.reset();
    }
}

impl<R: Rng> std::fmt::Debug for SlotMachine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotMachine")
            .field("config", &self.config)
            .field("totals", &self.totals)
            .finish_non_exhaustive()
    }
}
