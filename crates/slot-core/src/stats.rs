//! Session totals

use serde::{Deserialize, Serialize};

use crate::error::{SlotError, SlotResult};

/// Cumulative receipts and payout, in minor currency units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTotals {
    pub spins: u64,
    pub receipts: u64,
    pub payout: u64,
}

impl SessionTotals {
    /// Payout as a percentage of receipts (0 until both are non-zero)
    pub fn payout_percent(&self) -> f64 {
        if self.payout != 0 && self.receipts != 0 {
            100.0 * self.payout as f64 / self.receipts as f64
        } else {
            0.0
        }
    }

    /// Totals after one more spin, or `TotalsOverflow`
    pub fn with_spin(&self, wager_value: u64, payout: u64) -> SlotResult<Self> {
        Ok(Self {
            spins: self.spins + 1,
            receipts: self
                .receipts
                .checked_add(wager_value)
                .ok_or(SlotError::TotalsOverflow)?,
            payout: self
                .payout
                .checked_add(payout)
                .ok_or(SlotError::TotalsOverflow)?,
        })
    }

    /// Zero everything
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.spins == 0
    }
}
