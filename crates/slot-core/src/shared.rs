//! Thread-safe machine handle

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::SlotResult;
use crate::machine::SlotMachine;
use crate::report::SpinOutcome;
use crate::stats::SessionTotals;

/// Cloneable handle to one machine shared across threads
///
/// A single lock covers the generator and the session totals, so each spin
/// runs draw → evaluate → report → accumulate without interleaving.
pub struct SharedSlotMachine<R: Rng = ChaCha8Rng> {
    inner: Arc<Mutex<SlotMachine<R>>>,
}

impl<R: Rng> SharedSlotMachine<R> {
    pub fn new(machine: SlotMachine<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    /// Lock the machine for a sequence of operations
    pub fn lock(&self) -> MutexGuard<'_, SlotMachine<R>> {
        self.inner.lock()
    }

    pub fn spin(&self, num_wager_units: u32) -> SlotResult<Option<SpinOutcome>> {
        self.inner.lock().spin(num_wager_units)
    }

    pub fn payout_percent(&self) -> f64 {
        self.inner.lock().payout_percent()
    }

    pub fn totals(&self) -> SessionTotals {
        self.inner.lock().totals()
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }
}

impl<R: Rng> Clone for SharedSlotMachine<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Rng> From<SlotMachine<R>> for SharedSlotMachine<R> {
    fn from(machine: SlotMachine<R>) -> Self {
        Self::new(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MachineConfig;
    use crate::report::NullSink;
    use std::thread;

    #[test]
    fn test_concurrent_spins() {
        let machine = SlotMachine::seeded(MachineConfig::quarter_machine(), 77)
            .unwrap()
            .with_sink(NullSink);
        let shared = SharedSlotMachine::new(machine);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let mut paid = 0u64;
                    for _ in 0..250 {
                        paid += shared.spin(2).unwrap().unwrap().payout;
                    }
                    paid
                })
            })
            .collect();

        let paid: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        let totals = shared.totals();
        assert_eq!(totals.spins, 1000);
        assert_eq!(totals.receipts, 1000 * 50);
        assert_eq!(totals.payout, paid);
    }

    #[test]
    fn test_reset_through_handle() {
        let machine = SlotMachine::seeded(MachineConfig::quarter_machine(), 3)
            .unwrap()
            .with_sink(NullSink);
        let shared = SharedSlotMachine::from(machine);
        shared.spin(1).unwrap();
        assert_eq!(shared.lock().totals().spins, 1);

        shared.reset();
        assert_eq!(shared.totals(), SessionTotals::default());
        assert_eq!(shared.payout_percent(), 0.0);
    }
}
