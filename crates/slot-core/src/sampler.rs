//! Weighted symbol draw

use rand::Rng;

use crate::error::{SlotError, SlotResult};
use crate::odds::OddsTable;
use crate::symbols::Symbol;

/// Draws symbols according to a validated odds table
///
/// Each symbol owns the half-open interval `[sum, sum + p)` of the unit
/// range, laid out in declaration order. A draw that lands past the last
/// boundary (floating-point rounding) clamps to the last drawable symbol.
#[derive(Debug, Clone)]
pub struct SymbolSampler {
    /// Drawable symbols with their probability, declaration order
    weights: Vec<(Symbol, f64)>,
    /// Clamp target for draws beyond the final boundary
    fallback: Symbol,
}

impl SymbolSampler {
    /// Build a sampler, rejecting tables that are not distributions
    pub fn new(odds: &OddsTable) -> SlotResult<Self> {
        odds.validate()?;
        let fallback = odds
            .last_drawable()
            .ok_or(SlotError::OddsSumMismatch { sum: odds.total() })?;
        let weights = odds.iter().filter(|&(_, p)| p > 0.0).collect();
        Ok(Self { weights, fallback })
    }

    /// Map a uniform value in `[0, 1)` to a symbol
    pub fn symbol_at(&self, u: f64) -> Symbol {
        let mut sum = 0.0;
        for &(symbol, p) in &self.weights {
            if u >= sum && u < sum + p {
                return symbol;
            }
            sum += p;
        }
        self.fallback
    }

    /// Draw one symbol
    pub fn draw_symbol<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        self.symbol_at(rng.random::<f64>())
    }

    /// Draw one independent symbol per reel
    pub fn draw_reels<R: Rng + ?Sized>(&self, reels: usize, rng: &mut R) -> Vec<Symbol> {
        (0..reels).map(|_| self.draw_symbol(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn two_way() -> SymbolSampler {
        let odds = OddsTable::new()
            .with(Symbol::Flowers, 0.25)
            .with(Symbol::Hearts, 0.75);
        SymbolSampler::new(&odds).unwrap()
    }

    #[test]
    fn test_interval_walk() {
        let sampler = two_way();
        assert_eq!(sampler.symbol_at(0.0), Symbol::Flowers);
        assert_eq!(sampler.symbol_at(0.2499), Symbol::Flowers);
        assert_eq!(sampler.symbol_at(0.25), Symbol::Hearts);
        assert_eq!(sampler.symbol_at(0.9999), Symbol::Hearts);
    }

    #[test]
    fn test_boundary_clamps_to_last_drawable() {
        // Sums to 1.0 within tolerance but leaves a gap below 1.0
        let odds = OddsTable::new()
            .with(Symbol::Bells, 0.5)
            .with(Symbol::Fruits, 0.4999995);
        let sampler = SymbolSampler::new(&odds).unwrap();
        assert_eq!(sampler.symbol_at(0.9999999), Symbol::Fruits);
        assert_eq!(sampler.symbol_at(1.0), Symbol::Fruits);
    }

    #[test]
    fn test_rejects_invalid_table() {
        assert!(SymbolSampler::new(&OddsTable::new()).is_err());
    }

    #[test]
    fn test_zero_odds_never_drawn() {
        let sampler = two_way();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let draws = sampler.draw_reels(5_000, &mut rng);
        assert!(draws.iter().all(|s| matches!(s, Symbol::Flowers | Symbol::Hearts)));
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let sampler = two_way();
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(sampler.draw_reels(32, &mut a), sampler.draw_reels(32, &mut b));
    }
}
