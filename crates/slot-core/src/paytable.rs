//! Payout rules and win calculation
//!
//! Rules, highest precedence first:
//!
//! 1. Every reel shows the same symbol: wager × 2 × payout factor
//! 2. More than half the reels (integer half) share a symbol: wager × payout factor
//! 3. Anything else pays nothing

use serde::{Deserialize, Serialize};

use crate::symbols::Symbol;

/// Which payout rule a set of reel symbols satisfies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoutRule {
    /// All reels identical
    AllMatch(Symbol),
    /// Strict majority, not all
    Majority(Symbol),
    /// No group exceeds half the reels
    NoWin,
}

impl PayoutRule {
    /// Multiple of the wager this rule pays
    pub fn multiplier(self) -> u64 {
        match self {
            PayoutRule::AllMatch(symbol) => 2 * symbol.payout_factor(),
            PayoutRule::Majority(symbol) => symbol.payout_factor(),
            PayoutRule::NoWin => 0,
        }
    }
}

/// Decide which rule the reel symbols satisfy
///
/// Symbols are sorted on a copy so equal values form runs; the first run
/// longer than `len / 2` wins.
pub fn classify(reel_symbols: &[Symbol]) -> PayoutRule {
    let mut sorted = reel_symbols.to_vec();
    sorted.sort_unstable();

    let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
        return PayoutRule::NoWin;
    };
    if first == last {
        return PayoutRule::AllMatch(first);
    }

    let half = sorted.len() / 2;
    sorted
        .chunk_by(|a, b| a == b)
        .find(|run| run.len() > half)
        .map_or(PayoutRule::NoWin, |run| PayoutRule::Majority(run[0]))
}

/// Payout in minor currency units for the given reels and wager value
pub fn calc_payout(reel_symbols: &[Symbol], wager_value: u64) -> u64 {
    wager_value.saturating_mul(classify(reel_symbols).multiplier())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    #[test]
    fn test_all_match_pays_double() {
        assert_eq!(calc_payout(&[Hearts, Hearts, Hearts], 50), 200);
        assert_eq!(calc_payout(&[Bells; 5], 25), 500);
        assert_eq!(classify(&[Spades]), PayoutRule::AllMatch(Spades));
    }

    #[test]
    fn test_majority_pays_factor() {
        assert_eq!(calc_payout(&[Spades, Spades, Bells], 75), 75);
        assert_eq!(calc_payout(&[Flowers, Bells, Flowers], 10), 50);
        assert_eq!(
            classify(&[Fruits, Hearts, Fruits, Spades, Fruits]),
            PayoutRule::Majority(Fruits)
        );
    }

    #[test]
    fn test_no_majority_pays_nothing() {
        assert_eq!(calc_payout(&[Bells, Hearts, Fruits], 100), 0);
        // Two of four is not more than half
        assert_eq!(classify(&[Bells, Bells, Hearts, Hearts]), PayoutRule::NoWin);
        assert_eq!(classify(&[Bells, Bells, Hearts, Fruits]), PayoutRule::NoWin);
    }

    #[test]
    fn test_two_reels() {
        // A majority of two is both reels
        assert_eq!(classify(&[Bells, Hearts]), PayoutRule::NoWin);
        assert_eq!(classify(&[Hearts, Hearts]), PayoutRule::AllMatch(Hearts));
    }

    #[test]
    fn test_input_order_irrelevant() {
        let a = [Hearts, Spades, Hearts, Bells, Hearts];
        let b = [Bells, Hearts, Hearts, Hearts, Spades];
        assert_eq!(classify(&a), classify(&b));
        assert_eq!(classify(&a), PayoutRule::Majority(Hearts));
    }

    #[test]
    fn test_empty_reels() {
        assert_eq!(calc_payout(&[], 100), 0);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(calc_payout(&[Bells, Bells, Bells], u64::MAX), u64::MAX);
    }
}
