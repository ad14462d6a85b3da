//! Per-symbol draw probabilities

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{SlotError, SlotResult};
use crate::symbols::Symbol;

/// Allowed distance between the odds sum and 1.0
pub const ODDS_SUM_TOLERANCE: f64 = 1e-6;

/// Probability of drawing each symbol on a single reel
///
/// Symbols missing from the table have probability zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OddsTable {
    odds: BTreeMap<Symbol, f64>,
}

impl OddsTable {
    /// Create an empty table (every symbol at zero)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, symbol: Symbol, probability: f64) -> Self {
        self.set(symbol, probability);
        self
    }

    /// Set the probability for one symbol
    pub fn set(&mut self, symbol: Symbol, probability: f64) {
        self.odds.insert(symbol, probability);
    }

    /// Probability for a symbol (0.0 when absent)
    pub fn probability(&self, symbol: Symbol) -> f64 {
        self.odds.get(&symbol).copied().unwrap_or(0.0)
    }

    /// Symbols paired with their probability, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
        Symbol::ALL.into_iter().map(|s| (s, self.probability(s)))
    }

    /// Sum of all probabilities
    pub fn total(&self) -> f64 {
        self.odds.values().sum()
    }

    /// Last symbol in declaration order with a positive probability
    pub fn last_drawable(&self) -> Option<Symbol> {
        Symbol::ALL
            .into_iter()
            .rev()
            .find(|&s| self.probability(s) > 0.0)
    }

    /// Check that the table is a probability distribution
    pub fn validate(&self) -> SlotResult<()> {
        for (&symbol, &value) in &self.odds {
            if !value.is_finite() {
                return Err(SlotError::NonFiniteOdds { symbol });
            }
            if value < 0.0 {
                return Err(SlotError::NegativeOdds { symbol, value });
            }
        }

        let sum = self.total();
        if (sum - 1.0).abs() > ODDS_SUM_TOLERANCE {
            return Err(SlotError::OddsSumMismatch { sum });
        }
        Ok(())
    }
}

impl FromIterator<(Symbol, f64)> for OddsTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, f64)>>(iter: I) -> Self {
        Self {
            odds: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_odds() -> OddsTable {
        OddsTable::new()
            .with(Symbol::Hearts, 0.3)
            .with(Symbol::Spades, 0.25)
            .with(Symbol::Bells, 0.05)
            .with(Symbol::Flowers, 0.2)
            .with(Symbol::Fruits, 0.2)
    }

    #[test]
    fn test_valid_table() {
        assert!(quarter_odds().validate().is_ok());
    }

    #[test]
    fn test_missing_symbol_is_zero() {
        let odds = OddsTable::new().with(Symbol::Hearts, 0.5).with(Symbol::Bells, 0.5);
        assert!(odds.validate().is_ok());
        assert_eq!(odds.probability(Symbol::Spades), 0.0);
        assert_eq!(odds.last_drawable(), Some(Symbol::Hearts));
    }

    #[test]
    fn test_rejects_bad_sum() {
        let odds = quarter_odds().with(Symbol::Bells, 0.5);
        assert!(matches!(
            odds.validate(),
            Err(SlotError::OddsSumMismatch { .. })
        ));
        assert!(matches!(
            OddsTable::new().validate(),
            Err(SlotError::OddsSumMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        let odds = OddsTable::new()
            .with(Symbol::Hearts, 1.2)
            .with(Symbol::Spades, -0.2);
        assert!(matches!(
            odds.validate(),
            Err(SlotError::NegativeOdds { symbol: Symbol::Spades, .. })
        ));

        let odds = OddsTable::new().with(Symbol::Hearts, f64::NAN);
        assert!(matches!(
            odds.validate(),
            Err(SlotError::NonFiniteOdds { symbol: Symbol::Hearts })
        ));
    }

    #[test]
    fn test_iter_in_declaration_order() {
        let symbols: Vec<Symbol> = quarter_odds().iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, Symbol::ALL.to_vec());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&OddsTable::new().with(Symbol::Hearts, 1.0)).unwrap();
        assert_eq!(json, r#"{"Hearts":1.0}"#);
    }
}
