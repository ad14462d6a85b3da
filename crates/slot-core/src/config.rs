//! Machine configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SlotError, SlotResult};
use crate::odds::OddsTable;
use crate::symbols::Symbol;

/// Fixed machine parameters, immutable once a machine is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Number of reels drawn per spin
    pub reels: usize,
    /// Per-reel symbol probabilities
    pub odds: OddsTable,
    /// Value of one wager unit in minor currency units (cents)
    pub wager_unit_value: u32,
}

impl MachineConfig {
    /// Create a config (not yet validated)
    pub fn new(reels: usize, odds: OddsTable, wager_unit_value: u32) -> Self {
        Self {
            reels,
            odds,
            wager_unit_value,
        }
    }

    /// Classic three-reel quarter machine
    pub fn quarter_machine() -> Self {
        let odds = OddsTable::new()
            .with(Symbol::Hearts, 0.3)
            .with(Symbol::Spades, 0.25)
            .with(Symbol::Bells, 0.05)
            .with(Symbol::Flowers, 0.2)
            .with(Symbol::Fruits, 0.2);
        Self::new(3, odds, 25)
    }

    /// Check reel count, wager unit and odds
    pub fn validate(&self) -> SlotResult<()> {
        if self.reels == 0 {
            return Err(SlotError::InvalidReelCount(self.reels));
        }
        if self.wager_unit_value == 0 {
            return Err(SlotError::InvalidWagerUnit(self.wager_unit_value));
        }
        self.odds.validate()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LOADING
    // ═══════════════════════════════════════════════════════════════════════════

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> SlotResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SlotError::Config(format!("Invalid JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML config
    pub fn from_yaml_str(yaml: &str) -> SlotResult<Self> {
        let config: Self =
            serde_yml::from_str(yaml).map_err(|e| SlotError::Config(format!("Invalid YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; `.yaml`/`.yml` parse as YAML, anything else as JSON
    pub fn from_path(path: impl AsRef<Path>) -> SlotResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        log::debug!("loading machine config from {}", path.display());
        if is_yaml {
            Self::from_yaml_str(&text)
        } else {
            Self::from_json_str(&text)
        }
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> SlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SlotError::Config(e.to_string()))
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::quarter_machine()
    }
}
