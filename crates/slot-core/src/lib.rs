//! # slot-core: weighted-reel slot machine
//!
//! Draws one symbol per reel from a configured probability table, pays out
//! on matching symbols, and keeps running receipts/payout for a payout
//! percentage.
//!
//! ## Architecture
//!
//! ```text
//! SlotMachine
//!     │
//!     ├── MachineConfig (reels, OddsTable, wager unit value)
//!     ├── SymbolSampler (cumulative interval walk per reel)
//!     ├── paytable::classify / calc_payout (all-match, majority, no win)
//!     ├── ReportSink (log, writer, null)
//!     └── SessionTotals (receipts, payout)
//!           │
//!           v
//!     SpinOutcome
//! ```
//!
//! `SharedSlotMachine` wraps a machine in a lock for multi-threaded callers.

pub mod config;
pub mod error;
pub mod machine;
pub mod odds;
pub mod paytable;
pub mod report;
pub mod sampler;
pub mod shared;
pub mod stats;
pub mod symbols;

pub use config::*;
pub use error::*;
pub use machine::*;
pub use odds::*;
pub use paytable::*;
pub use report::*;
pub use sampler::*;
pub use shared::*;
pub use stats::*;
pub use symbols::*;
