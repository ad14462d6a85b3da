//! Slot machine demo
//!
//! Usage:
//!   slot-demo                       - quarter machine, scripted session
//!   slot-demo --seed 7 2 2 5        - seeded run with custom wagers
//!   slot-demo --config machine.yaml - load machine parameters from a file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use slot_core::{MachineConfig, SessionTotals, SlotMachine, SpinOutcome, WriterSink};

#[derive(Parser)]
#[command(name = "slot-demo", about = "Run a scripted slot machine session")]
struct Cli {
    /// Machine config file (JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the reel count
    #[arg(long)]
    reels: Option<usize>,

    /// Override the wager unit value, in cents
    #[arg(long)]
    wager_unit: Option<u32>,

    /// Wager units per pull; omit for the built-in two-segment script
    wagers: Vec<u32>,
}

impl Cli {
    fn machine_config(&self) -> Result<MachineConfig> {
        let mut config = match &self.config {
            Some(path) => MachineConfig::from_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => MachineConfig::quarter_machine(),
        };
        if let Some(reels) = self.reels {
            config.reels = reels;
        }
        if let Some(unit) = self.wager_unit {
            config.wager_unit_value = unit;
        }
        Ok(config)
    }

    /// Wager segments; the machine is reset between segments
    fn script(&self) -> Vec<Vec<u32>> {
        if self.wagers.is_empty() {
            default_script()
        } else {
            vec![self.wagers.clone()]
        }
    }
}

/// Two-segment session: `2 1 3`, reset, `4 1 1 2`
fn default_script() -> Vec<Vec<u32>> {
    vec![vec![2, 1, 3], vec![4, 1, 1, 2]]
}

/// Spins and closing totals of one script segment
#[derive(Debug)]
struct SegmentReport {
    outcomes: Vec<SpinOutcome>,
    wins: usize,
    totals: SessionTotals,
    payout_percent: f64,
}

impl SegmentReport {
    fn summary_line(&self) -> String {
        format!("Pay out percent to user = {:?}", self.payout_percent)
    }
}

/// Play each segment on `machine`, resetting it before every segment after the first
///
/// `on_segment` sees each report as soon as its segment finishes.
fn run_script(
    machine: &mut SlotMachine,
    script: &[Vec<u32>],
    mut on_segment: impl FnMut(usize, &SegmentReport),
) -> Result<Vec<SegmentReport>> {
    let mut reports = Vec::with_capacity(script.len());
    for (i, segment) in script.iter().enumerate() {
        if i > 0 {
            machine.reset();
        }
        let mut outcomes = Vec::with_capacity(segment.len());
        for &units in segment {
            if let Some(outcome) = machine.spin(units)? {
                outcomes.push(outcome);
            }
        }
        let report = SegmentReport {
            wins: outcomes.iter().filter(|o| o.is_win()).count(),
            outcomes,
            totals: machine.totals(),
            payout_percent: machine.payout_percent(),
        };
        on_segment(i, &report);
        reports.push(report);
    }
    Ok(reports)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = cli.machine_config()?;
    let machine = match cli.seed {
        Some(seed) => SlotMachine::seeded(config, seed),
        None => SlotMachine::new(config),
    }
    .context("invalid machine config")?;
    let mut machine = machine.with_sink(WriterSink::stdout());
    log::info!("Starting session: {:?}", machine.config());

    run_script(&mut machine, &cli.script(), |i, report| {
        log::debug!(
            "segment {}: {} of {} spins paid",
            i + 1,
            report.wins,
            report.outcomes.len()
        );
        println!("{}", report.summary_line());
    })?;

    Ok(())
}
