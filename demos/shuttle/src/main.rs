//! shuttle — a single train running end to end on a three-station line.
//!
//! The train moves forward one circuit per tick with some probability, and
//! the occupancy sensor occasionally reports the circuit behind it.  The
//! monitor confirms the arrival at the terminus, holds the train for the
//! dwell period, evicts it, and the next train is dispatched from the first
//! station.
//!
//! Run with `RUST_LOG=debug` to see every deferred decision.

use std::io::Cursor;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rt_core::{CircuitId, DetectorConfig, Direction, LineId, RtResult, Tick};
use rt_detect::{EndOfLineDetector, LineMonitor, MonitorObserver};
use rt_line::{LineTopology, TrainLine, load_line_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const TOTAL_TICKS:       u64 = 600;
const DWELL_CYCLES:      u8  = 8;
const MOVE_PROBABILITY:  f64 = 0.7;
const SENSOR_LAG_CHANCE: f64 = 0.1;

const FWD: Direction = Direction::Forward;

const LINE_CSV: &str = "\
direction,kind,name,circuit\n\
fwd,station,Harbor,10\n\
fwd,station,Market,40\n\
fwd,station,Summit,98\n\
fwd,last,,100\n\
fwd,opp,,250\n\
rev,station,Summit,200\n\
rev,station,Market,230\n\
rev,station,Harbor,262\n\
rev,last,,265\n\
rev,opp,,100\n";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ShuttleLog {
    arrivals:  u32,
    evictions: u32,
    evicted:   bool,
}

impl ShuttleLog {
    fn take_eviction(&mut self) -> bool {
        std::mem::take(&mut self.evicted)
    }
}

impl MonitorObserver for ShuttleLog {
    fn on_arrival(&mut self, tick: Tick, line: LineId, dir: Direction) {
        self.arrivals += 1;
        info!(%tick, %line, %dir, "arrived at terminus");
    }

    fn on_eviction(&mut self, tick: Tick, line: LineId, dir: Direction) {
        self.evictions += 1;
        self.evicted = true;
        info!(%tick, %line, %dir, "turnaround complete");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut builder = load_line_reader(Cursor::new(LINE_CSV)).context("loading line CSV")?;
    builder.dwell_cycles(DWELL_CYCLES);
    let line = builder.build()?;

    let depot = line
        .stations(FWD)
        .first()
        .map(|s| s.circuit)
        .context("line has no forward stations")?;
    let last = line.last_cid(FWD).context("line has no forward terminus")?;

    let mut monitor  = LineMonitor::new(EndOfLineDetector::new(DetectorConfig::default()));
    let id           = monitor.add_line(line)?;
    let mut rng      = SmallRng::seed_from_u64(SEED);
    let mut log      = ShuttleLog::default();
    let mut train    = None::<CircuitId>;
    let started      = Instant::now();

    for _ in 0..TOTAL_TICKS {
        let line = monitor.line_mut(id).context("line not registered")?;

        if train.is_none() && line.is_empty(FWD) {
            line.dispatch(FWD);
            train = Some(depot);
        }
        if let Some(pos) = train.as_mut() {
            if *pos < last && rng.gen_bool(MOVE_PROBABILITY) {
                *pos = CircuitId(pos.0 + 1);
            }
            follow_stations(line, *pos)?;
        }

        let positions: Vec<CircuitId> = train.iter().map(|&pos| sense(pos, &mut rng)).collect();
        monitor.tick(&positions, &mut log)?;

        if log.take_eviction() {
            train = None;
        }
    }

    println!(
        "{} ticks: {} arrivals, {} turnarounds ({:.2?})",
        TOTAL_TICKS,
        log.arrivals,
        log.evictions,
        started.elapsed()
    );
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Move the leading slot past every intermediate station the train has
/// reached.  The terminus itself is left to the detector.
fn follow_stations(line: &mut TrainLine, pos: CircuitId) -> RtResult<()> {
    let Some(slot) = line.leading_slot(FWD) else {
        return Ok(());
    };
    let last_station = line.total_num_stations().saturating_sub(1);

    while let Some(target) = line.at(slot, FWD) {
        if target.index() >= last_station {
            break;
        }
        match line.station_circuit(target, FWD) {
            Some(circuit) if pos >= circuit => {
                line.arrived(slot, FWD)?;
                line.advance(slot, FWD)?;
            }
            _ => break,
        }
    }
    Ok(())
}

/// Occupancy reading for a train at `pos`; the sensor sometimes still
/// reports the circuit just vacated.
fn sense(pos: CircuitId, rng: &mut SmallRng) -> CircuitId {
    if rng.gen_bool(SENSOR_LAG_CHANCE) {
        pos.saturating_sub(1)
    } else {
        pos
    }
}
