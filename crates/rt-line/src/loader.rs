//! CSV line loader.
//!
//! # CSV format
//!
//! One row per station or terminus circuit.  Station rows must appear in
//! travel order for their direction; `name` is empty on terminus rows.
//!
//! ```csv
//! direction,kind,name,circuit
//! fwd,station,Harbor,10
//! fwd,station,Market,40
//! fwd,station,Summit,98
//! fwd,last,,100
//! fwd,opp,,250
//! rev,station,Summit,200
//! rev,station,Market,230
//! rev,station,Harbor,262
//! rev,last,,265
//! rev,opp,,100
//! ```
//!
//! | `kind`    | Meaning                                         |
//! |-----------|-------------------------------------------------|
//! | `station` | Next station in the direction's ordering        |
//! | `last`    | Last circuit of the terminus approach zone      |
//! | `opp`     | Opposite-track circuit at the same terminus     |
//!
//! The dwell cap is not part of the file; set it on the returned builder.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rt_core::{CircuitId, Direction, RtError, RtResult};

use crate::TrainLineBuilder;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LineRecord {
    direction: String,
    kind:      String,
    #[serde(default)]
    name:      String,
    circuit:   u16,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a line description from a CSV file into a [`TrainLineBuilder`].
///
/// Returns the builder rather than a finished line so callers can still set
/// the dwell cap before [`TrainLineBuilder::build`] validates everything.
pub fn load_line_csv(path: &Path) -> RtResult<TrainLineBuilder> {
    let file = std::fs::File::open(path)?;
    load_line_reader(file)
}

/// Like [`load_line_csv`] but accepts any `Read` source.
pub fn load_line_reader<R: Read>(reader: R) -> RtResult<TrainLineBuilder> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder    = TrainLineBuilder::new();

    for result in csv_reader.deserialize::<LineRecord>() {
        let row     = result.map_err(|e| RtError::Parse(e.to_string()))?;
        let dir     = parse_direction(&row.direction)?;
        let circuit = CircuitId(row.circuit);

        match row.kind.trim() {
            "station" => {
                builder.add_station(dir, row.name.trim(), circuit);
            }
            "last" => {
                builder.set_last_cid(dir, circuit);
            }
            "opp" => {
                builder.set_opp_cid(dir, circuit);
            }
            other => {
                return Err(RtError::Parse(format!(
                    "invalid kind {other:?}: expected \"station\", \"last\", or \"opp\""
                )));
            }
        }
    }

    Ok(builder)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_direction(s: &str) -> RtResult<Direction> {
    match s.trim() {
        "fwd" => Ok(Direction::Forward),
        "rev" => Ok(Direction::Reverse),
        other => Err(RtError::Parse(format!(
            "invalid direction {other:?}: expected \"fwd\" or \"rev\""
        ))),
    }
}
