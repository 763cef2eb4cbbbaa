//! CSV programme loader.
//!
//! # CSV format
//!
//! One row per room, in placement order.
//!
//! ```csv
//! name,shape,size,aspect,floor,x,y,adjacent_to
//! entry,rect,12,,0,0,0,lobby
//! lobby,rect,40,1.2,0,,,corridor;entry
//! office_a,circle,3.5,,1,,,
//! ```
//!
//! | Column        | Meaning                                                |
//! |---------------|--------------------------------------------------------|
//! | `shape`       | `circle` or `rect`                                     |
//! | `size`        | radius for circles, target area for rectangles        |
//! | `aspect`      | rect width/height; blank = sample one per room        |
//! | `floor`       | storey index; blank = ground floor                    |
//! | `x`, `y`      | start position; both blank = scatter at build time    |
//! | `adjacent_to` | `;`-separated room names this room clusters toward    |
//!
//! If no row names any adjacency, the programme relaxes with ring adjacency
//! over input order.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sp_core::{FloorId, Vec2};

use crate::ProgramError;
use crate::spec::{ProgramSpec, RoomShape, RoomSpec};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ProgramRecord {
    name:        String,
    shape:       String,
    size:        f64,
    aspect:      Option<f64>,
    floor:       Option<u16>,
    x:           Option<f64>,
    y:           Option<f64>,
    adjacent_to: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a room programme from a CSV file.
pub fn load_program_csv(path: &Path) -> Result<ProgramSpec, ProgramError> {
    let file = std::fs::File::open(path).map_err(ProgramError::Io)?;
    load_program_reader(file)
}

/// Like [`load_program_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a programme
/// in a binary.
pub fn load_program_reader<R: Read>(reader: R) -> Result<ProgramSpec, ProgramError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rooms: Vec<RoomSpec> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for result in csv_reader.deserialize::<ProgramRecord>() {
        let row = result.map_err(|e| ProgramError::Parse(e.to_string()))?;
        let name = row.name.trim().to_owned();
        if name.is_empty() {
            return Err(ProgramError::Parse("room name must not be empty".into()));
        }
        if !seen.insert(name.clone()) {
            return Err(ProgramError::DuplicateRoom(name));
        }

        let shape = parse_shape(&name, &row)?;
        let position = parse_position(&name, row.x, row.y)?;
        let adjacent_to = row
            .adjacent_to
            .as_deref()
            .unwrap_or("")
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();

        rooms.push(RoomSpec {
            name,
            shape,
            floor: FloorId(row.floor.unwrap_or(0)),
            position,
            adjacent_to,
        });
    }

    Ok(ProgramSpec::new(rooms))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_shape(name: &str, row: &ProgramRecord) -> Result<RoomShape, ProgramError> {
    if !(row.size.is_finite() && row.size > 0.0) {
        return Err(ProgramError::Parse(format!(
            "room {name:?}: size must be positive, got {}",
            row.size
        )));
    }
    if let Some(aspect) = row.aspect {
        if !(aspect.is_finite() && aspect > 0.0) {
            return Err(ProgramError::Parse(format!(
                "room {name:?}: aspect must be positive, got {aspect}"
            )));
        }
    }
    match row.shape.trim() {
        "circle" => Ok(RoomShape::Circle { radius: row.size }),
        "rect" => Ok(RoomShape::RectArea { area: row.size, aspect: row.aspect }),
        other => Err(ProgramError::Parse(format!(
            "room {name:?}: unknown shape {other:?}: expected \"circle\" or \"rect\""
        ))),
    }
}

fn parse_position(
    name: &str,
    x: Option<f64>,
    y: Option<f64>,
) -> Result<Option<Vec2>, ProgramError> {
    match (x, y) {
        (Some(x), Some(y)) => Ok(Some(Vec2::new(x, y))),
        (None, None) => Ok(None),
        _ => Err(ProgramError::Parse(format!(
            "room {name:?}: x and y must be given together or both left blank"
        ))),
    }
}
