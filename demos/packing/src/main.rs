//! packing — relax a ten-room studio programme inside an L-shaped site.
//!
//! Each room clusters toward its named neighbours, pushes overlapping rooms
//! away, and drifts toward the site boundary until the sweep settles.  Scale
//! comment: the sweep is O(rooms²) per iteration, so a few hundred rooms
//! still run interactively; swap PROGRAM_CSV for a file loaded with
//! `load_program_csv` to drive it from a spreadsheet.

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use sp_agent::AgentStoreBuilder;
use sp_core::{RelaxConfig, Vec2};
use sp_geom::Polygon;
use sp_output::{CsvWriter, RelaxOutputObserver, SvgRenderer};
use sp_program::load_program_reader;
use sp_relax::RelaxBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const MAX_SWEEPS:        u32 = 800;
const SNAPSHOT_INTERVAL: u32 = 25;

// ── Room programme ────────────────────────────────────────────────────────────

// One row per room: name,shape,size,aspect,floor,x,y,adjacent_to.
// The entry is pinned at the origin; everything else scatters at build time.
const PROGRAM_CSV: &str = "\
name,shape,size,aspect,floor,x,y,adjacent_to\n\
entry,rect,12,1,0,0,0,\n\
lobby,rect,40,1.6,0,,,entry\n\
gallery,rect,60,2,0,,,lobby\n\
cafe,circle,3,,0,,,lobby\n\
kitchen,rect,20,1,0,,,cafe\n\
studio_a,rect,35,1.4,0,,,gallery\n\
studio_b,rect,35,1.4,0,,,gallery\n\
workshop,rect,50,1.2,0,,,studio_a;studio_b\n\
store,rect,15,,0,,,workshop\n\
wc,circle,1.8,,0,,,lobby\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== packing — space-packing relaxation ===");
    println!("Seed: {SEED}  |  Sweep budget: {MAX_SWEEPS}");
    println!();

    // 1. Load the room programme from the embedded CSV.
    let program = load_program_reader(Cursor::new(PROGRAM_CSV))?;
    println!("Loaded {} rooms", program.rooms.len());

    // 2. Build the agent store.  Rooms without a start position scatter
    //    around the origin under the build seed.
    let (store, _rngs) = AgentStoreBuilder::from_program(program, SEED).build()?;

    // 3. L-shaped site, vertices counter-clockwise, metres.
    let site = Polygon::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(30.0, 0.0),
        Vec2::new(30.0, 18.0),
        Vec2::new(14.0, 18.0),
        Vec2::new(14.0, 30.0),
        Vec2::new(0.0, 30.0),
    ])?;

    // 4. Configure and build the engine.
    let config = RelaxConfig {
        seed:              SEED,
        max_iters:         MAX_SWEEPS,
        snapshot_interval: SNAPSHOT_INTERVAL,
        ..RelaxConfig::default()
    };
    let mut engine = RelaxBuilder::new(config, store)
        .boundary(site.clone())
        .build()?;

    // 5. Set up CSV output.
    fs::create_dir_all("output/packing")?;
    let writer = CsvWriter::new(Path::new("output/packing"))?;
    let mut obs = RelaxOutputObserver::new(writer);

    // 6. Run.
    let t0 = Instant::now();
    let outcome = engine.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    if outcome.converged {
        println!(
            "Converged in {} sweeps ({:.3} s, final displacement {:.4})",
            outcome.iterations,
            elapsed.as_secs_f64(),
            outcome.displacement
        );
    } else {
        println!(
            "Budget exhausted after {} sweeps ({:.3} s, displacement {:.4})",
            outcome.iterations,
            elapsed.as_secs_f64(),
            outcome.displacement
        );
    }
    println!();

    // 8. Final room positions.
    let store = &engine.store;
    println!("{:<10} {:<8} {:>8} {:>8}", "Room", "Shape", "x", "y");
    println!("{}", "-".repeat(38));
    for i in 0..store.count {
        println!(
            "{:<10} {:<8} {:>8.2} {:>8.2}",
            store.names[i],
            store.footprints[i].kind(),
            store.positions[i].x,
            store.positions[i].y,
        );
    }
    println!();

    // 9. Render the settled layout.
    let svg = SvgRenderer::default().render_layout(store, Some(&site));
    fs::write("output/packing/layout.svg", svg)?;
    println!("Output in output/packing/: layout.csv, trace.csv, snapshots.csv, layout.svg");

    Ok(())
}
