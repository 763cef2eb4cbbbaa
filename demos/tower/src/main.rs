//! tower — relax three storeys in parallel, one rayon task per floor.
//!
//! No room names an adjacency, so the store builder falls back to a ring per
//! floor and each storey settles as an independent cluster.  Stairs are
//! derived afterwards from the closest room pair of consecutive storeys.

use std::fs;
use std::time::Instant;

use anyhow::Result;

use sp_agent::AgentStoreBuilder;
use sp_core::{FloorId, RelaxConfig, Vec2};
use sp_output::SvgRenderer;
use sp_program::{RoomShape, RoomSpec};
use sp_relax::{floor_summaries, relax_floors, stairs};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64 = 7;
const MAX_SWEEPS: u32 = 500;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rect(name: &str, area: f64, aspect: f64) -> RoomSpec {
    RoomSpec::new(name, RoomShape::RectArea { area, aspect: Some(aspect) })
}

fn circle(name: &str, radius: f64) -> RoomSpec {
    RoomSpec::new(name, RoomShape::Circle { radius })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== tower — per-floor parallel relaxation ===");
    println!("Floors: 3  |  Seed: {SEED}  |  Sweep budget per floor: {MAX_SWEEPS}");
    println!();

    // 1. Build the tower programme with the fluent API.  The lobby anchors
    //    the ground floor; everything else scatters at build time.
    let (mut store, _rngs) = AgentStoreBuilder::new(SEED)
        .room(rect("lobby", 45.0, 1.5).at(Vec2::ZERO))
        .room(circle("cafe", 2.5))
        .room(rect("mail", 8.0, 1.0))
        .room(rect("plant", 12.0, 1.0))
        .room(rect("office_a", 30.0, 1.2).on_floor(FloorId(1)))
        .room(rect("office_b", 30.0, 1.2).on_floor(FloorId(1)))
        .room(rect("meeting", 18.0, 1.0).on_floor(FloorId(1)))
        .room(circle("wc", 1.5).on_floor(FloorId(1)))
        .room(rect("studio", 40.0, 1.6).on_floor(FloorId(2)))
        .room(rect("terrace", 25.0, 1.0).on_floor(FloorId(2)))
        .room(circle("pantry", 2.0).on_floor(FloorId(2)))
        .build()?;
    println!("Built {} rooms across {} floors", store.count, store.floor_ids().len());

    // 2. Relax every floor in parallel.
    let config = RelaxConfig { seed: SEED, max_iters: MAX_SWEEPS, ..RelaxConfig::default() };
    let t0 = Instant::now();
    let outcomes = relax_floors(&config, &mut store, None);
    let elapsed = t0.elapsed();
    println!("Relaxed in {:.3} s", elapsed.as_secs_f64());
    for result in &outcomes {
        let o = &result.outcome;
        println!(
            "  floor {}: {} sweeps, displacement {:.4}{}",
            result.floor.0,
            o.iterations,
            o.displacement,
            if o.converged { "" } else { " (budget exhausted)" },
        );
    }
    println!();

    // 3. Per-floor extents.
    println!("{:<7} {:>6} {:>10} {:>10}", "Floor", "Rooms", "Width", "Depth");
    println!("{}", "-".repeat(36));
    for summary in floor_summaries(&store) {
        println!(
            "{:<7} {:>6} {:>10.2} {:>10.2}",
            summary.floor.0,
            summary.rooms,
            summary.bbox.width(),
            summary.bbox.height(),
        );
    }
    println!();

    // 4. Stairs between consecutive storeys.
    println!("Stairs:");
    for stair in stairs(&store) {
        println!(
            "  {} (floor {}) -> {} (floor {}) at ({:.2}, {:.2})",
            store.names[stair.lower.index()],
            stair.lower_floor.0,
            store.names[stair.upper.index()],
            stair.upper_floor.0,
            stair.position.x,
            stair.position.y,
        );
    }
    println!();

    // 5. Render the storeys as stacked bands.
    fs::create_dir_all("output/tower")?;
    let svg = SvgRenderer::default().render_layout(&store, None);
    fs::write("output/tower/layout.svg", svg)?;
    println!("Output in output/tower/: layout.svg");

    Ok(())
}
