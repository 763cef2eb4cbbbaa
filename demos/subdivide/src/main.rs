//! subdivide — carve a U-shaped plot into rooms with a fixed cut list.
//!
//! Cuts pop pieces off a FIFO queue, so the six cuts below always yield
//! seven rooms.  The second cut runs straight through the plot's notch and
//! crosses the boundary four times; the splitter shortens it to the chord
//! that severs one prong, keeping every split two-piece.

use std::fs;

use anyhow::Result;

use sp_core::Vec2;
use sp_geom::Polygon;
use sp_output::SvgRenderer;
use sp_subdiv::{Axis, SplitStep, subdivide};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn x(param: f64) -> SplitStep {
    SplitStep::new(Axis::X, param)
}

fn y(param: f64) -> SplitStep {
    SplitStep::new(Axis::Y, param)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== subdivide — recursive plot subdivision ===");
    println!();

    // 1. U-shaped plot, vertices counter-clockwise, metres.
    let plot = Polygon::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(30.0, 0.0),
        Vec2::new(30.0, 20.0),
        Vec2::new(22.0, 20.0),
        Vec2::new(22.0, 8.0),
        Vec2::new(8.0, 8.0),
        Vec2::new(8.0, 20.0),
        Vec2::new(0.0, 20.0),
    ])?;

    // 2. The cut list.  Params are fractions of the bounding box of the
    //    piece each cut lands on, not of the root plot.
    let cuts = [y(0.25), y(0.5), x(0.5), y(0.4), x(0.3), y(0.5)];
    println!("Plot area {:.1} | {} cuts", plot.area(), cuts.len());
    println!(
        "Cuts: {}",
        cuts.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
    );

    // 3. Subdivide.
    let rooms = subdivide(&plot, &cuts)?;

    // 4. Summary.
    println!();
    println!("{:<6} {:>6} {:>10} {:>18}", "Room", "Verts", "Area", "Centroid");
    println!("{}", "-".repeat(44));
    let mut total = 0.0;
    for (i, room) in rooms.iter().enumerate() {
        let c = room.centroid();
        println!(
            "{:<6} {:>6} {:>10.2} {:>18}",
            i,
            room.vertex_count(),
            room.area(),
            format!("({:.2}, {:.2})", c.x, c.y),
        );
        total += room.area();
    }
    println!("{}", "-".repeat(44));
    println!("{:<6} {:>6} {:>10.2}  (plot: {:.2})", "total", "", total, plot.area());
    println!();

    // 5. Render.
    fs::create_dir_all("output/subdivide")?;
    let svg = SvgRenderer::default().render_pieces(&rooms);
    fs::write("output/subdivide/rooms.svg", svg)?;
    println!("Output in output/subdivide/: rooms.svg");

    Ok(())
}
