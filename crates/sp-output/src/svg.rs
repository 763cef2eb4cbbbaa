//! SVG rendering of layouts and subdivisions.
//!
//! Hand-built markup: the drawings are a few dozen elements, so a `format!`
//! pipeline beats pulling in a rendering dependency.  World y points up and
//! SVG y points down, so every y coordinate is negated on the way out.
//!
//! Multi-floor layouts are drawn as vertically stacked bands, ground floor
//! on top, with stair connectors drawn as dashed lines between bands.

use sp_agent::AgentStore;
use sp_core::{Footprint, Rect};
use sp_geom::Polygon;
use sp_relax::{floor_summaries, stairs};

/// Renders layouts and subdivision pieces to SVG strings.
pub struct SvgRenderer {
    /// Pixel width of the image element.
    pub width: u32,
    /// Pixel height of the image element.
    pub height: u32,
    /// Vertical gap between stacked floor bands, in drawing units.
    pub floor_gap: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { width: 800, height: 800, floor_gap: 4.0 }
    }
}

impl SvgRenderer {
    /// Render a relaxed layout: one band per occupied floor, the boundary
    /// and per-floor bounding box behind the rooms, stairs between bands.
    pub fn render_layout(&self, store: &AgentStore, boundary: Option<&Polygon>) -> String {
        let mut world = match store.bbox() {
            Some(bbox) => bbox,
            None => return empty_svg(self.width, self.height, "no rooms"),
        };
        if let Some(boundary) = boundary {
            world = world.union(boundary.bbox());
        }

        // count >= 1 here, so there is at least one occupied floor
        let floors = store.floor_ids();
        let band_h = world.height() + self.floor_gap;
        let side = world.width().max(world.height());
        let margin = side * 0.05;
        let total_h =
            world.height() * floors.len() as f64 + self.floor_gap * (floors.len() - 1) as f64;

        let mut svg = header(
            self.width,
            self.height,
            world.min.x - margin,
            -world.max.y - margin,
            world.width() + 2.0 * margin,
            total_h + 2.0 * margin,
        );

        let summaries = floor_summaries(store);

        for (rank, &floor) in floors.iter().enumerate() {
            let dy = rank as f64 * band_h;

            if let Some(boundary) = boundary {
                svg.push_str(&format!(
                    "  <polygon points=\"{}\" fill=\"none\" stroke=\"#888\" stroke-width=\"{:.4}\"/>\n",
                    polygon_points(boundary, dy),
                    side * 0.004,
                ));
            }

            if let Some(summary) = summaries.iter().find(|s| s.floor == floor) {
                let b = summary.bbox;
                svg.push_str(&format!(
                    "  <rect x=\"{:.4}\" y=\"{:.4}\" width=\"{:.4}\" height=\"{:.4}\" \
                     fill=\"none\" stroke=\"#2196f3\" stroke-width=\"{:.4}\" \
                     stroke-dasharray=\"{:.4},{:.4}\"/>\n",
                    b.min.x,
                    -b.max.y + dy,
                    b.width(),
                    b.height(),
                    side * 0.003,
                    side * 0.01,
                    side * 0.01,
                ));
            }

            for agent in store.agents_on_floor(floor) {
                let i = agent.index();
                let p = store.positions[i];
                let fill = hsl(i, store.count);
                match store.footprints[i] {
                    Footprint::Circle { radius } => {
                        svg.push_str(&format!(
                            "  <circle cx=\"{:.4}\" cy=\"{:.4}\" r=\"{:.4}\" fill=\"{}\" opacity=\"0.8\"/>\n",
                            p.x,
                            -p.y + dy,
                            radius,
                            fill,
                        ));
                    }
                    Footprint::Rect { half_w, half_h } => {
                        svg.push_str(&format!(
                            "  <rect x=\"{:.4}\" y=\"{:.4}\" width=\"{:.4}\" height=\"{:.4}\" fill=\"{}\" opacity=\"0.8\"/>\n",
                            p.x - half_w,
                            -(p.y + half_h) + dy,
                            half_w * 2.0,
                            half_h * 2.0,
                            fill,
                        ));
                    }
                }
                svg.push_str(&format!(
                    "  <text x=\"{:.4}\" y=\"{:.4}\" font-size=\"{:.4}\" text-anchor=\"middle\" fill=\"#222\">{}</text>\n",
                    p.x,
                    -p.y + dy,
                    side * 0.03,
                    escape(&store.names[i]),
                ));
            }
        }

        for stair in stairs(store) {
            let lo = floors.binary_search(&stair.lower_floor);
            let hi = floors.binary_search(&stair.upper_floor);
            if let (Ok(lo), Ok(hi)) = (lo, hi) {
                let a = store.positions[stair.lower.index()];
                let b = store.positions[stair.upper.index()];
                svg.push_str(&format!(
                    "  <line x1=\"{:.4}\" y1=\"{:.4}\" x2=\"{:.4}\" y2=\"{:.4}\" \
                     stroke=\"#444\" stroke-width=\"{:.4}\" stroke-dasharray=\"{:.4},{:.4}\"/>\n",
                    a.x,
                    -a.y + lo as f64 * band_h,
                    b.x,
                    -b.y + hi as f64 * band_h,
                    side * 0.006,
                    side * 0.015,
                    side * 0.015,
                ));
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Render subdivision pieces, one tinted polygon per piece with its
    /// queue index at the centroid.
    pub fn render_pieces(&self, pieces: &[Polygon]) -> String {
        let mut bounds: Option<Rect> = None;
        for piece in pieces {
            bounds = Some(match bounds {
                Some(b) => b.union(piece.bbox()),
                None => piece.bbox(),
            });
        }
        let Some(world) = bounds else {
            return empty_svg(self.width, self.height, "no pieces");
        };

        let side = world.width().max(world.height());
        let margin = side * 0.05;
        let mut svg = header(
            self.width,
            self.height,
            world.min.x - margin,
            -world.max.y - margin,
            world.width() + 2.0 * margin,
            world.height() + 2.0 * margin,
        );

        for (i, piece) in pieces.iter().enumerate() {
            svg.push_str(&format!(
                "  <polygon points=\"{}\" fill=\"{}\" stroke=\"#333\" stroke-width=\"{:.4}\" opacity=\"0.8\"/>\n",
                polygon_points(piece, 0.0),
                hsl(i, pieces.len()),
                side * 0.004,
            ));
            let c = piece.centroid();
            svg.push_str(&format!(
                "  <text x=\"{:.4}\" y=\"{:.4}\" font-size=\"{:.4}\" text-anchor=\"middle\" fill=\"#222\">{}</text>\n",
                c.x,
                -c.y,
                side * 0.04,
                i,
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

// ── Markup helpers ────────────────────────────────────────────────────────────

fn header(width: u32, height: u32, x: f64, y: f64, w: f64, h: f64) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"{x} {y} {w} {h}\">\n  \
         <rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"#f8f8f8\"/>\n"
    )
}

fn empty_svg(width: u32, height: u32, caption: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n  \
         <rect width=\"100%\" height=\"100%\" fill=\"#f0f0f0\"/>\n  \
         <text x=\"50%\" y=\"50%\" text-anchor=\"middle\" fill=\"#666\">{caption}</text>\n</svg>\n"
    )
}

/// Vertex loop as an SVG points attribute, y negated and shifted by `dy`.
fn polygon_points(poly: &Polygon, dy: f64) -> String {
    poly.verts()
        .iter()
        .map(|v| format!("{:.4},{:.4}", v.x, -v.y + dy))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Evenly spread hues.
fn hsl(i: usize, n: usize) -> String {
    let hue = (i * 360 / n.max(1)) % 360;
    format!("hsl({hue}, 65%, 55%)")
}

/// Minimal XML text escaping for room names.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
