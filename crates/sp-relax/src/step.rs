//! Pairwise movement kernels.
//!
//! Shared by the sequential sweep in [`engine`](crate::engine) and the
//! per-floor runner in [`floors`](crate::floors).  All kernels mutate
//! positions in place and return the displacement the interaction contributes
//! to the iteration total: the move length of one endpoint, counted once per
//! pair.
//!
//! A pair whose connecting vector (or axis component) is too short to
//! normalise simply does not move — stacked centers have no direction to
//! escape in, so the builder's start-position scatter is what keeps unplaced
//! rooms from locking up.

use sp_core::{EPS, Footprint, Vec2};
use sp_geom::Polygon;

/// Pull two rooms linked by an adjacency edge toward each other.
///
/// Fires when the centers sit further apart than the sum of their contact
/// radii; each endpoint then closes `alpha × gap / 2` along the connecting
/// line.
pub(crate) fn cluster_pair(
    positions: &mut [Vec2],
    i: usize,
    j: usize,
    fi: Footprint,
    fj: Footprint,
    alpha: f64,
) -> f64 {
    let delta = positions[j] - positions[i];
    let dist = delta.length();
    let contact = fi.contact_radius() + fj.contact_radius();
    if dist <= contact {
        return 0.0;
    }
    let Some(unit) = delta.normalized() else {
        return 0.0;
    };
    let step = alpha * (dist - contact) * 0.5;
    positions[i] += unit * step;
    positions[j] -= unit * step;
    step
}

/// Push two overlapping rooms apart.
///
/// Circle pairs separate along the connecting line; any pair involving a
/// rectangle separates per axis instead, with each axis tested and pushed
/// independently.  `step_scale` is the collide step scale, normally
/// [`RelaxConfig::collide_alpha`](sp_core::RelaxConfig::collide_alpha).
pub(crate) fn collide_pair(
    positions: &mut [Vec2],
    i: usize,
    j: usize,
    fi: Footprint,
    fj: Footprint,
    step_scale: f64,
) -> f64 {
    match (fi, fj) {
        (Footprint::Circle { radius: ri }, Footprint::Circle { radius: rj }) => {
            collide_circles(positions, i, j, ri + rj, step_scale)
        }
        _ => collide_per_axis(positions, i, j, fi, fj, step_scale),
    }
}

fn collide_circles(
    positions: &mut [Vec2],
    i: usize,
    j: usize,
    contact: f64,
    step_scale: f64,
) -> f64 {
    let delta = positions[j] - positions[i];
    let dist = delta.length();
    if dist >= contact {
        return 0.0;
    }
    let Some(unit) = delta.normalized() else {
        return 0.0;
    };
    let step = step_scale * (contact - dist) * 0.5;
    positions[i] -= unit * step;
    positions[j] += unit * step;
    step
}

fn collide_per_axis(
    positions: &mut [Vec2],
    i: usize,
    j: usize,
    fi: Footprint,
    fj: Footprint,
    step_scale: f64,
) -> f64 {
    let contact_x = fi.half_extent_x() + fj.half_extent_x();
    let contact_y = fi.half_extent_y() + fj.half_extent_y();
    let dx = positions[j].x - positions[i].x;
    let dy = positions[j].y - positions[i].y;

    let mut move_x = 0.0;
    if dx.abs() < contact_x && dx.abs() > EPS {
        move_x = step_scale * (contact_x - dx.abs()) * 0.5 * dx.signum();
    }
    let mut move_y = 0.0;
    if dy.abs() < contact_y && dy.abs() > EPS {
        move_y = step_scale * (contact_y - dy.abs()) * 0.5 * dy.signum();
    }
    if move_x == 0.0 && move_y == 0.0 {
        return 0.0;
    }

    positions[i].x -= move_x;
    positions[i].y -= move_y;
    positions[j].x += move_x;
    positions[j].y += move_y;
    move_x.hypot(move_y)
}

/// Pull one room toward the closest point of the shared boundary.
///
/// Rooms outside the boundary are pulled at full `alpha` strength; rooms
/// already inside drift gently at `alpha × entice_scale`, which lines walls
/// up along the boundary without collapsing the interior.
pub(crate) fn entice(
    position: &mut Vec2,
    boundary: &Polygon,
    alpha: f64,
    entice_scale: f64,
) -> f64 {
    let pull = boundary.closest_point(*position) - *position;
    let dist = pull.length();
    if dist <= EPS {
        return 0.0;
    }
    let scale = if boundary.contains(*position) {
        alpha * entice_scale
    } else {
        alpha
    };
    *position += pull * scale;
    dist * scale
}
