//! Floor partitioning: per-floor summaries, stair connectors, and the
//! optional per-floor parallel runner.
//!
//! Floors partition every interaction — the engine skips cross-floor pairs in
//! all three phases — so everything here is derived data: summaries and
//! stairs are computed from a finished layout, and the parallel runner simply
//! exploits the fact that floors are independent sub-problems.

use sp_agent::AgentStore;
use sp_core::{AgentId, FloorId, Rect, Vec2};

// ── Summaries ─────────────────────────────────────────────────────────────────

/// Per-floor aggregate of a layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FloorSummary {
    pub floor: FloorId,
    /// Rooms on this floor.
    pub rooms: usize,
    /// Union of the floor's room bounding boxes, in plan.
    pub bbox: Rect,
}

/// One summary per occupied floor, ascending by floor.
pub fn floor_summaries(store: &AgentStore) -> Vec<FloorSummary> {
    let mut summaries = Vec::new();
    for floor in store.floor_ids() {
        let mut agents = store.agents_on_floor(floor);
        let Some(first) = agents.next() else { continue };
        let mut rooms = 1;
        let mut bbox = store.room_bbox(first);
        for agent in agents {
            rooms += 1;
            bbox = bbox.union(store.room_bbox(agent));
        }
        summaries.push(FloorSummary { floor, rooms, bbox });
    }
    summaries
}

// ── Stairs ────────────────────────────────────────────────────────────────────

/// A stair connector between two occupied floors that are consecutive in the
/// sorted floor list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stair {
    /// Room on the lower floor.
    pub lower: AgentId,
    /// Room on the upper floor.
    pub upper: AgentId,
    pub lower_floor: FloorId,
    pub upper_floor: FloorId,
    /// Plan position of the connector: the midpoint of the two room centers.
    pub position: Vec2,
}

/// Place one stair per consecutive pair of occupied floors, connecting the
/// closest pair of room centers in plan (one room on each floor).
pub fn stairs(store: &AgentStore) -> Vec<Stair> {
    let floors = store.floor_ids();
    let mut stairs = Vec::new();
    for pair in floors.windows(2) {
        let (lower_floor, upper_floor) = (pair[0], pair[1]);
        let mut best_dist = f64::INFINITY;
        let mut best: Option<(AgentId, AgentId)> = None;
        for a in store.agents_on_floor(lower_floor) {
            for b in store.agents_on_floor(upper_floor) {
                let d = store.positions[a.index()].distance(store.positions[b.index()]);
                if d < best_dist {
                    best_dist = d;
                    best = Some((a, b));
                }
            }
        }
        if let Some((lower, upper)) = best {
            stairs.push(Stair {
                lower,
                upper,
                lower_floor,
                upper_floor,
                position: store.positions[lower.index()]
                    .lerp(store.positions[upper.index()], 0.5),
            });
        }
    }
    stairs
}

// ── Parallel per-floor relaxation ─────────────────────────────────────────────

#[cfg(feature = "parallel")]
pub use parallel::{FloorOutcome, relax_floors};

#[cfg(feature = "parallel")]
mod parallel {
    use rayon::prelude::*;
    use sp_agent::AgentStore;
    use sp_core::{FloorId, Footprint, RelaxConfig, Vec2};
    use sp_geom::Polygon;

    use crate::engine::RelaxOutcome;
    use crate::step::{cluster_pair, collide_pair, entice};

    /// How one floor's independent relaxation ended.
    #[derive(Copy, Clone, Debug, PartialEq)]
    pub struct FloorOutcome {
        pub floor:   FloorId,
        pub outcome: RelaxOutcome,
    }

    /// Relax every floor to convergence on its own Rayon worker, then write
    /// the new positions back into `store`.
    ///
    /// Unlike [`RelaxEngine::run`][crate::RelaxEngine::run], which tests one
    /// global displacement sum per sweep, each floor here converges against
    /// `config.threshold` on its own.  Final layouts match the character of
    /// the sequential path but iteration counts differ whenever floors
    /// settle at different speeds.
    pub fn relax_floors(
        config: &RelaxConfig,
        store: &mut AgentStore,
        boundary: Option<&Polygon>,
    ) -> Vec<FloorOutcome> {
        let tasks: Vec<FloorTask> = store
            .floor_ids()
            .into_iter()
            .map(|floor| FloorTask::extract(store, floor))
            .collect();

        let finished: Vec<(FloorTask, RelaxOutcome)> = tasks
            .into_par_iter()
            .map(|mut task| {
                let outcome = task.relax(config, boundary);
                (task, outcome)
            })
            .collect();

        let mut outcomes = Vec::with_capacity(finished.len());
        for (task, outcome) in finished {
            for (local, &global) in task.members.iter().enumerate() {
                store.positions[global] = task.positions[local];
            }
            outcomes.push(FloorOutcome { floor: task.floor, outcome });
        }
        outcomes
    }

    /// One floor's slice of the store, re-indexed locally so the kernels can
    /// run on a compact positions array.
    struct FloorTask {
        floor: FloorId,
        /// Global agent indices, ascending; local index `k` is agent
        /// `members[k]` in the store.
        members:    Vec<usize>,
        positions:  Vec<Vec2>,
        footprints: Vec<Footprint>,
        /// Local-index adjacency edges, in the order the sequential sweep
        /// visits them.
        edges: Vec<(usize, usize)>,
    }

    impl FloorTask {
        fn extract(store: &AgentStore, floor: FloorId) -> Self {
            let members: Vec<usize> = store.agents_on_floor(floor).map(|a| a.index()).collect();
            let mut local_of = vec![usize::MAX; store.count];
            for (k, &global) in members.iter().enumerate() {
                local_of[global] = k;
            }

            let mut edges = Vec::new();
            for (k, &global) in members.iter().enumerate() {
                let start = store.adj_start[global] as usize;
                let end   = store.adj_start[global + 1] as usize;
                for e in start..end {
                    let to = store.adj_to[e].index();
                    if to == global || store.floors[to] != floor {
                        continue;
                    }
                    edges.push((k, local_of[to]));
                }
            }

            Self {
                floor,
                positions: members.iter().map(|&g| store.positions[g]).collect(),
                footprints: members.iter().map(|&g| store.footprints[g]).collect(),
                members,
                edges,
            }
        }

        fn relax(&mut self, config: &RelaxConfig, boundary: Option<&Polygon>) -> RelaxOutcome {
            let collide_alpha = config.collide_alpha();
            let mut outcome = RelaxOutcome {
                iterations:   0,
                displacement: 0.0,
                converged:    false,
            };
            while outcome.iterations < config.max_iters {
                let mut moved = 0.0;
                for &(i, j) in &self.edges {
                    moved += cluster_pair(
                        &mut self.positions,
                        i,
                        j,
                        self.footprints[i],
                        self.footprints[j],
                        config.alpha,
                    );
                }
                for i in 0..self.positions.len() {
                    for j in (i + 1)..self.positions.len() {
                        moved += collide_pair(
                            &mut self.positions,
                            i,
                            j,
                            self.footprints[i],
                            self.footprints[j],
                            collide_alpha,
                        );
                    }
                }
                if let Some(boundary) = boundary {
                    for position in &mut self.positions {
                        moved += entice(position, boundary, config.alpha, config.entice_scale);
                    }
                }
                outcome.iterations += 1;
                outcome.displacement = moved;
                if moved < config.threshold {
                    outcome.converged = true;
                    break;
                }
            }
            outcome
        }
    }
}
