//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use sp_agent::AgentStoreBuilder;
//! use sp_program::{RoomShape, RoomSpec};
//!
//! # fn main() -> Result<(), sp_agent::AgentError> {
//! let (store, rngs) = AgentStoreBuilder::new(42)
//!     .room(RoomSpec::new("hall", RoomShape::Circle { radius: 3.0 }))
//!     .room(RoomSpec::new("studio", RoomShape::RectArea { area: 20.0, aspect: None }))
//!     .build()?;
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(rngs.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # What `build` does
//!
//! 1. Validates names (non-empty, unique) and sizes (positive, finite).
//! 2. Resolves adjacency: named `adjacent_to` lists become directed edges; a
//!    programme with no adjacency at all falls back to a ring over programme
//!    order within each floor.
//! 3. Materialises footprints — rect rooms with a blank aspect sample one from
//!    `[ASPECT_MIN, ASPECT_MAX)` on their own RNG stream.
//! 4. Fills blank start positions with a deterministic per-agent scatter so no
//!    two unplaced rooms start locked on the same point.

use std::collections::{BTreeMap, HashMap};
use std::f64::consts::{PI, TAU};

use sp_core::{ASPECT_MAX, ASPECT_MIN, AgentId, Footprint, Vec2};
use sp_program::{ProgramSpec, RoomShape, RoomSpec};

use crate::error::{AgentError, AgentResult};
use crate::store::{AgentRngs, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
pub struct AgentStoreBuilder {
    seed:  u64,
    rooms: Vec<RoomSpec>,
}

impl AgentStoreBuilder {
    /// Create an empty builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, rooms: Vec::new() }
    }

    /// Seed the builder with every room of a loaded programme.
    pub fn from_program(program: ProgramSpec, seed: u64) -> Self {
        Self { seed, rooms: program.rooms }
    }

    /// Append one room.  Programme order matters: it is the ring-adjacency
    /// fallback order and the `AgentId` assignment order.
    pub fn room(mut self, spec: RoomSpec) -> Self {
        self.rooms.push(spec);
        self
    }

    /// Number of rooms registered so far.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Validate the programme and construct `AgentStore` + `AgentRngs`.
    pub fn build(self) -> AgentResult<(AgentStore, AgentRngs)> {
        let count = self.rooms.len();
        if count == 0 {
            return Err(AgentError::Empty);
        }

        // Name table; rejects blanks and duplicates.
        let mut name_to_id: HashMap<&str, u32> = HashMap::with_capacity(count);
        for (i, room) in self.rooms.iter().enumerate() {
            if room.name.is_empty() {
                return Err(AgentError::UnnamedRoom { index: i });
            }
            if name_to_id.insert(room.name.as_str(), i as u32).is_some() {
                return Err(AgentError::DuplicateRoom(room.name.clone()));
            }
        }

        // Size validation before any footprint is materialised.
        for room in &self.rooms {
            match room.shape {
                RoomShape::Circle { radius } => {
                    if !(radius.is_finite() && radius > 0.0) {
                        return Err(AgentError::InvalidSize {
                            room: room.name.clone(),
                            what: "radius",
                            got:  radius,
                        });
                    }
                }
                RoomShape::RectArea { area, aspect } => {
                    if !(area.is_finite() && area > 0.0) {
                        return Err(AgentError::InvalidSize {
                            room: room.name.clone(),
                            what: "area",
                            got:  area,
                        });
                    }
                    if let Some(aspect) = aspect {
                        if !(aspect.is_finite() && aspect > 0.0) {
                            return Err(AgentError::InvalidSize {
                                room: room.name.clone(),
                                what: "aspect",
                                got:  aspect,
                            });
                        }
                    }
                }
            }
        }

        let edges = self.resolve_adjacency(&name_to_id)?;

        // CSR row pointer + targets, grouped by source.  The stable sort keeps
        // each room's listed adjacency order intact within its row.
        let mut edges = edges;
        edges.sort_by_key(|e| e.0);
        let mut adj_start = vec![0u32; count + 1];
        for &(from, _) in &edges {
            adj_start[from as usize + 1] += 1;
        }
        for i in 1..=count {
            adj_start[i] += adj_start[i - 1];
        }
        let adj_to: Vec<AgentId> = edges.iter().map(|&(_, to)| AgentId(to)).collect();
        debug_assert_eq!(adj_start[count] as usize, adj_to.len());

        // Scatter unplaced rooms over the disc that would hold the programme's
        // total claimed area.
        let total_area: f64 = self.rooms.iter().map(|r| spec_area(&r.shape)).sum();
        let scatter_radius = (total_area / PI).sqrt();

        let mut rngs = AgentRngs::new(count, self.seed);
        let mut names      = Vec::with_capacity(count);
        let mut positions  = Vec::with_capacity(count);
        let mut footprints = Vec::with_capacity(count);
        let mut floors     = Vec::with_capacity(count);

        for (i, room) in self.rooms.into_iter().enumerate() {
            let rng = rngs.get_mut(AgentId(i as u32));

            let footprint = match room.shape {
                RoomShape::Circle { radius } => Footprint::circle(radius),
                RoomShape::RectArea { area, aspect: Some(aspect) } => {
                    Footprint::rect_from_area(area, aspect)
                }
                RoomShape::RectArea { area, aspect: None } => {
                    Footprint::rect_from_area(area, rng.gen_range(ASPECT_MIN..ASPECT_MAX))
                }
            };

            let position = match room.position {
                Some(p) => p,
                None => {
                    let angle = rng.gen_range(0.0..TAU);
                    let r = scatter_radius * rng.gen_range(0.0f64..1.0).sqrt();
                    Vec2::new(angle.cos() * r, angle.sin() * r)
                }
            };

            names.push(room.name);
            positions.push(position);
            footprints.push(footprint);
            floors.push(room.floor);
        }

        let store = AgentStore {
            count,
            names,
            positions,
            footprints,
            floors,
            adj_start,
            adj_to,
        };
        Ok((store, rngs))
    }

    /// Directed `(from, to)` edges, one per adjacency reference.
    ///
    /// When no room names anything the fallback is the classic ring: every
    /// room clusters toward the previous room in programme order, the first
    /// wrapping to the last.  Floors ring independently so the fallback never
    /// creates an edge the engine would mask out.
    fn resolve_adjacency(&self, name_to_id: &HashMap<&str, u32>) -> AgentResult<Vec<(u32, u32)>> {
        let mut edges = Vec::new();

        if self.rooms.iter().any(|r| !r.adjacent_to.is_empty()) {
            for (i, room) in self.rooms.iter().enumerate() {
                for target in &room.adjacent_to {
                    match name_to_id.get(target.as_str()) {
                        Some(&to) => edges.push((i as u32, to)),
                        None => {
                            return Err(AgentError::UnknownRoom {
                                name:          target.clone(),
                                referenced_by: room.name.clone(),
                            });
                        }
                    }
                }
            }
            return Ok(edges);
        }

        let mut by_floor: BTreeMap<_, Vec<u32>> = BTreeMap::new();
        for (i, room) in self.rooms.iter().enumerate() {
            by_floor.entry(room.floor).or_default().push(i as u32);
        }
        for members in by_floor.values() {
            if members.len() < 2 {
                continue;
            }
            for (k, &from) in members.iter().enumerate() {
                let prev = if k == 0 { members.len() - 1 } else { k - 1 };
                edges.push((from, members[prev]));
            }
        }
        Ok(edges)
    }
}

/// Claimed area of a shape before any aspect sampling (aspect never changes
/// the area, only the proportions).
fn spec_area(shape: &RoomShape) -> f64 {
    match *shape {
        RoomShape::Circle { radius } => PI * radius * radius,
        RoomShape::RectArea { area, .. } => area,
    }
}
