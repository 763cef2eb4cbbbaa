//! Core agent storage: `AgentStore` (SoA layout data) and `AgentRngs`.
//!
//! # Why two structs?
//!
//! All randomness in a layout run happens at build time (sampled aspect
//! ratios, scattered start positions); the relaxation itself is purely
//! deterministic arithmetic over the store.  Keeping the RNGs in a separate
//! `AgentRngs` struct lets the relaxation engine take ownership of the store
//! while the caller holds on to the RNG streams for anything it wants to
//! sample afterwards (jitter between runs, extra per-room draws):
//!
//! ```ignore
//! let (store, mut rngs) = AgentStoreBuilder::from_program(program, seed).build()?;
//! let engine = RelaxBuilder::new(config, store).build()?;   // store moves here
//! let nudge = rngs.get_mut(AgentId(0)).gen_range(-0.5..0.5); // rngs stay usable
//! ```

use sp_core::{AgentId, AgentRng, FloorId, Footprint, Rect, Vec2};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, kept in a parallel `Vec` indexed by
/// `AgentId` like every other SoA array.
///
/// The builder seeds and *advances* these while materialising footprints and
/// start positions, then hands them back so later draws continue the same
/// per-agent streams instead of replaying them.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all room agents in a layout.
///
/// Every per-agent `Vec` has exactly `count` elements; the `AgentId` value is
/// the index into all of them:
///
/// ```ignore
/// let pos = store.positions[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Adjacency is a directed CSR graph: the rooms agent `a` clusters toward are
/// `adj_to[ adj_start[a] .. adj_start[a+1] ]`.  An edge `a → b` still moves
/// *both* endpoints when it fires; direction only decides which agent's sweep
/// visits the pair.
///
/// Do not construct directly; use [`AgentStoreBuilder`](crate::AgentStoreBuilder),
/// which validates names, resolves adjacency, and keeps the arrays in sync.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every per-agent `Vec`.
    pub count: usize,

    /// Room names, unique across the store.
    pub names: Vec<String>,

    /// Current room centers.  The relaxation engine mutates these in place.
    pub positions: Vec<Vec2>,

    /// Claimed shapes, fixed for the lifetime of the store.
    pub footprints: Vec<Footprint>,

    /// Floor assignment.  Agents on different floors never interact.
    pub floors: Vec<FloorId>,

    /// CSR row pointer into [`adj_to`](Self::adj_to); length `count + 1`.
    pub adj_start: Vec<u32>,

    /// CSR edge targets, grouped by source agent.
    pub adj_to: Vec<AgentId>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Total number of directed adjacency edges.
    pub fn edge_count(&self) -> usize {
        self.adj_to.len()
    }

    /// Room name of `agent`.
    #[inline]
    pub fn name(&self, agent: AgentId) -> &str {
        &self.names[agent.index()]
    }

    /// Look up an agent by room name.  Linear scan; fine at programme scale.
    pub fn find(&self, name: &str) -> Option<AgentId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| AgentId(i as u32))
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Iterator over the rooms `agent` clusters toward.
    ///
    /// This is a contiguous CSR range — no heap allocation.
    #[inline]
    pub fn neighbors(&self, agent: AgentId) -> impl Iterator<Item = AgentId> + '_ {
        let start = self.adj_start[agent.index()] as usize;
        let end   = self.adj_start[agent.index() + 1] as usize;
        self.adj_to[start..end].iter().copied()
    }

    /// Out-degree of `agent` (number of rooms it clusters toward).
    #[inline]
    pub fn degree(&self, agent: AgentId) -> usize {
        let start = self.adj_start[agent.index()] as usize;
        let end   = self.adj_start[agent.index() + 1] as usize;
        end - start
    }

    // ── Floors ────────────────────────────────────────────────────────────

    /// `true` if both agents sit on the same floor.
    #[inline]
    pub fn same_floor(&self, a: AgentId, b: AgentId) -> bool {
        self.floors[a.index()] == self.floors[b.index()]
    }

    /// Sorted, distinct floors that have at least one room.
    pub fn floor_ids(&self) -> Vec<FloorId> {
        let mut ids: Vec<FloorId> = self.floors.clone();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Iterator over the agents on `floor`, in ascending index order.
    pub fn agents_on_floor(&self, floor: FloorId) -> impl Iterator<Item = AgentId> + '_ {
        self.floors
            .iter()
            .enumerate()
            .filter(move |(_, f)| **f == floor)
            .map(|(i, _)| AgentId(i as u32))
    }

    // ── Extents ───────────────────────────────────────────────────────────

    /// Axis-aligned bounding box of one room at its current position.
    #[inline]
    pub fn room_bbox(&self, agent: AgentId) -> Rect {
        self.footprints[agent.index()].bbox_at(self.positions[agent.index()])
    }

    /// Bounding box of the whole layout in plan, or `None` for an empty store.
    pub fn bbox(&self) -> Option<Rect> {
        let mut ids = self.agent_ids();
        let first = self.room_bbox(ids.next()?);
        Some(ids.fold(first, |acc, a| acc.union(self.room_bbox(a))))
    }
}
