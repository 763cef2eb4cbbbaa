//! Plain data row types written by output backends.

use sp_agent::AgentStore;

/// Final placement of one room after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomRow {
    pub agent_id: u32,
    pub name:     String,
    /// `"circle"` or `"rect"`.
    pub shape:    String,
    pub floor:    u16,
    pub x:        f64,
    pub y:        f64,
    /// Full extents of the footprint (diameter for circles).
    pub width:    f64,
    pub height:   f64,
}

impl RoomRow {
    /// One row per agent, in `AgentId` order.
    pub fn from_store(store: &AgentStore) -> Vec<RoomRow> {
        (0..store.count)
            .map(|i| {
                let footprint = store.footprints[i];
                RoomRow {
                    agent_id: i as u32,
                    name:     store.names[i].clone(),
                    shape:    footprint.kind().to_string(),
                    floor:    store.floors[i].0,
                    x:        store.positions[i].x,
                    y:        store.positions[i].y,
                    width:    footprint.half_extent_x() * 2.0,
                    height:   footprint.half_extent_y() * 2.0,
                }
            })
            .collect()
    }
}

/// Total displacement of one relaxation sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub iteration: u32,
    pub moved:     f64,
}

/// One agent's position at a snapshot iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    pub iteration: u32,
    pub agent_id:  u32,
    pub x:         f64,
    pub y:         f64,
}

impl SnapshotRow {
    /// One row per agent at `iteration`, in `AgentId` order.
    pub fn from_store(iteration: u32, store: &AgentStore) -> Vec<SnapshotRow> {
        (0..store.count)
            .map(|i| SnapshotRow {
                iteration,
                agent_id: i as u32,
                x: store.positions[i].x,
                y: store.positions[i].y,
            })
            .collect()
    }
}
