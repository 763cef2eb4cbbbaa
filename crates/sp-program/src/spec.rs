//! Programme data model.

use sp_core::{FloorId, Vec2};

/// Requested shape of a room, before any sampling happens.
#[derive(Clone, Debug, PartialEq)]
pub enum RoomShape {
    /// Circular room of a fixed radius.
    Circle { radius: f64 },
    /// Rectangular room of a target area.  `aspect` is width/height; `None`
    /// means "sample one per room" when the store is built.
    RectArea { area: f64, aspect: Option<f64> },
}

/// One room in the programme.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomSpec {
    pub name: String,
    pub shape: RoomShape,
    pub floor: FloorId,
    /// Start position; `None` gets a deterministic scatter at build time.
    pub position: Option<Vec2>,
    /// Names of rooms this one clusters toward.
    pub adjacent_to: Vec<String>,
}

impl RoomSpec {
    /// A room with the given name and shape on the ground floor, no explicit
    /// position or adjacency.  Setters cover the rest.
    pub fn new(name: impl Into<String>, shape: RoomShape) -> Self {
        Self {
            name: name.into(),
            shape,
            floor: FloorId::GROUND,
            position: None,
            adjacent_to: Vec::new(),
        }
    }

    pub fn on_floor(mut self, floor: FloorId) -> Self {
        self.floor = floor;
        self
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn adjacent_to(mut self, name: impl Into<String>) -> Self {
        self.adjacent_to.push(name.into());
        self
    }
}

/// A full room programme, in input order.
///
/// Input order matters: when no room names any adjacency the builder falls
/// back to ring adjacency over this order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgramSpec {
    pub rooms: Vec<RoomSpec>,
}

impl ProgramSpec {
    pub fn new(rooms: Vec<RoomSpec>) -> Self {
        Self { rooms }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Whether any room names an explicit adjacency.
    pub fn has_adjacency(&self) -> bool {
        self.rooms.iter().any(|r| !r.adjacent_to.is_empty())
    }
}
