//! `sp-core` — foundational types for the `spacepack` space-planning toolkit.
//!
//! This crate is a dependency of every other `sp-*` crate.  It intentionally
//! has no `sp-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|----------------------------------------------------------|
//! | [`ids`]       | `AgentId`, `FloorId`                                     |
//! | [`vec2`]      | `Vec2` planar vector, `EPS` tolerance                    |
//! | [`rect`]      | axis-aligned `Rect`                                      |
//! | [`footprint`] | `Footprint` (circle / rectangle room shapes)             |
//! | [`config`]    | `RelaxConfig`                                            |
//! | [`rng`]       | `AgentRng` (per-agent), `SimRng` (run-level)             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod footprint;
pub mod ids;
pub mod rect;
pub mod rng;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RelaxConfig;
pub use footprint::{ASPECT_MAX, ASPECT_MIN, Footprint};
pub use ids::{AgentId, FloorId};
pub use rect::Rect;
pub use rng::{AgentRng, SimRng};
pub use vec2::{EPS, Vec2};
