//! `sp-relax` — iterative relaxation loop for the space-packing framework.
//!
//! # Three-phase sweep
//!
//! ```text
//! while iterations < config.max_iters:
//!   ① Cluster  — each adjacency edge pulls its two rooms together until
//!                their footprints touch (step = alpha * gap / 2 each).
//!   ② Collide  — every same-floor pair pushes apart where footprints
//!                overlap (circle pairs radially, pairs with a rectangle
//!                per axis; step = collide_alpha * overlap / 2 each).
//!   ③ Entice   — with a boundary set, rooms outside are pulled to the
//!                closest boundary point at full alpha, rooms inside at
//!                alpha * entice_scale.
//!   stop once a whole sweep moves less than config.threshold in total.
//! ```
//!
//! Rooms on different floors never interact; a floor is an independent
//! sub-layout that happens to share the run.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Adds [`relax_floors`], one Rayon worker per floor.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sp_agent::AgentStoreBuilder;
//! use sp_core::RelaxConfig;
//! use sp_relax::{NoopObserver, RelaxBuilder};
//!
//! let (store, _rngs) = AgentStoreBuilder::from_program(program, 42).build()?;
//! let mut engine = RelaxBuilder::new(RelaxConfig::default(), store).build()?;
//! let outcome = engine.run(&mut NoopObserver);
//! println!("settled after {} sweeps", outcome.iterations);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod floors;
pub mod observer;

mod step;


pub use builder::RelaxBuilder;
pub use engine::{RelaxEngine, RelaxOutcome};
pub use error::{RelaxError, RelaxResult};
pub use floors::{FloorSummary, Stair, floor_summaries, stairs};
#[cfg(feature = "parallel")]
pub use floors::{FloorOutcome, relax_floors};
pub use observer::{NoopObserver, RelaxObserver};
