//! Fluent builder for constructing a [`RelaxEngine`].

use sp_agent::AgentStore;
use sp_core::RelaxConfig;
use sp_geom::Polygon;

use crate::engine::RelaxEngine;
use crate::error::{RelaxError, RelaxResult};

/// Fluent builder for [`RelaxEngine`].
///
/// # Required inputs
///
/// - [`RelaxConfig`] — step scales, threshold, iteration budget
/// - [`AgentStore`] — from [`sp_agent::AgentStoreBuilder`]
///
/// # Optional inputs
///
/// | Method         | Default                                 |
/// |----------------|------------------------------------------|
/// | `.boundary(p)` | No boundary; the entice phase is skipped |
///
/// # Example
///
/// ```rust,ignore
/// let (store, _rngs) = AgentStoreBuilder::from_program(program, seed).build()?;
/// let mut engine = RelaxBuilder::new(RelaxConfig::default(), store)
///     .boundary(site)
///     .build()?;
/// let outcome = engine.run(&mut NoopObserver);
/// ```
pub struct RelaxBuilder {
    config:   RelaxConfig,
    store:    AgentStore,
    boundary: Option<Polygon>,
}

impl RelaxBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: RelaxConfig, store: AgentStore) -> Self {
        Self { config, store, boundary: None }
    }

    /// Supply the closed boundary the rooms are enticed toward.
    pub fn boundary(mut self, boundary: Polygon) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Validate the configuration and the store's array invariants, then
    /// return a ready-to-run [`RelaxEngine`].
    pub fn build(self) -> RelaxResult<RelaxEngine> {
        let cfg = &self.config;
        if !(cfg.alpha.is_finite() && cfg.alpha > 0.0) {
            return Err(RelaxError::Config(format!(
                "alpha must be positive and finite, got {}",
                cfg.alpha
            )));
        }
        if !(cfg.collide_scale.is_finite() && cfg.collide_scale >= 0.0) {
            return Err(RelaxError::Config(format!(
                "collide_scale must be non-negative and finite, got {}",
                cfg.collide_scale
            )));
        }
        if !(cfg.entice_scale.is_finite() && cfg.entice_scale >= 0.0) {
            return Err(RelaxError::Config(format!(
                "entice_scale must be non-negative and finite, got {}",
                cfg.entice_scale
            )));
        }
        if !(cfg.threshold.is_finite() && cfg.threshold >= 0.0) {
            return Err(RelaxError::Config(format!(
                "threshold must be non-negative and finite, got {}",
                cfg.threshold
            )));
        }
        if cfg.max_iters == 0 {
            return Err(RelaxError::Config("max_iters must be at least 1".into()));
        }

        // Store invariants.  AgentStoreBuilder always satisfies these; a
        // hand-assembled store might not.
        let count = self.store.count;
        for (what, len) in [
            ("names", self.store.names.len()),
            ("positions", self.store.positions.len()),
            ("footprints", self.store.footprints.len()),
            ("floors", self.store.floors.len()),
        ] {
            if len != count {
                return Err(RelaxError::AgentCountMismatch {
                    expected: count,
                    got:      len,
                    what,
                });
            }
        }
        if self.store.adj_start.len() != count + 1 {
            return Err(RelaxError::Config(format!(
                "adjacency row pointer has {} entries, needs agent count + 1 = {}",
                self.store.adj_start.len(),
                count + 1
            )));
        }
        if self.store.adj_start[count] as usize != self.store.adj_to.len() {
            return Err(RelaxError::Config(format!(
                "adjacency row pointer ends at {} but there are {} edges",
                self.store.adj_start[count],
                self.store.adj_to.len()
            )));
        }
        if let Some(bad) = self.store.adj_to.iter().find(|t| t.index() >= count) {
            return Err(RelaxError::Config(format!(
                "adjacency edge targets agent {bad} but the store has {count} agents"
            )));
        }

        Ok(RelaxEngine::new(self.config, self.store, self.boundary))
    }
}
