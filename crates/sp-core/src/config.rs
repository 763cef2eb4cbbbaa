//! Relaxation run configuration.

/// Top-level configuration for a relaxation run.
///
/// Typically built in code by the application crate (or deserialized from a
/// config file with the `serde` feature) and handed to the engine builder.
///
/// The defaults give a stable run: attraction at `alpha`, repulsion at a
/// fifth of it, stop when an iteration moves everything by less than 0.01
/// drawing units in total.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelaxConfig {
    /// Step scale for the cluster (attraction) move.  Each clustering pair
    /// closes `alpha × gap / 2` per iteration.
    pub alpha: f64,

    /// Multiplier applied to `alpha` for the collide (repulsion) move, so
    /// that overlapping rooms separate more gently than linked rooms attract.
    pub collide_scale: f64,

    /// Multiplier applied to `alpha` for boundary enticement when the agent
    /// is already inside the boundary.  Agents outside are pulled at full
    /// `alpha` strength.
    pub entice_scale: f64,

    /// Convergence threshold on total displacement per iteration.
    pub threshold: f64,

    /// Iteration budget when the threshold is never reached.
    pub max_iters: u32,

    /// Master RNG seed.  The same seed always produces identical layouts.
    pub seed: u64,

    /// Call the observer's snapshot hook every N iterations (0 = never).
    pub snapshot_interval: u32,
}

impl Default for RelaxConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            collide_scale: 0.2,
            entice_scale: 0.1,
            threshold: 0.01,
            max_iters: 1_000,
            seed: 0,
            snapshot_interval: 0,
        }
    }
}

impl RelaxConfig {
    /// Effective step scale of the collide move.
    #[inline]
    pub fn collide_alpha(&self) -> f64 {
        self.alpha * self.collide_scale
    }
}
