//! Shape Parameters
//!
//! The caller-facing knobs every generation strategy consumes. Validation is
//! fail-fast: a strategy checks the whole parameter set before allocating a
//! single node.

use crate::domain::error::{CallbenchError, Result};

/// Seed used when the caller does not supply one, so unseeded runs are still
/// reproducible.
pub const DEFAULT_SEED: u64 = 0;

/// Upper bound on generated node count, so ids stay inside `u32`.
pub const MAX_NODE_COUNT: u64 = u32::MAX as u64;

/// Requested shape of a generated call graph.
#[derive(Debug, Clone)]
pub struct ShapeParams {
    /// Number of levels in the generation tree, root included.
    pub depth: u32,
    /// Target average number of callees per interior node. A value of zero
    /// (or below) yields a root-only graph rather than an error.
    pub avg_width: f64,
    /// Probability that a non-root node is flagged with intra-function
    /// control flow.
    pub branch_probability: f64,
    /// RNG seed; equal seeds and parameters reproduce identical graphs.
    pub seed: u64,
    /// Allow extra same-depth forward edges where the strategy supports
    /// them. Off by default: the generation tree stays a pure tree.
    pub cross_edges: bool,
}

impl ShapeParams {
    pub fn new(depth: u32, avg_width: f64) -> Self {
        Self {
            depth,
            avg_width,
            branch_probability: 0.0,
            seed: DEFAULT_SEED,
            cross_edges: false,
        }
    }

    pub fn with_branch_probability(mut self, p: f64) -> Self {
        self.branch_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_cross_edges(mut self, enabled: bool) -> Self {
        self.cross_edges = enabled;
        self
    }

    /// Reject out-of-range parameters before any graph state exists.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(CallbenchError::invalid_parameter(
                "depth",
                "must be at least 1",
            ));
        }
        if !self.avg_width.is_finite() {
            return Err(CallbenchError::invalid_parameter(
                "avg_width",
                format!("must be a finite number, got {}", self.avg_width),
            ));
        }
        if !self.branch_probability.is_finite()
            || !(0.0..=1.0).contains(&self.branch_probability)
        {
            return Err(CallbenchError::invalid_parameter(
                "branch_probability",
                format!("must be within [0, 1], got {}", self.branch_probability),
            ));
        }
        Ok(())
    }

    /// True when the requested width collapses the graph to a lone root.
    pub fn is_degenerate(&self) -> bool {
        self.avg_width <= 0.0
    }

    /// Integer width used by strategies that need a fixed fan-out.
    pub fn rounded_width(&self) -> u32 {
        self.avg_width.round().max(1.0) as u32
    }
}
