//! Branching Tree Strategy
//!
//! Width-driven random tree. Each interior node draws its child count
//! uniformly from an integer band around `avg_width`; nodes at the final
//! level become leaves. With `cross_edges` enabled the strategy also threads
//! forward edges between same-depth siblings to model shared callees. Both
//! variants stay acyclic.

use crate::domain::callgraph::{CallGraph, GraphBuilder};
use crate::domain::error::Result;
use crate::domain::shape::ShapeParams;
use crate::ports::GraphStrategy;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Chance that a node gains one extra same-depth forward edge when
/// `cross_edges` is on.
const CROSS_EDGE_PROBABILITY: f64 = 0.25;

pub struct BranchingTreeStrategy;

impl BranchingTreeStrategy {
    /// Inclusive upper bound of the per-node child count draw. The band
    /// `[1, 2*avg_width - 1]` keeps the mean at `avg_width`.
    fn width_ceiling(avg_width: f64) -> u32 {
        (2.0 * avg_width - 1.0).round().max(1.0) as u32
    }
}

impl GraphStrategy for BranchingTreeStrategy {
    fn name(&self) -> &'static str {
        "branching-tree"
    }

    fn generate(&self, params: &ShapeParams) -> Result<CallGraph> {
        params.validate()?;

        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut builder = GraphBuilder::new();
        let root = builder.add_node(0);

        if params.avg_width <= 0.0 {
            return builder.freeze(root);
        }

        let ceiling = Self::width_ceiling(params.avg_width);
        let mut frontier = vec![root];
        for level in 1..params.depth {
            let mut next = Vec::new();
            for &parent in &frontier {
                let children = rng.random_range(1..=ceiling);
                for _ in 0..children {
                    let child = builder.add_node(level);
                    builder.add_call(parent, child);
                    builder
                        .set_intra_control_flow(child, rng.random_bool(params.branch_probability));
                    next.push(child);
                }
            }

            if params.cross_edges && next.len() > 1 {
                // Forward edges only (lower id to strictly higher id at the
                // same level), so the graph remains a DAG.
                for i in 0..next.len() - 1 {
                    if rng.random_bool(CROSS_EDGE_PROBABILITY) {
                        let target = next[rng.random_range(i + 1..next.len())];
                        builder.add_call(next[i], target);
                    }
                }
            }

            frontier = next;
        }

        builder.freeze(root)
    }
}
