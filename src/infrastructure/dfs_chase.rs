//! DFS Chase Strategy
//!
//! Full `w`-ary call tree of the requested depth, `w = round(avg_width)`.
//! The node count is exactly `(w^d - 1)/(w - 1)` (or `d` when `w == 1`), so
//! the shape is deterministic for fixed parameters; the seed only drives the
//! intra-control-flow sampling. A depth-first traversal of the emitted
//! program chases the instruction pointer down one long dependent path per
//! subtree, which is the frontend stress pattern this strategy exists for.

use crate::domain::callgraph::{CallGraph, GraphBuilder};
use crate::domain::error::{CallbenchError, Result};
use crate::domain::shape::{ShapeParams, MAX_NODE_COUNT};
use crate::ports::GraphStrategy;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub struct DfsChaseStrategy;

impl DfsChaseStrategy {
    /// Total nodes in a full `width`-ary tree with `depth` levels, rejected
    /// when the count leaves the id space.
    fn expected_node_count(depth: u32, width: u32) -> Result<u64> {
        let overflow = || {
            CallbenchError::invalid_parameter(
                "depth",
                format!(
                    "full {}-ary tree of depth {} exceeds the {} node limit",
                    width, depth, MAX_NODE_COUNT
                ),
            )
        };
        let mut total: u64 = 1;
        let mut level: u64 = 1;
        for _ in 1..depth {
            level = level.checked_mul(width as u64).ok_or_else(overflow)?;
            total = total.checked_add(level).ok_or_else(overflow)?;
            if total > MAX_NODE_COUNT {
                return Err(overflow());
            }
        }
        Ok(total)
    }
}

impl GraphStrategy for DfsChaseStrategy {
    fn name(&self) -> &'static str {
        "dfs-chase"
    }

    fn generate(&self, params: &ShapeParams) -> Result<CallGraph> {
        params.validate()?;
        if params.cross_edges {
            return Err(CallbenchError::invalid_parameter(
                "cross_edges",
                "dfs-chase generates a fixed full tree; cross edges are not supported",
            ));
        }

        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut builder = GraphBuilder::new();
        let root = builder.add_node(0);

        if params.avg_width <= 0.0 {
            return builder.freeze(root);
        }

        let width = params.rounded_width();
        Self::expected_node_count(params.depth, width)?;

        let mut frontier = vec![root];
        for level in 1..params.depth {
            let mut next = Vec::with_capacity(frontier.len() * width as usize);
            for &parent in &frontier {
                for _ in 0..width {
                    let child = builder.add_node(level);
                    builder.add_call(parent, child);
                    builder
                        .set_intra_control_flow(child, rng.random_bool(params.branch_probability));
                    next.push(child);
                }
            }
            frontier = next;
        }

        builder.freeze(root)
    }
}
