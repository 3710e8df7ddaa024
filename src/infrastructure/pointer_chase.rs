//! Pointer Chase Strategy
//!
//! `round(avg_width)` callchains of `depth` functions each. Chain membership
//! and call order come from seeded random draws over a shared function pool,
//! so the call sequence looks arbitrary to a branch predictor while the node
//! count stays exact: `round(avg_width) * depth + 1`. The root calls each
//! chain head in creation order; once a chain unwinds, control moves to the
//! next one.

use crate::domain::callgraph::{CallGraph, GraphBuilder};
use crate::domain::error::{CallbenchError, Result};
use crate::domain::shape::{ShapeParams, MAX_NODE_COUNT};
use crate::ports::GraphStrategy;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub struct PointerChaseStrategy;

/// Pop a uniformly chosen element, preserving the relative order of the
/// remainder so draws stay reproducible across runs.
fn pop_random_element(rng: &mut StdRng, pool: &mut Vec<u32>) -> u32 {
    let idx = rng.random_range(0..pool.len());
    pool.remove(idx)
}

impl GraphStrategy for PointerChaseStrategy {
    fn name(&self) -> &'static str {
        "pointer-chase"
    }

    fn generate(&self, params: &ShapeParams) -> Result<CallGraph> {
        params.validate()?;
        if params.cross_edges {
            return Err(CallbenchError::invalid_parameter(
                "cross_edges",
                "pointer-chase chains are disjoint; cross edges are not supported",
            ));
        }

        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut builder = GraphBuilder::new();
        let root = builder.add_node(0);

        if params.avg_width <= 0.0 {
            return builder.freeze(root);
        }

        let chains = params.rounded_width() as u64;
        let total = chains
            .checked_mul(params.depth as u64)
            .filter(|n| *n < MAX_NODE_COUNT)
            .ok_or_else(|| {
                CallbenchError::invalid_parameter(
                    "avg_width",
                    format!(
                        "{} chains of depth {} overflow the id space",
                        chains, params.depth
                    ),
                )
            })?;

        // Shared pool of chain functions; every function lands in exactly
        // one chain.
        let mut pool: Vec<u32> = (0..total).map(|_| builder.add_node(0)).collect();

        for _ in 0..chains {
            let head = pop_random_element(&mut rng, &mut pool);
            builder.set_depth(head, 1);
            builder.add_call(root, head);

            let mut caller = head;
            for position in 1..params.depth {
                let callee = pop_random_element(&mut rng, &mut pool);
                builder.set_depth(callee, position + 1);
                builder.add_call(caller, callee);
                caller = callee;
            }
        }
        debug_assert!(pool.is_empty());

        // Flag flips are drawn last, in id order, so chain wiring and flag
        // sampling stay independent of each other.
        for id in 1..=total as u32 {
            builder.set_intra_control_flow(id, rng.random_bool(params.branch_probability));
        }

        builder.freeze(root)
    }
}
