// Infrastructure implementations for callbench: concrete generation
// strategies, the artifact codec, and the C source emitter.

pub mod artifact;
pub mod branching_tree;
pub mod dfs_chase;
pub mod emitter;
pub mod pointer_chase;

pub use branching_tree::BranchingTreeStrategy;
pub use dfs_chase::DfsChaseStrategy;
pub use emitter::{EmitReport, SourceEmitter};
pub use pointer_chase::PointerChaseStrategy;

use crate::ports::GraphStrategy;

/// Names accepted by `strategy_by_name`, in display order.
pub fn strategy_names() -> &'static [&'static str] {
    &["branching-tree", "dfs-chase", "pointer-chase"]
}

/// Resolve a strategy from its CLI name.
pub fn strategy_by_name(name: &str) -> Option<Box<dyn GraphStrategy>> {
    match name {
        "branching-tree" => Some(Box::new(BranchingTreeStrategy)),
        "dfs-chase" => Some(Box::new(DfsChaseStrategy)),
        "pointer-chase" => Some(Box::new(PointerChaseStrategy)),
        _ => None,
    }
}
