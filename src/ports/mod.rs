use crate::domain::callgraph::CallGraph;
use crate::domain::error::Result;
use crate::domain::shape::ShapeParams;

/// Capability shared by every generation strategy. Strategies are
/// interchangeable: same inputs, same output contract, selected by name.
pub trait GraphStrategy {
    /// Stable name used for CLI selection.
    fn name(&self) -> &'static str;

    /// Produce one validated call graph for the requested shape. Parameter
    /// errors surface before any graph state is built; a partially built
    /// graph is never returned.
    fn generate(&self, params: &ShapeParams) -> Result<CallGraph>;
}
