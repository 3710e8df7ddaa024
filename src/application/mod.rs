// Application use-cases: single-pass wiring of a strategy or emitter.

use crate::domain::callgraph::CallGraph;
use crate::domain::error::Result;
use crate::domain::shape::ShapeParams;
use crate::infrastructure::{artifact, EmitReport, SourceEmitter};
use crate::ports::GraphStrategy;
use std::path::Path;

/// Summary of a generation run, for status reporting.
#[derive(Debug)]
pub struct GenerateReport {
    pub nodes: usize,
    pub edges: usize,
    pub max_depth: u32,
}

impl GenerateReport {
    fn from_graph(graph: &CallGraph) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            max_depth: graph.max_depth(),
        }
    }
}

/// Generate one call graph and persist it as an artifact.
pub struct GenerateUsecase<'a> {
    pub strategy: &'a dyn GraphStrategy,
}

impl GenerateUsecase<'_> {
    pub fn run(&self, params: &ShapeParams, out_path: &Path) -> Result<GenerateReport> {
        let graph = self.strategy.generate(params)?;
        artifact::save(&graph, out_path)?;
        Ok(GenerateReport::from_graph(&graph))
    }
}

/// Load a persisted call graph and lower it to C sources plus a Makefile.
pub struct EmitUsecase;

impl EmitUsecase {
    pub fn run(&self, artifact_path: &Path, out_dir: &Path, num_files: usize) -> Result<EmitReport> {
        let graph = artifact::load(artifact_path)?;
        SourceEmitter::new(&graph, out_dir).write_all(num_files)
    }
}
