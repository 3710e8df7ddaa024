//! Graph Artifact Codec
//!
//! Serialize/deserialize for the call graph hand-off between the generator
//! and the code emitter. Two on-disk encodings, chosen by extension:
//!
//! - `.bin` - bincode, the compact default
//! - `.json` - pretty-printed JSON for manual inspection
//!
//! Decoding always re-validates the graph, so a tampered or truncated
//! artifact surfaces as `MalformedGraph` before any output is produced.

use crate::domain::callgraph::CallGraph;
use crate::domain::error::{CallbenchError, Result};
use std::fs;
use std::path::Path;

/// On-disk encoding of a graph artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Binary,
    Json,
}

impl ArtifactFormat {
    /// Pick the encoding from a path's extension.
    pub fn from_path(path: &Path) -> Result<ArtifactFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => Ok(ArtifactFormat::Binary),
            Some("json") => Ok(ArtifactFormat::Json),
            other => Err(CallbenchError::invalid_parameter(
                "artifact path",
                format!(
                    "unsupported extension {:?} for {}, expected .bin or .json",
                    other.unwrap_or(""),
                    path.display()
                ),
            )),
        }
    }
}

/// Encode a graph to bytes in the given format.
pub fn encode(graph: &CallGraph, format: ArtifactFormat) -> Result<Vec<u8>> {
    match format {
        ArtifactFormat::Binary => bincode::serialize(graph)
            .map_err(|e| CallbenchError::MalformedGraph(format!("graph does not encode: {}", e))),
        ArtifactFormat::Json => serde_json::to_vec_pretty(graph)
            .map_err(|e| CallbenchError::MalformedGraph(format!("graph does not encode: {}", e))),
    }
}

/// Decode bytes back into a validated graph.
pub fn decode(bytes: &[u8], format: ArtifactFormat) -> Result<CallGraph> {
    let graph: CallGraph = match format {
        ArtifactFormat::Binary => bincode::deserialize(bytes).map_err(|e| {
            CallbenchError::MalformedGraph(format!("artifact does not decode: {}", e))
        })?,
        ArtifactFormat::Json => serde_json::from_slice(bytes).map_err(|e| {
            CallbenchError::MalformedGraph(format!("artifact does not decode: {}", e))
        })?,
    };
    graph.validate()?;
    Ok(graph)
}

/// Validate and persist a graph to `path`, format chosen by extension.
pub fn save(graph: &CallGraph, path: &Path) -> Result<()> {
    let format = ArtifactFormat::from_path(path)?;
    graph.validate()?;
    let bytes = encode(graph, format)?;
    fs::write(path, bytes).map_err(|e| CallbenchError::file_system(path, e))
}

/// Load and validate a graph artifact from `path`.
pub fn load(path: &Path) -> Result<CallGraph> {
    let format = ArtifactFormat::from_path(path)?;
    let bytes = fs::read(path).map_err(|e| CallbenchError::file_system(path, e))?;
    decode(&bytes, format)
}
