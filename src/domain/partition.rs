//! File Partitioning
//!
//! Assigns graph nodes to output translation units. The scheme is contiguous
//! blocks over the stable node ordering: deterministic, order-preserving, and
//! guaranteed to leave no partition empty.

use crate::domain::callgraph::CallGraph;

/// A non-empty subset of node ids assigned to one translation unit.
/// Partitions live only for the duration of one emission run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePartition {
    /// Zero-based partition number, also the emitted file stem (`0.c`, ...).
    pub index: usize,
    /// Node ids in this partition, in graph order.
    pub node_ids: Vec<u32>,
}

/// Split the graph's nodes into `num_files` contiguous blocks.
///
/// `num_files` is clamped to `[1, node_count]`. Block sizes differ by at most
/// one: the first `node_count % k` blocks take the extra node, so re-running
/// with the same graph and `num_files` reproduces the same assignment.
pub fn partition_nodes(graph: &CallGraph, num_files: usize) -> Vec<FilePartition> {
    let n = graph.nodes.len();
    let k = num_files.clamp(1, n.max(1));
    let base = n / k;
    let extra = n % k;

    let mut partitions = Vec::with_capacity(k);
    let mut offset = 0;
    for index in 0..k {
        let size = base + usize::from(index < extra);
        let node_ids = graph.nodes[offset..offset + size]
            .iter()
            .map(|node| node.id)
            .collect();
        partitions.push(FilePartition { index, node_ids });
        offset += size;
    }
    partitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::callgraph::GraphBuilder;

    fn star_graph(leaves: u32) -> CallGraph {
        let mut builder = GraphBuilder::new();
        let root = builder.add_node(0);
        for _ in 0..leaves {
            let leaf = builder.add_node(1);
            builder.add_call(root, leaf);
        }
        builder.freeze(root).unwrap()
    }

    #[test]
    fn test_partitions_cover_all_nodes_without_overlap() {
        let graph = star_graph(9);
        for k in 1..=graph.node_count() {
            let partitions = partition_nodes(&graph, k);
            assert_eq!(partitions.len(), k);

            let mut seen = Vec::new();
            for p in &partitions {
                assert!(!p.node_ids.is_empty(), "partition {} is empty", p.index);
                seen.extend(p.node_ids.iter().copied());
            }
            seen.sort_unstable();
            let expected: Vec<u32> = (0..graph.node_count() as u32).collect();
            assert_eq!(seen, expected, "k = {}", k);
        }
    }

    #[test]
    fn test_block_sizes_differ_by_at_most_one() {
        let graph = star_graph(10); // 11 nodes
        let partitions = partition_nodes(&graph, 4);
        let sizes: Vec<usize> = partitions.iter().map(|p| p.node_ids.len()).collect();
        assert_eq!(sizes, vec![3, 3, 3, 2]);
    }

    #[test]
    fn test_num_files_is_clamped() {
        let graph = star_graph(2); // 3 nodes
        assert_eq!(partition_nodes(&graph, 0).len(), 1);
        assert_eq!(partition_nodes(&graph, 100).len(), 3);
    }

    #[test]
    fn test_assignment_is_deterministic() {
        let graph = star_graph(7);
        let a = partition_nodes(&graph, 3);
        let b = partition_nodes(&graph, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_node_graph_single_partition() {
        let graph = star_graph(0);
        let partitions = partition_nodes(&graph, 1);
        assert_eq!(partitions.len(), 1);
        assert_eq!(partitions[0].node_ids, vec![0]);
    }
}
