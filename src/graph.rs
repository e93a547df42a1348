//!
//! Labeled directed multigraph given as a node list and an edge list
//!
pub mod adjacency;
pub mod float_weight;
pub mod floyd;
pub mod mocks;
pub mod random;

use crate::common::{Dist, Label};
use crate::error::Result;
use crate::matrix::Matrix;
use float_weight::FloatWeight;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

/// Directed edge `source -> target` with its weight
///
/// `source` and `target` are 0-based node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge {
    pub source: usize,
    pub target: usize,
    pub weight: Dist,
}

impl WeightedEdge {
    pub fn new(source: usize, target: usize, weight: Dist) -> Self {
        WeightedEdge {
            source,
            target,
            weight,
        }
    }
}

impl From<(usize, usize, Dist)> for WeightedEdge {
    fn from((source, target, weight): (usize, usize, Dist)) -> Self {
        WeightedEdge::new(source, target, weight)
    }
}

///
/// Graph for all-pairs shortest paths
///
/// * `labels[i]` is the label of node `i`
/// * `edges` can contain parallel edges and self-loops
///
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub labels: Vec<Label>,
    pub edges: Vec<WeightedEdge>,
}

impl Graph {
    pub fn new(labels: Vec<Label>, edges: Vec<WeightedEdge>) -> Self {
        Graph { labels, edges }
    }
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    ///
    /// Dense adjacency matrix of this graph.
    /// See `adjacency::build_adjacency_matrix`.
    ///
    pub fn to_adjacency_matrix(&self) -> Result<Matrix> {
        adjacency::build_adjacency_matrix(self.node_count(), self.edges.iter().copied())
    }
}

impl<N, E> From<&DiGraph<N, E>> for Graph
where
    N: std::fmt::Display,
    E: FloatWeight,
{
    fn from(graph: &DiGraph<N, E>) -> Self {
        let labels = graph
            .node_indices()
            .map(|node| graph[node].to_string())
            .collect();
        let edges = graph
            .edge_references()
            .map(|edge| {
                WeightedEdge::new(
                    edge.source().index(),
                    edge.target().index(),
                    edge.weight().float_weight(),
                )
            })
            .collect();
        Graph { labels, edges }
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            writeln!(f, "N\t{}\t{}", i, label)?;
        }
        for e in self.edges.iter() {
            writeln!(f, "E\t{}\t{}\t{}", e.source, e.target, e.weight)?;
        }
        Ok(())
    }
}
