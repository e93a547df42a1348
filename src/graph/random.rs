//!
//! Synthetic random multigraph for tests and benchmarks
//!
use super::{Graph, WeightedEdge};
use log::warn;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Parameters of `generate`
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// number of nodes
    pub n_nodes: usize,
    /// number of edges (including self-loops and parallel edges)
    pub n_edges: usize,
    /// edge weight is sampled from `[0, max_weight)`
    pub max_weight: f64,
    /// seed of the rng
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            n_nodes: 300,
            n_edges: 5000,
            max_weight: 50.0,
            seed: 293,
        }
    }
}

///
/// generate a random directed multigraph from the config
///
/// Endpoints of each edge are uniform over all nodes, so the graph can have
/// self-loops and parallel edges. Node `i` is labeled `n{i}`.
///
pub fn generate(config: &GeneratorConfig) -> Graph {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
    let labels = (0..config.n_nodes).map(|i| format!("n{}", i)).collect();
    if config.n_nodes == 0 && config.n_edges > 0 {
        warn!("no nodes, {} edges are not generated", config.n_edges);
        return Graph::new(labels, Vec::new());
    }
    let edges = (0..config.n_edges)
        .map(|_| {
            let source = rng.gen_range(0..config.n_nodes);
            let target = rng.gen_range(0..config.n_nodes);
            let weight = rng.gen::<f64>() * config.max_weight;
            WeightedEdge::new(source, target, weight)
        })
        .collect();
    Graph::new(labels, edges)
}
