use super::random::{generate, GeneratorConfig};
use super::{Graph, WeightedEdge};

///
/// Sample 3-node graph
///
/// ```text
///     1       2
/// a -----> b -----> c
///  \               ^
///   -------10------
/// ```
///
pub fn mock_triangle() -> Graph {
    Graph::new(
        vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
        vec![
            WeightedEdge::new(0, 1, 1.0),
            WeightedEdge::new(1, 2, 2.0),
            WeightedEdge::new(0, 2, 10.0),
        ],
    )
}

///
/// Linear chain `n0 -> n1 -> ... -> n{n-1}` with the same weight
///
pub fn mock_chain(n: usize, weight: f64) -> Graph {
    let labels = (0..n).map(|i| format!("n{}", i)).collect();
    let edges = (1..n)
        .map(|i| WeightedEdge::new(i - 1, i, weight))
        .collect();
    Graph::new(labels, edges)
}

///
/// Random graph with `n_nodes` and `n_edges` from seed
///
pub fn mock_random(n_nodes: usize, n_edges: usize, seed: u64) -> Graph {
    generate(&GeneratorConfig {
        n_nodes,
        n_edges,
        seed,
        ..GeneratorConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_chain() {
        let g = mock_chain(4, 2.0);
        println!("{}", g);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edges[2], WeightedEdge::new(2, 3, 2.0));

        let g = mock_chain(0, 2.0);
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_mock_triangle() {
        let g = mock_triangle();
        assert_eq!(g.labels, vec!["a", "b", "c"]);
        assert_eq!(g.edge_count(), 3);
    }
}
