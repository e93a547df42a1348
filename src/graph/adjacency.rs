//!
//! Dense adjacency matrix construction
//!
use super::WeightedEdge;
use crate::common::is_valid_dist;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use log::{debug, warn};

///
/// Counts of edges seen in `build_adjacency_matrix`
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdjacencyStats {
    /// all edges
    pub n_edges: usize,
    /// ignored self-loop edges
    pub n_self_loops: usize,
    /// parallel edges collapsed into an earlier edge with the same endpoints
    pub n_collapsed: usize,
}

///
/// Build `node_count x node_count` adjacency matrix `M` from edges.
///
/// * `M[i][i] = 0`
/// * `M[i][j] = min(weights of all edges i->j)`
/// * `M[i][j] = INF` if there is no edge i->j
///
/// Self-loops `i->i` are ignored and never change the diagonal, even if the
/// weight is negative.
///
/// # Errors
///
/// * `InvalidIndex` if an edge endpoint is not in `0..node_count`
/// * `InvalidWeight` if an edge weight is NaN or `-inf`
///
pub fn build_adjacency_matrix<I, T>(node_count: usize, edges: I) -> Result<Matrix>
where
    I: IntoIterator<Item = T>,
    T: Into<WeightedEdge>,
{
    let (m, stats) = build_adjacency_matrix_with_stats(node_count, edges)?;
    if stats.n_self_loops > 0 {
        warn!("{} self-loop edges are ignored", stats.n_self_loops);
    }
    debug!(
        "adjacency n_nodes={} n_edges={} n_self_loops={} n_collapsed={}",
        node_count, stats.n_edges, stats.n_self_loops, stats.n_collapsed
    );
    Ok(m)
}

///
/// `build_adjacency_matrix` that also returns the edge counts.
///
/// An edge is counted as collapsed if an earlier edge has the same endpoints,
/// whatever the weights are (`INF` included).
///
pub fn build_adjacency_matrix_with_stats<I, T>(
    node_count: usize,
    edges: I,
) -> Result<(Matrix, AdjacencyStats)>
where
    I: IntoIterator<Item = T>,
    T: Into<WeightedEdge>,
{
    let mut m = Matrix::unconnected(node_count);
    let mut has_edge = vec![false; node_count * node_count];
    let mut stats = AdjacencyStats::default();

    for edge in edges {
        let WeightedEdge {
            source,
            target,
            weight,
        } = edge.into();
        stats.n_edges += 1;

        if source >= node_count || target >= node_count {
            return Err(Error::InvalidIndex {
                from: source,
                to: target,
                node_count,
            });
        }
        if !is_valid_dist(weight) {
            return Err(Error::InvalidWeight {
                from: source,
                to: target,
                weight,
            });
        }
        if source == target {
            stats.n_self_loops += 1;
            continue;
        }

        let seen = &mut has_edge[node_count * source + target];
        if *seen {
            stats.n_collapsed += 1;
        }
        *seen = true;

        let current = &mut m[(source, target)];
        if weight < *current {
            *current = weight;
        }
    }
    Ok((m, stats))
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::INF;

    #[test]
    fn adjacency_basic() {
        let m = build_adjacency_matrix(3, vec![(0, 1, 1.0), (1, 2, 2.0), (0, 2, 10.0)]).unwrap();
        println!("{}", m);
        assert_eq!(m.n(), 3);
        for i in 0..3 {
            assert_eq!(m[(i, i)], 0.0);
        }
        assert_eq!(m[(0, 1)], 1.0);
        assert_eq!(m[(1, 2)], 2.0);
        assert_eq!(m[(0, 2)], 10.0);
        assert_eq!(m[(1, 0)], INF);
        assert_eq!(m[(2, 0)], INF);
        assert_eq!(m[(2, 1)], INF);
    }

    #[test]
    fn adjacency_parallel_edges() {
        let m = build_adjacency_matrix(2, vec![(0, 1, 5.0), (0, 1, 2.0)]).unwrap();
        assert_eq!(m[(0, 1)], 2.0);
        // order independent
        let m = build_adjacency_matrix(2, vec![(0, 1, 2.0), (0, 1, 5.0)]).unwrap();
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], INF);
    }

    #[test]
    fn adjacency_self_loop() {
        let m = build_adjacency_matrix(3, vec![(2, 2, -3.0), (1, 1, 4.0)]).unwrap();
        assert_eq!(m[(2, 2)], 0.0);
        assert_eq!(m[(1, 1)], 0.0);
        assert_eq!(m, Matrix::unconnected(3));
    }

    #[test]
    fn adjacency_invalid_index() {
        let r = build_adjacency_matrix(3, vec![(0, 1, 1.0), (0, 5, 1.0)]);
        assert!(matches!(
            r,
            Err(Error::InvalidIndex {
                from: 0,
                to: 5,
                node_count: 3
            })
        ));
        let r = build_adjacency_matrix(0, vec![(0, 0, 1.0)]);
        assert!(matches!(r, Err(Error::InvalidIndex { .. })));
    }

    #[test]
    fn adjacency_invalid_weight() {
        let r = build_adjacency_matrix(2, vec![(0, 1, f64::NAN)]);
        assert!(matches!(r, Err(Error::InvalidWeight { from: 0, to: 1, .. })));
        let r = build_adjacency_matrix(2, vec![(1, 0, f64::NEG_INFINITY)]);
        assert!(matches!(r, Err(Error::InvalidWeight { from: 1, to: 0, .. })));
        // INF weight is same as no edge
        let m = build_adjacency_matrix(2, vec![(1, 0, INF)]).unwrap();
        assert_eq!(m[(1, 0)], INF);
    }

    #[test]
    fn adjacency_stats() {
        // the parallel edge after an INF edge is collapsed too
        let (m, stats) = build_adjacency_matrix_with_stats(
            3,
            vec![(0, 1, INF), (0, 1, 3.0), (1, 2, 1.0), (1, 2, 2.0), (1, 2, 0.5), (2, 2, 1.0)],
        )
        .unwrap();
        assert_eq!(m[(0, 1)], 3.0);
        assert_eq!(m[(1, 2)], 0.5);
        assert_eq!(
            stats,
            AdjacencyStats {
                n_edges: 6,
                n_self_loops: 1,
                n_collapsed: 3,
            }
        );

        let (_, stats) =
            build_adjacency_matrix_with_stats(2, vec![(0, 1, INF), (0, 1, INF)]).unwrap();
        assert_eq!(stats.n_collapsed, 1);
        let (_, stats) = build_adjacency_matrix_with_stats(2, vec![(0, 1, 1.0), (1, 0, 1.0)]).unwrap();
        assert_eq!(stats.n_collapsed, 0);
    }

    #[test]
    fn adjacency_empty() {
        let edges: Vec<WeightedEdge> = vec![];
        let m = build_adjacency_matrix(0, edges).unwrap();
        assert!(m.is_empty());
    }
}
