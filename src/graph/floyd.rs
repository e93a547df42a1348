//!
//! Floyd-Warshall algorithm
//! to find all-pairs shortest distances
//!
//! `D[i][j] = min(D[i][j], D[i][k] + D[k][j])` for `k = 0..n` (outermost) and all `(i, j)`.
//!
//! The input graph must not have a negative cycle. It is not checked, and
//! the output is meaningless if it has one.
//!
//! A sum of two finite distances that is out of the range of `Dist` is an
//! `Overflow` error, instead of being stored as `-inf` or mistaken for `INF`.
//!
use crate::common::{Dist, INF};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use log::debug;
use rayon::prelude::*;

///
/// All-pairs shortest distances of the adjacency matrix.
///
/// Returns a newly allocated matrix; `adjacency` is not modified.
///
/// # Errors
///
/// * `NonFiniteEntry` if `adjacency` has NaN or `-inf`
/// * `Overflow` if `D[i][k] + D[k][j]` of finite distances is not finite
///
pub fn solve(adjacency: &Matrix) -> Result<Matrix> {
    adjacency.validate_entries()?;
    let n = adjacency.n();
    debug!("floyd_warshall n={}", n);

    let mut dists = adjacency.clone();
    let d = dists.as_mut_slice();
    for k in 0..n {
        for i in 0..n {
            let d_ik = d[n * i + k];
            if d_ik == INF {
                // no path i->k, so no update in this row
                continue;
            }
            for j in 0..n {
                let d_kj = d[n * k + j];
                let z = d_ik + d_kj;
                if z.is_infinite() && d_kj.is_finite() {
                    return Err(Error::Overflow {
                        row: i,
                        column: j,
                        via: k,
                    });
                }
                if z < d[n * i + j] {
                    d[n * i + j] = z;
                }
            }
        }
    }
    Ok(dists)
}

///
/// All-pairs shortest distances from nested rows.
///
/// # Errors
///
/// * `MalformedInput` if `rows` is not square or ragged, before any computation
/// * `NonFiniteEntry` if some entry is NaN or `-inf`
/// * `Overflow` as in `solve`
///
pub fn solve_rows<R: AsRef<[Dist]>>(rows: &[R]) -> Result<Matrix> {
    let adjacency = Matrix::from_rows(rows)?;
    solve(&adjacency)
}

///
/// Multi-threaded version of `solve`, with the same output bit-by-bit.
///
/// In each k-iteration the rows are relaxed in parallel against a snapshot
/// of row `k`. Row `k` and column `k` do not change in the k-iteration
/// (because `D[k][k] >= 0`), so the snapshot equals the in-place values.
/// The k-iterations are sequential; `try_for_each` returns only after every row is done.
///
/// If some path overflows, an `Overflow` error is returned as in `solve`, but
/// the reported pair is not always the first one in the sequential order.
///
pub fn solve_parallel(adjacency: &Matrix) -> Result<Matrix> {
    adjacency.validate_entries()?;
    let n = adjacency.n();
    debug!(
        "floyd_warshall_parallel n={} n_threads={}",
        n,
        rayon::current_num_threads()
    );

    let mut dists = adjacency.clone();
    if n == 0 {
        return Ok(dists);
    }
    let mut row_k: Vec<Dist> = vec![INF; n];
    for k in 0..n {
        row_k.copy_from_slice(dists.row(k));
        let row_k = &row_k;
        dists
            .as_mut_slice()
            .par_chunks_mut(n)
            .enumerate()
            .try_for_each(|(i, row)| {
                let d_ik = row[k];
                if d_ik == INF {
                    return Ok(());
                }
                for (j, (d_ij, &d_kj)) in row.iter_mut().zip(row_k.iter()).enumerate() {
                    let z = d_ik + d_kj;
                    if z.is_infinite() && d_kj.is_finite() {
                        return Err(Error::Overflow {
                            row: i,
                            column: j,
                            via: k,
                        });
                    }
                    if z < *d_ij {
                        *d_ij = z;
                    }
                }
                Ok(())
            })?;
    }
    Ok(dists)
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::adjacency::build_adjacency_matrix;
    use crate::graph::mocks::{mock_chain, mock_random};

    #[test]
    fn floyd_three_nodes() {
        let m = build_adjacency_matrix(3, vec![(0, 1, 1.0), (1, 2, 2.0), (0, 2, 10.0)]).unwrap();
        let d = solve(&m).unwrap();
        println!("{}", d);
        assert_eq!(d[(0, 1)], 1.0);
        assert_eq!(d[(1, 2)], 2.0);
        // 0->1->2 is shorter than 0->2
        assert_eq!(d[(0, 2)], 3.0);
        for i in 0..3 {
            assert_eq!(d[(i, i)], 0.0);
        }
        assert_eq!(d[(1, 0)], INF);
        assert_eq!(d[(2, 0)], INF);
        assert_eq!(d[(2, 1)], INF);
        // input is untouched
        assert_eq!(m[(0, 2)], 10.0);
    }

    #[test]
    fn floyd_disconnected() {
        let m = build_adjacency_matrix(2, Vec::<(usize, usize, f64)>::new()).unwrap();
        let d = solve(&m).unwrap();
        assert_eq!(d[(0, 1)], INF);
        assert_eq!(d[(1, 0)], INF);
        assert_eq!(d[(0, 0)], 0.0);
        assert_eq!(d[(1, 1)], 0.0);
        for i in 0..2 {
            for j in 0..2 {
                assert!(!d[(i, j)].is_nan());
            }
        }
    }

    #[test]
    fn floyd_empty() {
        let m = Matrix::unconnected(0);
        assert!(solve(&m).unwrap().is_empty());
        assert!(solve_parallel(&m).unwrap().is_empty());
    }

    #[test]
    fn floyd_k_must_be_outermost() {
        // 0->3->2->1 has to use intermediate nodes in the order 3 then 2,
        // which a (i, j, k) loop order misses.
        let m = build_adjacency_matrix(4, vec![(0, 3, 1.0), (3, 2, 1.0), (2, 1, 1.0), (0, 1, 10.0)])
            .unwrap();
        let d = solve(&m).unwrap();
        assert_eq!(d[(0, 1)], 3.0);
        assert_eq!(d[(0, 2)], 2.0);
        assert_eq!(d[(3, 1)], 2.0);
    }

    #[test]
    fn floyd_negative_edges() {
        let m = build_adjacency_matrix(3, vec![(0, 1, 4.0), (0, 2, 5.0), (2, 1, -3.0)]).unwrap();
        let d = solve(&m).unwrap();
        assert_eq!(d[(0, 1)], 2.0);
        assert_eq!(d[(2, 1)], -3.0);
        assert_eq!(d[(1, 2)], INF);
    }

    #[test]
    fn floyd_fractional() {
        let m = build_adjacency_matrix(3, vec![(0, 1, 0.1), (1, 2, 0.2), (0, 2, 0.5)]).unwrap();
        let d = solve(&m).unwrap();
        assert_abs_diff_eq!(d[(0, 2)], 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(d, solve_parallel(&m).unwrap());
    }

    #[test]
    fn floyd_chain() {
        let g = mock_chain(5, 1.5);
        let d = solve(&g.to_adjacency_matrix().unwrap()).unwrap();
        for i in 0..5 {
            for j in 0..5 {
                if i <= j {
                    assert_eq!(d[(i, j)], (j - i) as f64 * 1.5);
                } else {
                    assert_eq!(d[(i, j)], INF);
                }
            }
        }
    }

    #[test]
    fn floyd_rows() {
        let d = solve_rows(&[vec![0.0, 8.0, 2.0], vec![1.0, 0.0, 9.0], vec![4.0, 5.0, 0.0]])
            .unwrap();
        assert_eq!(
            d.to_rows(),
            vec![
                vec![0.0, 7.0, 2.0],
                vec![1.0, 0.0, 3.0],
                vec![4.0, 5.0, 0.0]
            ]
        );

        let r = solve_rows(&[vec![0.0, 1.0], vec![1.0]]);
        assert!(matches!(r, Err(Error::MalformedInput { .. })));
        let r = solve_rows(&[vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 2.0]]);
        assert!(matches!(r, Err(Error::MalformedInput { .. })));
    }

    #[test]
    fn floyd_non_finite_input() {
        let mut m = Matrix::unconnected(3);
        m[(0, 1)] = f64::NAN;
        assert!(matches!(solve(&m), Err(Error::NonFiniteEntry { .. })));
        assert!(matches!(
            solve_parallel(&m),
            Err(Error::NonFiniteEntry { .. })
        ));
    }

    #[test]
    fn floyd_overflow() {
        // 0->1->2 exists but its length 2e308 is not representable
        let m = build_adjacency_matrix(3, vec![(0, 1, 1e308), (1, 2, 1e308)]).unwrap();
        assert!(matches!(
            solve(&m),
            Err(Error::Overflow {
                row: 0,
                column: 2,
                via: 1
            })
        ));
        assert!(matches!(solve_parallel(&m), Err(Error::Overflow { .. })));

        // negative overflow must not leak -inf into the output
        let m = build_adjacency_matrix(
            4,
            vec![(0, 1, -1e308), (1, 2, -1e308), (2, 3, 5.0)],
        )
        .unwrap();
        assert!(matches!(
            solve(&m),
            Err(Error::Overflow {
                row: 0,
                column: 2,
                via: 1
            })
        ));
        assert!(matches!(solve_parallel(&m), Err(Error::Overflow { .. })));
    }

    #[test]
    fn floyd_large_weights_without_overflow() {
        let m = build_adjacency_matrix(3, vec![(0, 1, 8e307), (1, 2, 8e307)]).unwrap();
        let d = solve(&m).unwrap();
        assert_eq!(d[(0, 2)], 1.6e308);
        assert!(d.iter().all(|(_, _, x)| x == INF || x.is_finite()));
        assert!(d.is_bit_identical(&solve_parallel(&m).unwrap()));
        // output is a valid input again
        assert!(solve(&d).is_ok());
    }

    #[test]
    fn floyd_parallel_is_identical() {
        for seed in 0..5 {
            let g = mock_random(40, 300, seed);
            let m = g.to_adjacency_matrix().unwrap();
            let d1 = solve(&m).unwrap();
            let d2 = solve_parallel(&m).unwrap();
            assert!(d1.is_bit_identical(&d2));
        }
    }
}
