//!
//! Run the sequential and the parallel solvers on the same input and compare
//! both the running time and the results.
//!
use crate::error::Result;
use crate::graph::floyd::{solve, solve_parallel};
use crate::matrix::Matrix;
use crate::utils::timer;
use log::{info, warn};
use std::time::Duration;

/// Result of `compare_solvers`
#[derive(Clone, Debug)]
pub struct Comparison {
    /// output of the sequential solver
    pub dists: Matrix,
    pub sequential_time: Duration,
    pub parallel_time: Duration,
    /// true if two outputs are the same bit-by-bit
    pub is_identical: bool,
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "n={} sequential={:.1}sec parallel={:.1}sec identical={}",
            self.dists.n(),
            self.sequential_time.as_secs_f64(),
            self.parallel_time.as_secs_f64(),
            self.is_identical,
        )
    }
}

///
/// Solve `adjacency` with both `solve` and `solve_parallel`.
///
pub fn compare_solvers(adjacency: &Matrix) -> Result<Comparison> {
    let (sequential, sequential_time) = timer(|| solve(adjacency));
    let dists = sequential?;
    info!(
        "sequential calculation time: {:.1} sec",
        sequential_time.as_secs_f64()
    );

    let (parallel, parallel_time) = timer(|| solve_parallel(adjacency));
    let parallel = parallel?;
    info!(
        "parallel calculation time: {:.1} sec",
        parallel_time.as_secs_f64()
    );

    let is_identical = dists.is_bit_identical(&parallel);
    if !is_identical {
        warn!("sequential and parallel results are different");
    }
    Ok(Comparison {
        dists,
        sequential_time,
        parallel_time,
        is_identical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::mocks::mock_random;

    #[test]
    fn compare() {
        let g = mock_random(50, 400, 7);
        let m = g.to_adjacency_matrix().unwrap();
        let c = compare_solvers(&m).unwrap();
        println!("{}", c);
        assert!(c.is_identical);
        assert_eq!(c.dists, solve(&m).unwrap());
    }
}
