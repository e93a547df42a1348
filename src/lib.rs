//!
//! All-pairs shortest paths on a weighted directed multigraph
//! by Floyd-Warshall algorithm.
//!
//! ```
//! use allpairs::prelude::*;
//!
//! let m = build_adjacency_matrix(3, vec![(0, 1, 1.0), (1, 2, 2.0), (0, 2, 10.0)]).unwrap();
//! let d = solve(&m).unwrap();
//! assert_eq!(d[(0, 2)], 3.0);
//! assert_eq!(d[(2, 0)], f64::INFINITY);
//! ```
//!
pub mod cli;
pub mod common;
pub mod compare;
pub mod error;
pub mod graph;
pub mod io;
pub mod matrix;
pub mod prelude;
pub mod utils;

#[cfg(test)]
#[macro_use]
extern crate approx;
