//!
//! globally-available parts
//!
pub use crate::common::{Dist, INF};
pub use crate::error::{Error, Result};
pub use crate::graph::adjacency::build_adjacency_matrix;
pub use crate::graph::floyd::{solve, solve_parallel, solve_rows};
pub use crate::graph::{Graph, WeightedEdge};
pub use crate::matrix::Matrix;
