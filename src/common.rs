//!
//! Shared types and short-hands
//!
pub use petgraph::graph::NodeIndex;

/// Type of edge weights and path distances
///
/// `INF` is used as "no path/no edge".
pub type Dist = f64;

/// Distance of unreachable node pair
pub const INF: Dist = f64::INFINITY;

/// Label of a node (not required to be unique)
pub type Label = String;

///
/// A distance that keeps `min` and `+` well defined together with `INF`.
///
/// NaN and `-inf` are rejected because `-inf + INF` is NaN and NaN makes every
/// comparison false.
///
pub fn is_valid_dist(x: Dist) -> bool {
    !x.is_nan() && x != f64::NEG_INFINITY
}

///
/// short-hand of `NodeIndex::new`
///
pub fn ni(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}
