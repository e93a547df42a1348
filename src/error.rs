//!
//! Errors of matrix construction, shortest path computation and graph I/O
//!
use crate::common::Dist;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An edge refers a node outside `0..node_count`
    #[error("invalid node index in edge {from}->{to} (node_count={node_count})")]
    InvalidIndex {
        from: usize,
        to: usize,
        node_count: usize,
    },

    /// The matrix is not square, or its rows have different lengths
    #[error("malformed matrix: row {row} has {found} entries but {expected} are expected")]
    MalformedInput {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Edge weight that breaks the infinity arithmetic (NaN or -inf)
    #[error("invalid weight {weight} of edge {from}->{to}")]
    InvalidWeight {
        from: usize,
        to: usize,
        weight: Dist,
    },

    /// Matrix entry that breaks the infinity arithmetic (NaN or -inf)
    #[error("non-finite entry {value} at ({row}, {column})")]
    NonFiniteEntry { row: usize, column: usize, value: Dist },

    /// A finite path length that is out of the range of `Dist`
    #[error("distance of path {row}->{column} via {via} overflows")]
    Overflow { row: usize, column: usize, via: usize },

    #[error("edge refers unknown node `{0}`")]
    UnknownNode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Xml(#[from] roxmltree::Error),

    #[error("malformed graphml: {0}")]
    Graphml(String),
}

pub type Result<T> = std::result::Result<T, Error>;
