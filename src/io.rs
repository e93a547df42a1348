//!
//! Graph description files and the distance table
//!
pub mod graphml;
pub mod json;
pub mod tsv;

use crate::error::Result;
use crate::graph::Graph;
use std::path::Path;

/// File format of a graph description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Graphml,
    Json,
}

impl GraphFormat {
    ///
    /// `*.json` is JSON, and any other file is GraphML.
    ///
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => GraphFormat::Json,
            _ => GraphFormat::Graphml,
        }
    }
}

impl Graph {
    ///
    /// Read a graph file in the format of its extension.
    ///
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        match GraphFormat::from_path(&path) {
            GraphFormat::Graphml => Graph::from_graphml_file(path),
            GraphFormat::Json => Graph::from_json_file(path),
        }
    }
    ///
    /// Write a graph file in the format of its extension.
    ///
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        match GraphFormat::from_path(&path) {
            GraphFormat::Graphml => self.to_graphml_file(path),
            GraphFormat::Json => self.to_json_file(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::mocks::mock_triangle;

    #[test]
    fn format_from_path() {
        assert_eq!(GraphFormat::from_path("g.json"), GraphFormat::Json);
        assert_eq!(GraphFormat::from_path("dir/g.JSON"), GraphFormat::Json);
        assert_eq!(GraphFormat::from_path("g.graphml"), GraphFormat::Graphml);
        assert_eq!(GraphFormat::from_path("g.xml"), GraphFormat::Graphml);
        assert_eq!(GraphFormat::from_path("g"), GraphFormat::Graphml);
    }

    #[test]
    fn file_dispatch() {
        let g = mock_triangle();
        let dir = tempfile::tempdir().unwrap();
        for name in ["g.json", "g.graphml"].iter() {
            let path = dir.path().join(name);
            g.to_file(&path).unwrap();
            let s = std::fs::read_to_string(&path).unwrap();
            assert_eq!(s.starts_with("<?xml"), name.ends_with(".graphml"));
            let g2 = Graph::from_file(&path).unwrap();
            assert_eq!(g.labels, g2.labels);
            assert_eq!(g.edges, g2.edges);
        }
    }
}
