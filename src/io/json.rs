//!
//! Graph description serialization
//!
//! ```text
//! {
//!   "nodes": [{"id": "n0", "label": "a"}, {"id": "n1"}],
//!   "edges": [{"source": "n0", "target": "n1", "weight": 1.5}]
//! }
//! ```
//!
//! Node ids are mapped to indices in the order of `nodes`.
//! If `label` is missing, the id is used as the label.
//!
//! JSON has no infinity, so edges of weight `INF` ("no edge") are not written.
//!
use crate::common::{Dist, Label, INF};
use crate::error::{Error, Result};
use crate::graph::{Graph, WeightedEdge};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::{fs, io};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphAsJson {
    pub nodes: Vec<NodeAsJson>,
    pub edges: Vec<EdgeAsJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAsJson {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeAsJson {
    pub source: String,
    pub target: String,
    pub weight: Dist,
}

impl Graph {
    ///
    /// Convert into the serializable struct. Node `i` gets id `n{i}`.
    ///
    /// Edges with `INF` weight are skipped; the adjacency matrix is the same
    /// with or without them.
    ///
    pub fn to_json_struct(&self) -> GraphAsJson {
        let id = |i: usize| format!("n{}", i);
        let nodes = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| NodeAsJson {
                id: id(i),
                label: Some(label.clone()),
            })
            .collect();
        let edges = self
            .edges
            .iter()
            .filter(|e| e.weight != INF)
            .map(|e| EdgeAsJson {
                source: id(e.source),
                target: id(e.target),
                weight: e.weight,
            })
            .collect();
        GraphAsJson { nodes, edges }
    }
    ///
    /// Convert from the deserialized struct.
    ///
    /// # Errors
    ///
    /// * `UnknownNode` if an edge refers an id not in `nodes`
    ///
    pub fn from_json_struct(j: GraphAsJson) -> Result<Self> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        for (i, node) in j.nodes.iter().enumerate() {
            if index.contains_key(node.id.as_str()) {
                warn!("duplicated node id `{}`, the first one is used", node.id);
            } else {
                index.insert(node.id.as_str(), i);
            }
        }
        let lookup = |id: &str| {
            index
                .get(id)
                .copied()
                .ok_or_else(|| Error::UnknownNode(id.to_owned()))
        };
        let edges = j
            .edges
            .iter()
            .map(|e| {
                Ok(WeightedEdge::new(
                    lookup(&e.source)?,
                    lookup(&e.target)?,
                    e.weight,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        let labels = j
            .nodes
            .iter()
            .map(|node| node.label.clone().unwrap_or_else(|| node.id.clone()))
            .collect();
        Ok(Graph::new(labels, edges))
    }
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json_struct())?)
    }
    pub fn from_json(json: &str) -> Result<Self> {
        let j: GraphAsJson = serde_json::from_str(json)?;
        Graph::from_json_struct(j)
    }
    // file related
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = fs::File::create(path)?;
        let mut writer = io::BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.to_json_struct())?;
        Ok(())
    }
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = fs::File::open(&path)?;
        let reader = io::BufReader::new(file);
        let j: GraphAsJson = serde_json::from_reader(reader)?;
        info!(
            "loaded {} n_nodes={} n_edges={}",
            path.as_ref().display(),
            j.nodes.len(),
            j.edges.len()
        );
        Graph::from_json_struct(j)
    }
}
