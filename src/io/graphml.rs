//!
//! GraphML graph description
//!
//! ```text
//! <graphml xmlns="http://graphml.graphdrawing.org/xmlns">
//!   <key id="weight" for="edge" attr.name="weight" attr.type="double"/>
//!   <key id="label" for="node" attr.name="label" attr.type="string"/>
//!   <graph id="G" edgedefault="directed">
//!     <node id="n0"><data key="label">a</data></node>
//!     <node id="n1"/>
//!     <edge source="n0" target="n1"><data key="weight">1.5</data></edge>
//!   </graph>
//! </graphml>
//! ```
//!
//! Attributes are found by `attr.name` of the `<key>` declarations (`weight`
//! for edges, `label` for nodes), or by the key id if not declared.
//! Node ids are mapped to indices in the document order, and the id is used
//! as the label if the node has no `label`. Every edge is directed.
//!
use crate::common::{Dist, Label};
use crate::error::{Error, Result};
use crate::graph::{Graph, WeightedEdge};
use log::{info, warn};
use roxmltree::{Document, Node};
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::{fs, io};

/// `<key>` of an attribute
#[derive(Debug, Clone, PartialEq)]
struct Key {
    id: String,
    default: Option<String>,
}

///
/// Find the key of attribute `name` for elements `domain` (`node` or `edge`).
///
fn find_key(root: Node, domain: &str, name: &str) -> Key {
    let key = root.children().find(|c| {
        c.has_tag_name("key")
            && c.attribute("attr.name") == Some(name)
            && matches!(c.attribute("for"), Some(d) if d == domain || d == "all")
    });
    match key {
        Some(key) => Key {
            id: key.attribute("id").unwrap_or(name).to_owned(),
            default: key
                .children()
                .find(|c| c.has_tag_name("default"))
                .and_then(|c| c.text())
                .map(|t| t.to_owned()),
        },
        None => Key {
            id: name.to_owned(),
            default: None,
        },
    }
}

///
/// Text of `<data key="...">` of the element, or the default of the key.
///
fn data_value<'a>(element: Node<'a, '_>, key: &'a Key) -> Option<&'a str> {
    element
        .children()
        .find(|c| c.has_tag_name("data") && c.attribute("key") == Some(key.id.as_str()))
        .map(|c| c.text().unwrap_or(""))
        .or_else(|| key.default.as_deref())
}

fn parse_weight(text: &str, source: &str, target: &str) -> Result<Dist> {
    text.trim().parse::<Dist>().map_err(|_| {
        Error::Graphml(format!(
            "invalid weight `{}` of edge {}->{}",
            text, source, target
        ))
    })
}

///
/// Escape a string for an attribute value or text.
///
fn escape(s: &str) -> Cow<str> {
    if s.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        let mut escaped = String::with_capacity(s.len() + 8);
        for c in s.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                c => escaped.push(c),
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(s)
    }
}

impl Graph {
    ///
    /// Parse GraphML.
    ///
    /// # Errors
    ///
    /// * `Xml` if the text is not well-formed XML
    /// * `Graphml` if there is no `<graph>`, a node has no id, or an edge has
    ///   no endpoints or no parsable weight
    /// * `UnknownNode` if an edge refers an id not declared as a node
    ///
    pub fn from_graphml(text: &str) -> Result<Self> {
        let doc = Document::parse(text)?;
        let root = doc.root_element();
        if !root.has_tag_name("graphml") {
            return Err(Error::Graphml(format!(
                "root element is <{}>",
                root.tag_name().name()
            )));
        }
        let weight_key = find_key(root, "edge", "weight");
        let label_key = find_key(root, "node", "label");
        let graph = root
            .children()
            .find(|c| c.has_tag_name("graph"))
            .ok_or_else(|| Error::Graphml("no <graph> element".to_owned()))?;
        if graph.attribute("edgedefault") == Some("undirected") {
            warn!("edgedefault is undirected, but edges are read as directed");
        }

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut labels: Vec<Label> = Vec::new();
        for node in graph.children().filter(|c| c.has_tag_name("node")) {
            let id = node
                .attribute("id")
                .ok_or_else(|| Error::Graphml("node without id".to_owned()))?;
            if index.contains_key(id) {
                warn!("duplicated node id `{}`, the first one is used", id);
            } else {
                index.insert(id, labels.len());
            }
            let label = data_value(node, &label_key).unwrap_or(id);
            labels.push(label.to_owned());
        }

        let lookup = |id: &str| {
            index
                .get(id)
                .copied()
                .ok_or_else(|| Error::UnknownNode(id.to_owned()))
        };
        let edges = graph
            .children()
            .filter(|c| c.has_tag_name("edge"))
            .map(|edge| {
                let (source, target) = match (edge.attribute("source"), edge.attribute("target")) {
                    (Some(source), Some(target)) => (source, target),
                    _ => return Err(Error::Graphml("edge without source or target".to_owned())),
                };
                let weight = data_value(edge, &weight_key).ok_or_else(|| {
                    Error::Graphml(format!("edge {}->{} has no weight", source, target))
                })?;
                Ok(WeightedEdge::new(
                    lookup(source)?,
                    lookup(target)?,
                    parse_weight(weight, source, target)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Graph::new(labels, edges))
    }
    ///
    /// Write as GraphML. Node `i` gets id `n{i}`.
    ///
    /// Weights are written in the shortest form that is parsed back to the
    /// same value (`inf` for `INF`).
    ///
    pub fn write_graphml<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            writer,
            r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns""#
        )?;
        writeln!(
            writer,
            r#"    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#
        )?;
        writeln!(
            writer,
            r#"    xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns"#
        )?;
        writeln!(
            writer,
            r#"     http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#
        )?;
        writeln!(
            writer,
            r#"  <key id="weight" for="edge" attr.name="weight" attr.type="double"/>"#
        )?;
        writeln!(
            writer,
            r#"  <key id="label" for="node" attr.name="label" attr.type="string"/>"#
        )?;
        writeln!(writer, r#"  <graph id="G" edgedefault="directed">"#)?;
        for (i, label) in self.labels.iter().enumerate() {
            writeln!(
                writer,
                r#"    <node id="n{}"><data key="label">{}</data></node>"#,
                i,
                escape(label)
            )?;
        }
        for e in self.edges.iter() {
            writeln!(
                writer,
                r#"    <edge source="n{}" target="n{}">"#,
                e.source, e.target
            )?;
            writeln!(writer, r#"      <data key="weight">{:?}</data>"#, e.weight)?;
            writeln!(writer, "    </edge>")?;
        }
        writeln!(writer, "  </graph>")?;
        writeln!(writer, "</graphml>")?;
        Ok(())
    }
    pub fn to_graphml(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_graphml(&mut buf)?;
        // only utf8 strings are written
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
    // file related
    pub fn to_graphml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = fs::File::create(path)?;
        let mut writer = io::BufWriter::new(file);
        self.write_graphml(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
    pub fn from_graphml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(&path)?;
        let g = Graph::from_graphml(&text)?;
        info!(
            "loaded {} n_nodes={} n_edges={}",
            path.as_ref().display(),
            g.node_count(),
            g.edge_count()
        );
        Ok(g)
    }
}
