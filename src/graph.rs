use std::path::Path;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::errors::GraphWalkError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Node {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self {
            id: id.into(),
            x: None,
            y: None,
        }
    }

    pub fn at<T: Into<String>>(id: T, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    pub start: String,
    pub end: String,
    pub weight: f64,
    #[serde(default)]
    pub directed: bool,
}

impl Edge {
    pub fn directed<A: Into<String>, B: Into<String>>(start: A, end: B, weight: f64) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            weight,
            directed: true,
        }
    }

    pub fn undirected<A: Into<String>, B: Into<String>>(start: A, end: B, weight: f64) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            weight,
            directed: false,
        }
    }
}

#[derive(Deserialize)]
struct GraphDocument {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl From<GraphDocument> for Graph {
    fn from(doc: GraphDocument) -> Self {
        Graph::new(doc.nodes, doc.edges)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "GraphDocument")]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index: AHashMap<String, usize>,
    #[serde(skip)]
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut index = AHashMap::with_capacity(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            // first occurrence of a repeated id wins
            index.entry(node.id.clone()).or_insert(idx);
        }
        let mut adjacency = vec![Vec::new(); nodes.len()];
        for edge in &edges {
            let (Some(&from), Some(&to)) = (index.get(&edge.start), index.get(&edge.end)) else {
                continue;
            };
            adjacency[from].push((to, edge.weight));
            if !edge.directed {
                adjacency[to].push((from, edge.weight));
            }
        }
        Self {
            nodes,
            edges,
            index,
            adjacency,
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self, GraphWalkError> {
        serde_json::from_str(input).map_err(|e| GraphWalkError::parse(e.to_string()))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, GraphWalkError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GraphWalkError::io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.index
            .get(id)
            .map(|&idx| self.adjacency[idx].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&(to, weight)| (self.nodes[to].id.as_str(), weight))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // dangling edge endpoints are allowed
    pub fn validate(&self) -> Result<(), GraphWalkError> {
        let mut seen = AHashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(GraphWalkError::invalid_input(format!(
                    "duplicate node id {}",
                    node.id
                )));
            }
            let finite = node.x.is_none_or(f64::is_finite) && node.y.is_none_or(f64::is_finite);
            if !finite {
                return Err(GraphWalkError::invalid_input(format!(
                    "node {} has non-finite coordinates",
                    node.id
                )));
            }
        }
        for edge in &self.edges {
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                return Err(GraphWalkError::invalid_input(format!(
                    "edge {}->{} must have a finite non-negative weight, got {}",
                    edge.start, edge.end, edge.weight
                )));
            }
        }
        Ok(())
    }
}
