use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    bfs::breadth_first,
    dfs::depth_first,
    errors::GraphWalkError,
    graph::Graph,
    result::SearchResult,
    weighted::{a_star, dijkstra},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    #[serde(rename = "DFS")]
    DepthFirst,
    #[serde(rename = "BFS")]
    BreadthFirst,
    #[serde(rename = "Dijkstra")]
    Dijkstra,
    #[serde(rename = "A*")]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "DFS",
            Algorithm::BreadthFirst => "BFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }

    /// Exact match against `DFS`, `BFS`, `Dijkstra` or `A*`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.tag() == tag)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = GraphWalkError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Algorithm::DepthFirst),
            "bfs" => Ok(Algorithm::BreadthFirst),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a*" | "astar" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(GraphWalkError::unknown_algorithm(tag)),
        }
    }
}

pub fn search(graph: &Graph, algorithm: Algorithm, start: &str, end: &str) -> SearchResult {
    match algorithm {
        Algorithm::DepthFirst => depth_first(graph, start, end),
        Algorithm::BreadthFirst => breadth_first(graph, start, end),
        Algorithm::Dijkstra => dijkstra(graph, start, end),
        Algorithm::AStar => a_star(graph, start, end),
    }
}

/// Dispatches on an exact algorithm tag (`DFS`, `BFS`, `Dijkstra`, `A*`).
///
/// Any other tag yields [`SearchResult::empty`], and so does an unknown
/// start id, even when it equals `end`.
pub fn run_search(graph: &Graph, tag: &str, start: &str, end: &str) -> SearchResult {
    match Algorithm::from_tag(tag) {
        Some(algorithm) => search(graph, algorithm, start, end),
        None => {
            tracing::warn!(tag, "unknown algorithm, search skipped");
            SearchResult::empty()
        }
    }
}
