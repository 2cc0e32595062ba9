//! DFS, BFS, Dijkstra and A* over in-memory graphs, with step-by-step replay.

pub mod algo;
pub mod bench_utils;
pub mod bfs;
pub mod client;
pub mod dfs;
pub mod errors;
pub mod graph;
pub mod path;
pub mod playback;
pub mod result;
pub mod weighted;

pub use crate::algo::{Algorithm, run_search, search};
pub use crate::errors::GraphWalkError;
pub use crate::graph::{Edge, Graph, Node};
pub use crate::playback::{Playback, SearchEvent};
pub use crate::result::SearchResult;
pub use crate::weighted::heuristic;
