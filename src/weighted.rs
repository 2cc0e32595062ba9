use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};

use crate::{graph::Graph, path::reconstruct_path, result::SearchResult};

#[derive(Debug)]
struct FrontierEntry<'a> {
    priority: f64,
    seq: u64,
    node: &'a str,
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

// equal priorities pop in insertion order
#[derive(Debug, Default)]
struct Frontier<'a> {
    heap: BinaryHeap<Reverse<FrontierEntry<'a>>>,
    next_seq: u64,
}

impl<'a> Frontier<'a> {
    fn push(&mut self, node: &'a str, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            priority,
            seq,
            node,
        }));
    }

    fn pop(&mut self) -> Option<&'a str> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }
}

/// Euclidean distance between two nodes, or zero if either lacks a position.
pub fn heuristic(graph: &Graph, from: &str, to: &str) -> f64 {
    let from = graph.node(from).and_then(|n| n.position());
    let to = graph.node(to).and_then(|n| n.position());
    match (from, to) {
        (Some((x1, y1)), Some((x2, y2))) => (x1 - x2).hypot(y1 - y2),
        _ => 0.0,
    }
}

#[tracing::instrument(skip(graph))]
pub fn dijkstra(graph: &Graph, start: &str, end: &str) -> SearchResult {
    let result = best_first(graph, start, end, |_| 0.0);
    tracing::debug!(
        visited = result.visited.len(),
        path_len = result.path.len(),
        cost = result.cost,
        "dijkstra search finished"
    );
    result
}

/// Optimal only when no edge weighs less than the distance between its endpoints.
#[tracing::instrument(skip(graph))]
pub fn a_star(graph: &Graph, start: &str, end: &str) -> SearchResult {
    let result = best_first(graph, start, end, |node| heuristic(graph, node, end));
    tracing::debug!(
        visited = result.visited.len(),
        path_len = result.path.len(),
        cost = result.cost,
        "a* search finished"
    );
    result
}

fn best_first<'a, H>(graph: &'a Graph, start: &str, end: &str, estimate: H) -> SearchResult
where
    H: Fn(&str) -> f64,
{
    let Some(origin) = graph.node(start) else {
        return SearchResult::empty();
    };
    let origin = origin.id.as_str();

    let mut dist: AHashMap<&'a str, f64> = AHashMap::new();
    let mut prev: AHashMap<&'a str, &'a str> = AHashMap::new();
    let mut finalized = AHashSet::new();
    let mut visited = Vec::new();
    let mut frontier = Frontier::default();
    dist.insert(origin, 0.0);
    frontier.push(origin, 0.0);

    while let Some(node) = frontier.pop() {
        if !finalized.insert(node) {
            continue;
        }
        visited.push(node);
        let reached = dist.get(node).copied().unwrap_or(f64::INFINITY);
        if node == end {
            let path = reconstruct_path(&prev, origin, node);
            return SearchResult::found(visited, path, reached);
        }
        for (next, weight) in graph.neighbors(node) {
            let candidate = reached + weight;
            if candidate < dist.get(next).copied().unwrap_or(f64::INFINITY) {
                dist.insert(next, candidate);
                prev.insert(next, node);
                frontier.push(next, candidate + estimate(next));
            }
        }
    }

    SearchResult::not_found(visited)
}
