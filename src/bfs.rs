use std::collections::VecDeque;

use ahash::AHashSet;

use crate::{graph::Graph, path::BestRoute, result::SearchResult};

#[tracing::instrument(skip(graph))]
pub fn breadth_first(graph: &Graph, start: &str, end: &str) -> SearchResult {
    let Some(origin) = graph.node(start) else {
        return SearchResult::empty();
    };
    let origin = origin.id.as_str();

    let mut visited = Vec::new();
    let mut seen = AHashSet::new();
    let mut best = BestRoute::default();
    let mut queue = VecDeque::new();
    queue.push_back((origin, vec![origin], 0.0));

    while let Some((node, route, cost)) = queue.pop_front() {
        if seen.insert(node) {
            visited.push(node);
        } else if node != end {
            continue;
        }
        if node == end {
            best.offer(&route, cost);
            continue;
        }
        for (next, weight) in graph.neighbors(node) {
            if next != end && seen.contains(next) {
                continue;
            }
            let mut next_route = route.clone();
            next_route.push(next);
            queue.push_back((next, next_route, cost + weight));
        }
    }

    let (path, cost) = best.into_parts();
    tracing::debug!(
        visited = visited.len(),
        path_len = path.len(),
        cost,
        "breadth-first search finished"
    );
    SearchResult::found(visited, path, cost)
}
