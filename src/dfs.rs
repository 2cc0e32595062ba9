use ahash::AHashSet;

use crate::{graph::Graph, path::BestRoute, result::SearchResult};

struct StackEntry<'a> {
    node: &'a str,
    route: Vec<&'a str>,
    cost: f64,
    on_route: AHashSet<&'a str>,
}

#[tracing::instrument(skip(graph))]
pub fn depth_first(graph: &Graph, start: &str, end: &str) -> SearchResult {
    let Some(origin) = graph.node(start) else {
        return SearchResult::empty();
    };
    let origin = origin.id.as_str();

    let mut visited = Vec::new();
    let mut seen = AHashSet::new();
    let mut best = BestRoute::default();
    let mut stack = vec![StackEntry {
        node: origin,
        route: vec![origin],
        cost: 0.0,
        on_route: AHashSet::from_iter([origin]),
    }];

    while let Some(entry) = stack.pop() {
        if seen.insert(entry.node) {
            visited.push(entry.node);
        } else if entry.node != end {
            continue;
        }
        if entry.node == end {
            best.offer(&entry.route, entry.cost);
            continue;
        }
        for (next, weight) in graph.neighbors(entry.node) {
            if entry.on_route.contains(next) || (next != end && seen.contains(next)) {
                continue;
            }
            let mut route = entry.route.clone();
            route.push(next);
            let mut on_route = entry.on_route.clone();
            on_route.insert(next);
            stack.push(StackEntry {
                node: next,
                route,
                cost: entry.cost + weight,
                on_route,
            });
        }
    }

    let (path, cost) = best.into_parts();
    tracing::debug!(
        visited = visited.len(),
        path_len = path.len(),
        cost,
        "depth-first search finished"
    );
    SearchResult::found(visited, path, cost)
}
