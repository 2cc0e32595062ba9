use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::graph::{Edge, Graph, Node};

const RANDOM_EXTENT: u32 = 100;
const STAR_RADIUS: f64 = 10.0;

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    Grid2D { width: usize, height: usize },
    RandomErdosRenyi { edges: usize, directed_ratio: f64 },
}

pub fn node_id(idx: usize) -> String {
    format!("n{idx}")
}

pub fn generate_graph(shape: GraphShape, node_count: usize, seed: u64) -> Graph {
    assert!(node_count > 1, "node_count must exceed 1");
    let mut rng = StdRng::seed_from_u64(seed);
    let (nodes, edges) = match shape {
        GraphShape::Line => generate_line(node_count),
        GraphShape::Star => generate_star(node_count),
        GraphShape::Grid2D { width, height } => generate_grid(width, height, node_count),
        GraphShape::RandomErdosRenyi {
            edges,
            directed_ratio,
        } => generate_random(node_count, edges, directed_ratio, &mut rng),
    };
    Graph::new(nodes, edges)
}

fn generate_line(count: usize) -> (Vec<Node>, Vec<Edge>) {
    let nodes = (0..count)
        .map(|idx| Node::at(node_id(idx), idx as f64, 0.0))
        .collect();
    let edges = (0..count - 1)
        .map(|idx| Edge::undirected(node_id(idx), node_id(idx + 1), 1.0))
        .collect();
    (nodes, edges)
}

fn generate_star(count: usize) -> (Vec<Node>, Vec<Edge>) {
    let leaves = (count - 1) as f64;
    let mut nodes = vec![Node::at(node_id(0), 0.0, 0.0)];
    for leaf in 1..count {
        let angle = std::f64::consts::TAU * (leaf - 1) as f64 / leaves;
        nodes.push(Node::at(
            node_id(leaf),
            STAR_RADIUS * angle.cos(),
            STAR_RADIUS * angle.sin(),
        ));
    }
    let edges = (1..count)
        .map(|leaf| Edge::undirected(node_id(0), node_id(leaf), STAR_RADIUS))
        .collect();
    (nodes, edges)
}

fn generate_grid(width: usize, height: usize, node_count: usize) -> (Vec<Node>, Vec<Edge>) {
    assert_eq!(
        width * height,
        node_count,
        "grid dimensions must match node count"
    );
    let mut nodes = Vec::with_capacity(node_count);
    let mut edges = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let base = grid_index(x, y, width);
            nodes.push(Node::at(node_id(base), x as f64, y as f64));
            if x + 1 < width {
                edges.push(Edge::undirected(
                    node_id(base),
                    node_id(grid_index(x + 1, y, width)),
                    1.0,
                ));
            }
            if y + 1 < height {
                edges.push(Edge::undirected(
                    node_id(base),
                    node_id(grid_index(x, y + 1, width)),
                    1.0,
                ));
            }
        }
    }
    (nodes, edges)
}

fn generate_random(
    node_count: usize,
    edge_count: usize,
    directed_ratio: f64,
    rng: &mut StdRng,
) -> (Vec<Node>, Vec<Edge>) {
    let total_pairs = pair_count(node_count);
    assert!(
        edge_count as u128 <= total_pairs,
        "edge_count exceeds possible pairs"
    );
    let nodes: Vec<Node> = (0..node_count)
        .map(|idx| {
            Node::at(
                node_id(idx),
                f64::from(rng.gen_range(0..RANDOM_EXTENT)),
                f64::from(rng.gen_range(0..RANDOM_EXTENT)),
            )
        })
        .collect();
    let mut edges = Vec::with_capacity(edge_count);
    let mut idx = 0u64;
    let mut remaining_edges = edge_count as u64;
    while remaining_edges > 0 && idx < total_pairs as u64 {
        let remaining_pairs = total_pairs as u64 - idx;
        let p = remaining_edges as f64 / remaining_pairs as f64;
        idx += sample_geometric(rng, p);
        if idx >= total_pairs as u64 {
            break;
        }
        let (from, to) = pair_from_index(idx, node_count as u64);
        let (from, to) = if rng.gen_bool(0.5) { (from, to) } else { (to, from) };
        let weight = admissible_weight(&nodes[from as usize], &nodes[to as usize], rng);
        let edge = if rng.gen_bool(directed_ratio.clamp(0.0, 1.0)) {
            Edge::directed(node_id(from as usize), node_id(to as usize), weight)
        } else {
            Edge::undirected(node_id(from as usize), node_id(to as usize), weight)
        };
        edges.push(edge);
        idx += 1;
        remaining_edges -= 1;
    }
    (nodes, edges)
}

// never below the straight-line distance, keeping A* admissible
fn admissible_weight(from: &Node, to: &Node, rng: &mut StdRng) -> f64 {
    let distance = match (from.position(), to.position()) {
        (Some((x1, y1)), Some((x2, y2))) => (x1 - x2).hypot(y1 - y2),
        _ => 0.0,
    };
    distance.ceil() + f64::from(rng.gen_range(0..4u32))
}

fn grid_index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

fn pair_count(nodes: usize) -> u128 {
    let n = nodes as u128;
    n * (n - 1) / 2
}

fn sample_geometric(rng: &mut StdRng, p: f64) -> u64 {
    if p >= 1.0 {
        return 0;
    }
    let u = rng.r#gen::<f64>().max(f64::MIN_POSITIVE);
    ((u.ln() / (1.0 - p).ln()).floor().max(0.0)) as u64
}

fn pair_from_index(idx: u64, nodes: u64) -> (u64, u64) {
    let mut left = 0;
    let mut start = 0u64;
    while left < nodes - 1 {
        let remaining = nodes - left - 1;
        if idx < start + remaining {
            return (left, left + 1 + (idx - start));
        }
        start += remaining;
        left += 1;
    }
    (nodes - 2, nodes - 1)
}
