use std::io::Write;

use graphwalk::{Edge, Graph, GraphWalkError, Node};

fn neighbor_list(graph: &Graph, id: &str) -> Vec<(String, f64)> {
    graph
        .neighbors(id)
        .map(|(next, weight)| (next.to_string(), weight))
        .collect()
}

fn mixed_graph() -> Graph {
    Graph::new(
        vec![Node::new("A"), Node::new("B"), Node::new("C")],
        vec![
            Edge::directed("A", "B", 1.0),
            Edge::undirected("B", "C", 2.0),
            Edge::directed("C", "A", 3.0),
        ],
    )
}

#[test]
fn test_neighbors_follow_directed_edges_forward_only() {
    let graph = mixed_graph();
    assert_eq!(neighbor_list(&graph, "A"), vec![("B".to_string(), 1.0)]);
    assert_eq!(neighbor_list(&graph, "B"), vec![("C".to_string(), 2.0)]);
}

#[test]
fn test_neighbors_follow_undirected_edges_both_ways_in_edge_order() {
    let graph = mixed_graph();
    assert_eq!(
        neighbor_list(&graph, "C"),
        vec![("B".to_string(), 2.0), ("A".to_string(), 3.0)]
    );
}

#[test]
fn test_neighbors_of_unknown_node_is_empty() {
    let graph = mixed_graph();
    assert!(neighbor_list(&graph, "missing").is_empty());
}

#[test]
fn test_neighbors_skip_dangling_edges() {
    let graph = Graph::new(
        vec![Node::new("A"), Node::new("B")],
        vec![
            Edge::directed("A", "ghost", 1.0),
            Edge::undirected("ghost", "B", 1.0),
            Edge::undirected("A", "B", 4.0),
        ],
    );
    assert_eq!(neighbor_list(&graph, "A"), vec![("B".to_string(), 4.0)]);
    assert_eq!(neighbor_list(&graph, "B"), vec![("A".to_string(), 4.0)]);
    assert!(neighbor_list(&graph, "ghost").is_empty());
}

#[test]
fn test_parallel_edges_are_kept_separately() {
    let graph = Graph::new(
        vec![Node::new("A"), Node::new("B")],
        vec![Edge::undirected("A", "B", 1.0), Edge::undirected("A", "B", 5.0)],
    );
    assert_eq!(
        neighbor_list(&graph, "A"),
        vec![("B".to_string(), 1.0), ("B".to_string(), 5.0)]
    );
}

#[test]
fn test_node_lookup() {
    let graph = Graph::new(vec![Node::at("A", 1.0, 2.0), Node::new("B")], Vec::new());
    assert_eq!(graph.node("A").and_then(Node::position), Some((1.0, 2.0)));
    assert_eq!(graph.node("B").and_then(Node::position), None);
    assert!(graph.node("C").is_none());
    assert!(graph.contains("B"));
    assert!(!graph.contains("C"));
}

#[test]
fn test_duplicate_ids_resolve_to_first_node() {
    let graph = Graph::new(
        vec![Node::at("A", 0.0, 0.0), Node::at("A", 9.0, 9.0)],
        Vec::new(),
    );
    assert_eq!(graph.node("A").and_then(Node::position), Some((0.0, 0.0)));
    assert!(matches!(
        graph.validate(),
        Err(GraphWalkError::InvalidInput(_))
    ));
}

#[test]
fn test_from_json_applies_defaults() {
    let graph = Graph::from_json_str(
        r#"{
            "nodes": [{"id": "A", "x": 0, "y": 0}, {"id": "B"}],
            "edges": [{"start": "A", "end": "B", "weight": 2}]
        }"#,
    )
    .expect("graph");
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.edges()[0].directed);
    assert_eq!(neighbor_list(&graph, "B"), vec![("A".to_string(), 2.0)]);
    assert_eq!(graph.node("B").and_then(|n| n.x), None);
}

#[test]
fn test_from_json_rejects_malformed_documents() {
    let err = Graph::from_json_str("{\"nodes\": [").expect_err("parse failure");
    assert!(matches!(err, GraphWalkError::Parse(_)));
}

#[test]
fn test_from_json_file_reads_document() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"nodes": [{{"id": "A"}}, {{"id": "B"}}], "edges": [{{"start": "A", "end": "B", "weight": 1, "directed": true}}]}}"#
    )
    .expect("write");
    let graph = Graph::from_json_file(file.path()).expect("graph");
    assert_eq!(neighbor_list(&graph, "A"), vec![("B".to_string(), 1.0)]);
    assert!(neighbor_list(&graph, "B").is_empty());
}

#[test]
fn test_from_json_file_missing_path_is_io_error() {
    let dir = tempfile::tempdir().expect("dir");
    let err = Graph::from_json_file(dir.path().join("absent.json")).expect_err("io failure");
    assert!(matches!(err, GraphWalkError::Io(_)));
}

#[test]
fn test_validate_rejects_negative_weights() {
    let graph = Graph::new(
        vec![Node::new("A"), Node::new("B")],
        vec![Edge::directed("A", "B", -1.0)],
    );
    assert!(matches!(
        graph.validate(),
        Err(GraphWalkError::InvalidInput(_))
    ));
}

#[test]
fn test_validate_rejects_non_finite_coordinates() {
    let graph = Graph::new(vec![Node::at("A", f64::NAN, 0.0)], Vec::new());
    assert!(graph.validate().is_err());
}

#[test]
fn test_validate_accepts_dangling_edges() {
    let graph = Graph::new(
        vec![Node::new("A")],
        vec![Edge::undirected("A", "nowhere", 1.0)],
    );
    assert!(graph.validate().is_ok());
}
