use ahash::AHashMap;
use graphwalk::path::reconstruct_path;

#[test]
fn test_reconstruct_walks_predecessors() {
    let prev: AHashMap<&str, &str> = [("B", "A"), ("C", "B"), ("D", "C")].into_iter().collect();
    assert_eq!(reconstruct_path(&prev, "A", "D"), vec!["A", "B", "C", "D"]);
    assert_eq!(reconstruct_path(&prev, "B", "D"), vec!["B", "C", "D"]);
}

#[test]
fn test_reconstruct_start_equals_end() {
    let prev: AHashMap<&str, &str> = AHashMap::new();
    assert_eq!(reconstruct_path(&prev, "A", "A"), vec!["A"]);
}

#[test]
fn test_reconstruct_broken_chain_is_empty() {
    let prev: AHashMap<&str, &str> = [("C", "B")].into_iter().collect();
    assert!(reconstruct_path(&prev, "A", "C").is_empty());
    assert!(reconstruct_path(&prev, "A", "Z").is_empty());
}

#[test]
fn test_reconstruct_predecessor_cycle_is_empty() {
    let prev: AHashMap<&str, &str> = [("B", "C"), ("C", "B")].into_iter().collect();
    assert!(reconstruct_path(&prev, "A", "C").is_empty());
}
