use dist_query::graph::generators::{grid_edges, relabel};
use dist_query::graph::Graph;
use dist_query::{
    DistanceQuery, EngineConfig, Error, IndexedGraph, QueryOutcome, ShortestPathEngine, StartPolicy,
};
use std::sync::Arc;

// Test helper building the engine used by the walkthrough scenario
fn scenario_engine() -> ShortestPathEngine {
    ShortestPathEngine::new(vec![(0, 4, 3), (0, 1, 9), (0, 2, 6), (0, 3, 5), (2, 1, 2), (2, 3, 4)])
        .unwrap()
}

#[test]
fn test_scenario_distances() {
    let mut engine = scenario_engine();

    // Direct edge 0 -> 3 beats 0 -> 2 -> 3 (6 + 4)
    assert_eq!(engine.distance(0, 3), Some(5));
    assert_eq!(engine.distance(2, 1), Some(2));
    assert_eq!(engine.distance(2, 2), Some(0));
    // 3 has no outgoing edges
    assert_eq!(engine.distance(3, 0), None);

    assert_eq!(engine.query(0, 3), QueryOutcome::Reachable(5));
    assert_eq!(engine.query(3, 0), QueryOutcome::Unreachable);
    assert_eq!(engine.query(0, 1).distance(), Some(8));
    assert!(!engine.query(1, 0).is_reachable());
    assert_eq!(engine.name(), "Dijkstra");
}

#[test]
fn test_self_distance_for_any_label() {
    let mut engine = scenario_engine();
    for node in [-100, 0, 1, 2, 3, 4, 999] {
        assert_eq!(engine.distance(node, node), Some(0));
    }
}

#[test]
fn test_directedness() {
    let mut engine = ShortestPathEngine::<i64>::new(vec![(1, 2, 7)]).unwrap();
    assert_eq!(engine.distance(1, 2), Some(7));
    assert_eq!(engine.distance(2, 1), None);
}

#[test]
fn test_parallel_edges_use_the_cheaper_one() {
    let mut engine = ShortestPathEngine::<i64>::new(vec![(1, 2, 7), (1, 2, 3), (1, 2, 5)]).unwrap();
    assert_eq!(engine.distance(1, 2), Some(3));
}

#[test]
fn test_repeated_queries_are_identical() {
    let mut engine = scenario_engine();
    let first: Vec<_> = (0..5).map(|e| engine.distance(0, e)).collect();
    // Interleave other queries to dirty the scratch state
    engine.distance(2, 3);
    engine.distance(3, 0);
    let second: Vec<_> = (0..5).map(|e| engine.distance(0, e)).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![Some(0), Some(8), Some(6), Some(5), Some(3)]);
}

#[test]
fn test_negative_weight_rejected() {
    let err = ShortestPathEngine::<i64>::new(vec![(0, 1, 4), (1, 2, -1), (2, 3, 1)]).unwrap_err();
    assert_eq!(err, Error::NegativeWeight { from: 1, to: 2, weight: -1 });
    assert!(err.to_string().contains("Negative edge weight -1"));
}

#[test]
fn test_unreachable_query_does_not_poison_later_queries() {
    let mut engine = scenario_engine();
    assert_eq!(engine.distance(1, 0), None);
    assert_eq!(engine.distance(4, 0), None);
    assert_eq!(engine.distance(0, 1), Some(8));
}

#[test]
fn test_non_contiguous_labels() {
    // 0..9 grid relabelled to -50, -43, -36, ...
    let edges = relabel(&grid_edges(3, 3), 7, -50);
    let mut engine = ShortestPathEngine::from_edges(edges).unwrap();

    assert_eq!(engine.node_count(), 9);
    assert_eq!(engine.index_of(-50), Some(0));
    // Opposite corners of a 3x3 grid are four steps apart
    assert_eq!(engine.distance(-50, 8 * 7 - 50), Some(4));
    assert_eq!(engine.distance(-49, -50), None);
}

#[test]
fn test_grid_distances_are_manhattan() {
    let width = 6;
    let height = 4;
    let mut engine = ShortestPathEngine::from_edges(grid_edges(width, height)).unwrap();

    for y in 0..height {
        for x in 0..width {
            let node = (y * width + x) as i64;
            assert_eq!(engine.distance(0, node), Some((x + y) as i64));
        }
    }
}

#[test]
fn test_checked_distance_reports_unknown_nodes() {
    let mut engine = scenario_engine();
    assert_eq!(engine.checked_distance(0, 3), Ok(Some(5)));
    assert_eq!(engine.checked_distance(3, 0), Ok(None));
    assert_eq!(engine.checked_distance(77, 0), Err(Error::UnknownNode(77)));
    assert_eq!(engine.checked_distance(0, 77), Err(Error::UnknownNode(77)));
    assert_eq!(engine.checked_distance(77, 77), Ok(Some(0)));
}

// A node that only ever appears as a destination has a dense index but no
// adjacency entry. With the default policy it is rejected as a start before any
// relaxation happens; with AnyNode it is expanded and settles only itself. Both
// report it unreachable to every other node.
#[test]
fn test_destination_only_start_node() {
    let mut strict = scenario_engine();
    assert!(strict.contains_node(4));
    assert!(!strict.graph().has_outgoing(4));
    // A full query first, so the statistics below must come from the 4 -> 0 query
    assert_eq!(strict.distance(0, 1), Some(8));
    assert!(strict.last_scratch().settled_count() > 0);
    assert_eq!(strict.distance(4, 0), None);
    assert_eq!(strict.last_scratch().settled_count(), 0);
    assert_eq!(strict.last_scratch().frontier_pushes(), 0);

    let mut relaxed =
        scenario_engine().with_config(EngineConfig::new().with_start_policy(StartPolicy::AnyNode));
    assert_eq!(relaxed.distance(0, 1), Some(8));
    assert_eq!(relaxed.distance(4, 0), None);
    assert_eq!(relaxed.last_scratch().settled_count(), 1);
    assert_eq!(relaxed.last_scratch().frontier_pushes(), 1);
    assert_eq!(relaxed.distance(4, 4), Some(0));
}

#[test]
fn test_engines_share_one_graph() {
    let triples = vec![(0, 4, 3), (0, 1, 9), (0, 2, 6), (0, 3, 5), (2, 1, 2), (2, 3, 4)];
    let graph = Arc::new(IndexedGraph::<i64>::from_triples(triples).unwrap());
    let mut a = ShortestPathEngine::from_graph(Arc::clone(&graph));
    let mut b = ShortestPathEngine::from_graph(Arc::clone(&graph));

    assert_eq!(a.distance(0, 1), Some(8));
    assert_eq!(b.distance(2, 3), Some(4));
    assert_eq!(Arc::strong_count(&graph), 3);
}

#[test]
fn test_concurrent_queries_with_own_scratch() {
    let engine = Arc::new(ShortestPathEngine::from_edges(grid_edges(10, 10)).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let mut scratch = engine.new_scratch();
                (0..100)
                    .map(|target| engine.distance_with(&mut scratch, t, target))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let distances = handle.join().unwrap();
        for (target, d) in distances.into_iter().enumerate() {
            let (tx, ty) = (target % 10, target / 10);
            let expected = tx.abs_diff(t) + ty;
            assert_eq!(d, Some(expected as i64));
        }
    }
}
