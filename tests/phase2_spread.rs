//! Phase 2 tests: Propagation engine and max-spread source search.

use hopspread::engine::{PropagationParams, SpreadEngine, SpreadSource};
use hopspread::graph::{GraphBuilder, SpreadGraph};
use hopspread::types::GraphError;

use proptest::prelude::*;

// ==================== Helpers ====================

/// The ten-vertex tree: 0 at the root, three levels below it.
fn tree_graph() -> SpreadGraph {
    GraphBuilder::new(10)
        .links([
            (0, 1),
            (0, 2),
            (1, 3),
            (1, 4),
            (2, 5),
            (2, 6),
            (3, 7),
            (4, 8),
            (5, 9),
        ])
        .build()
        .unwrap()
}

/// A path 0 - 1 - ... - (n-1).
fn path_graph(n: usize) -> SpreadGraph {
    let mut builder = GraphBuilder::new(n);
    for v in 1..n {
        builder.link(v - 1, v);
    }
    builder.build().unwrap()
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== Propagate Tests ====================

#[test]
fn test_propagate_tree_two_steps() {
    init_logging();
    let graph = tree_graph();
    let engine = SpreadEngine::new();
    assert_eq!(engine.propagate(&graph, 0, 2).unwrap(), 7);
}

#[test]
fn test_propagate_tree_all_steps() {
    let graph = tree_graph();
    let engine = SpreadEngine::new();
    assert_eq!(engine.propagate(&graph, 0, 0).unwrap(), 1);
    assert_eq!(engine.propagate(&graph, 0, 1).unwrap(), 3);
    assert_eq!(engine.propagate(&graph, 0, 3).unwrap(), 10);
    assert_eq!(engine.propagate(&graph, 0, 100).unwrap(), 10);
}

#[test]
fn test_propagate_isolated_vertex() {
    let graph = SpreadGraph::new(4);
    let engine = SpreadEngine::new();
    assert_eq!(engine.propagate(&graph, 0, 5).unwrap(), 1);
    assert_eq!(engine.find_max_spread_source(&graph), Some(0));
}

#[test]
fn test_propagate_middle_of_path() {
    let graph = path_graph(3);
    let engine = SpreadEngine::new();
    assert_eq!(engine.propagate(&graph, 1, 1).unwrap(), 3);
    assert_eq!(engine.propagate(&graph, 0, 1).unwrap(), 2);
}

#[test]
fn test_propagate_time_limit_max() {
    let graph = path_graph(5);
    let engine = SpreadEngine::new();
    assert_eq!(engine.propagate(&graph, 4, u32::MAX).unwrap(), 5);
}

#[test]
fn test_propagate_invalid_start() {
    let graph = path_graph(3);
    let engine = SpreadEngine::new();
    match engine.propagate(&graph, 3, 1) {
        Err(GraphError::InvalidVertex {
            vertex,
            vertex_count,
        }) => {
            assert_eq!(vertex, 3);
            assert_eq!(vertex_count, 3);
        }
        other => panic!("Expected InvalidVertex, got {:?}", other),
    }
}

#[test]
fn test_propagate_on_empty_graph_fails() {
    let graph = SpreadGraph::new(0);
    let engine = SpreadEngine::new();
    assert!(engine.propagate(&graph, 0, 0).is_err());
}

#[test]
fn test_propagate_is_idempotent() {
    let graph = tree_graph();
    let before = graph.clone();
    let engine = SpreadEngine::new();
    let first = engine.propagate(&graph, 2, 2).unwrap();
    let second = engine.propagate(&graph, 2, 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(graph, before);
}

#[test]
fn test_propagate_multi_edges_do_not_inflate_count() {
    let graph = GraphBuilder::new(3)
        .links([(0, 1), (0, 1), (0, 1), (1, 2), (1, 1)])
        .build()
        .unwrap();
    let engine = SpreadEngine::new();
    assert_eq!(engine.propagate(&graph, 0, 1).unwrap(), 2);
    assert_eq!(engine.propagate(&graph, 0, 2).unwrap(), 3);
}

#[test]
fn test_propagate_directed() {
    let graph = GraphBuilder::new(3)
        .directed()
        .links([(0, 1), (1, 2)])
        .build()
        .unwrap();
    let engine = SpreadEngine::new();
    assert_eq!(engine.propagate(&graph, 0, 5).unwrap(), 3);
    assert_eq!(engine.propagate(&graph, 2, 5).unwrap(), 1);
}

#[test]
fn test_propagate_interleaved_with_insertions() {
    let mut graph = SpreadGraph::new(4);
    let engine = SpreadEngine::new();
    graph.add_edge(0, 1).unwrap();
    assert_eq!(engine.propagate(&graph, 0, 3).unwrap(), 2);
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(2, 3).unwrap();
    assert_eq!(engine.propagate(&graph, 0, 3).unwrap(), 4);
}

// ==================== Detailed Propagation Tests ====================

#[test]
fn test_propagate_detailed_reports_depths() {
    let graph = tree_graph();
    let engine = SpreadEngine::new();
    let result = engine
        .propagate_detailed(
            &graph,
            PropagationParams {
                start: 0,
                time_limit: 2,
            },
        )
        .unwrap();

    assert_eq!(result.count, 7);
    assert_eq!(result.reached, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(result.depths[&0], 0);
    assert_eq!(result.depths[&2], 1);
    assert_eq!(result.depths[&6], 2);
    assert!(!result.depths.contains_key(&7));
    assert_eq!(result.start, 0);
    assert_eq!(result.time_limit, 2);
}

#[test]
fn test_propagate_detailed_matches_count() {
    let graph = tree_graph();
    let engine = SpreadEngine::new();
    for start in 0..10 {
        for t in 0..5 {
            let detailed = engine
                .propagate_detailed(&graph, PropagationParams { start, time_limit: t })
                .unwrap();
            assert_eq!(detailed.count, engine.propagate(&graph, start, t).unwrap());
        }
    }
}

// ==================== Timeline Tests ====================

#[test]
fn test_timeline_tree() {
    let graph = tree_graph();
    let engine = SpreadEngine::new();
    assert_eq!(engine.timeline(&graph, 0, 3).unwrap(), vec![1, 3, 7, 10]);
}

#[test]
fn test_timeline_truncates_past_vertex_count() {
    let graph = path_graph(3);
    let engine = SpreadEngine::new();
    let timeline = engine.timeline(&graph, 0, 1_000_000).unwrap();
    assert_eq!(timeline, vec![1, 2, 3]);
}

#[test]
fn test_timeline_invalid_start() {
    let graph = SpreadGraph::new(0);
    let engine = SpreadEngine::new();
    assert!(engine.timeline(&graph, 0, 3).is_err());
}

// ==================== Max Spread Source Tests ====================

#[test]
fn test_max_spread_source_empty_graph() {
    let graph = SpreadGraph::new(0);
    let engine = SpreadEngine::new();
    assert_eq!(engine.find_max_spread_source(&graph), None);
    assert!(engine.reach_counts(&graph).is_empty());
}

#[test]
fn test_max_spread_source_largest_component() {
    // Components: {0, 1}, {2, 3, 4, 5}, {6}
    let graph = GraphBuilder::new(7)
        .links([(0, 1), (4, 5), (3, 4), (2, 3)])
        .build()
        .unwrap();
    let engine = SpreadEngine::new();

    assert_eq!(engine.reach_counts(&graph), vec![2, 2, 4, 4, 4, 4, 1]);
    assert_eq!(engine.find_max_spread_source(&graph), Some(2));
    assert_eq!(
        engine.max_spread(&graph),
        Some(SpreadSource {
            vertex: 2,
            reach: 4
        })
    );
}

#[test]
fn test_max_spread_source_tie_keeps_lowest() {
    // Two components of size 3: {4, 5, 6} and {1, 2, 3}
    let graph = GraphBuilder::new(7)
        .links([(4, 5), (5, 6), (3, 2), (2, 1)])
        .build()
        .unwrap();
    let engine = SpreadEngine::new();
    assert_eq!(engine.find_max_spread_source(&graph), Some(1));
}

#[test]
fn test_max_spread_source_directed() {
    // Only vertex 3 can reach everything.
    let graph = GraphBuilder::new(4)
        .directed()
        .links([(3, 0), (0, 1), (1, 2)])
        .build()
        .unwrap();
    let engine = SpreadEngine::new();
    assert_eq!(engine.reach_counts(&graph), vec![3, 2, 1, 4]);
    assert_eq!(engine.find_max_spread_source(&graph), Some(3));
}

// ==================== Property Tests ====================

/// Vertex count plus an edge list whose endpoints are in range.
fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..24).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n), 0..48);
        (Just(n), edges)
    })
}

fn build(n: usize, edges: &[(usize, usize)]) -> SpreadGraph {
    GraphBuilder::new(n)
        .links(edges.iter().copied())
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn prop_zero_time_reaches_only_start((n, edges) in arb_graph(), seed in any::<usize>()) {
        let graph = build(n, &edges);
        let start = seed % n;
        prop_assert_eq!(SpreadEngine::new().propagate(&graph, start, 0).unwrap(), 1);
    }

    #[test]
    fn prop_propagate_monotone_and_saturates((n, edges) in arb_graph(), seed in any::<usize>()) {
        let graph = build(n, &edges);
        let engine = SpreadEngine::new();
        let start = seed % n;
        let component = graph.bfs(start).unwrap().count();

        let mut previous = 0;
        for t in 0..=n as u32 {
            let count = engine.propagate(&graph, start, t).unwrap();
            prop_assert!(count >= previous);
            previous = count;
        }
        prop_assert_eq!(previous, component);
    }

    #[test]
    fn prop_edge_order_does_not_change_reach((n, edges) in arb_graph(), t in 0u32..6) {
        let forward = build(n, &edges);
        let reversed_edges: Vec<_> = edges.iter().rev().copied().collect();
        let backward = build(n, &reversed_edges);
        let engine = SpreadEngine::new();

        for start in 0..n {
            prop_assert_eq!(
                engine.propagate(&forward, start, t).unwrap(),
                engine.propagate(&backward, start, t).unwrap()
            );
        }
    }

    #[test]
    fn prop_max_source_is_lowest_of_largest((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let engine = SpreadEngine::new();
        let reach = engine.reach_counts(&graph);
        let largest = reach.iter().copied().max().unwrap();
        let expected = reach.iter().position(|&r| r == largest);
        prop_assert_eq!(engine.find_max_spread_source(&graph), expected);
    }

    #[test]
    fn prop_timeline_matches_propagate((n, edges) in arb_graph(), seed in any::<usize>(), t in 0u32..30) {
        let graph = build(n, &edges);
        let engine = SpreadEngine::new();
        let start = seed % n;
        let timeline = engine.timeline(&graph, start, t).unwrap();

        prop_assert_eq!(timeline.len(), (t as usize).min(n - 1) + 1);
        for (k, &reached) in timeline.iter().enumerate() {
            prop_assert_eq!(reached, engine.propagate(&graph, start, k as u32).unwrap());
        }
    }

    #[test]
    fn prop_bfs_distances_non_decreasing((n, edges) in arb_graph(), seed in any::<usize>()) {
        let graph = build(n, &edges);
        let start = seed % n;
        let order: Vec<(usize, u32)> = graph.bfs(start).unwrap().collect();

        prop_assert_eq!(order[0], (start, 0));
        for pair in order.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].1);
        }
        let mut vertices: Vec<usize> = order.iter().map(|&(v, _)| v).collect();
        vertices.sort_unstable();
        vertices.dedup();
        prop_assert_eq!(vertices.len(), order.len());
    }
}
