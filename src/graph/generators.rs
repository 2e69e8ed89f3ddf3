use crate::graph::{Edge, NodeId};
use rand::prelude::*;
use std::collections::HashSet;

/// Generates a random directed edge list over nodes `0..n`
///
/// Roughly `edge_factor * n` edges are drawn with weights in `0..=max_weight`.
/// Self-loops are skipped, parallel edges are kept.
pub fn random_edges<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    rng: &mut R,
) -> Vec<Edge<i64>> {
    assert!(n > 1, "n must be greater than 1");
    assert!(max_weight >= 0, "max_weight must be non-negative");

    let num_edges = (edge_factor * n as f64) as usize;
    let mut edges = Vec::with_capacity(num_edges);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(0..=max_weight);
            edges.push(Edge::new(u as NodeId, v as NodeId, weight));
        }
    }

    edges
}

/// Generates a 4-connected grid of `width * height` nodes with unit weights
///
/// Every grid neighbour pair is joined by an edge in both directions.
pub fn grid_edges(width: usize, height: usize) -> Vec<Edge<i64>> {
    let index = |x: usize, y: usize| (y * width + x) as NodeId;
    let mut edges = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                edges.push(Edge::new(current, index(x - 1, y), 1));
            }
            if x + 1 < width {
                edges.push(Edge::new(current, index(x + 1, y), 1));
            }
            if y > 0 {
                edges.push(Edge::new(current, index(x, y - 1), 1));
            }
            if y + 1 < height {
                edges.push(Edge::new(current, index(x, y + 1), 1));
            }
        }
    }

    edges
}

/// Generates a Barabási-Albert style scale-free edge list with n nodes and m edges per new node
pub fn scale_free_edges<R: Rng>(
    n: usize,
    m: usize,
    max_weight: i64,
    rng: &mut R,
) -> Vec<Edge<i64>> {
    assert!(m > 0, "m must be positive");
    assert!(n > m, "n must be greater than m");

    let mut edges = Vec::new();

    // Connect initial nodes (complete graph)
    for i in 0..m {
        for j in 0..m {
            if i != j {
                let weight = rng.gen_range(0..=max_weight);
                edges.push(Edge::new(i as NodeId, j as NodeId, weight));
            }
        }
    }

    // Degree of each node for preferential attachment
    let mut degrees = vec![m.saturating_sub(1).max(1); m];
    let mut total_degree: usize = degrees.iter().sum();

    for i in m..n {
        let mut targets = HashSet::new();

        while targets.len() < m {
            let mut target_value = rng.gen_range(0..total_degree);
            let mut target = 0;
            while target < i && target_value >= degrees[target] {
                target_value -= degrees[target];
                target += 1;
            }

            if target < i && targets.insert(target) {
                let weight = rng.gen_range(0..=max_weight);
                edges.push(Edge::new(i as NodeId, target as NodeId, weight));
                degrees[target] += 1;
                total_degree += 1;
            }
        }

        degrees.push(m);
        total_degree += m;
    }

    edges
}

/// Relabels every node `id` as `id * stride + offset`
///
/// Produces non-contiguous (and possibly negative) labels from a dense edge list.
pub fn relabel(edges: &[Edge<i64>], stride: NodeId, offset: NodeId) -> Vec<Edge<i64>> {
    edges
        .iter()
        .map(|e| {
            Edge::new(
                e.source * stride + offset,
                e.destination * stride + offset,
                e.weight,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn grid_has_expected_edge_count() {
        // 3x2 grid: horizontal pairs 2*2, vertical pairs 3, each in both directions
        let edges = grid_edges(3, 2);
        assert_eq!(edges.len(), 2 * (4 + 3));
        assert!(edges.iter().all(|e| e.weight == 1));
    }

    #[test]
    fn random_edges_are_in_range_without_self_loops() {
        let mut rng = StdRng::seed_from_u64(7);
        let edges = random_edges(50, 3.0, 20, &mut rng);
        assert!(!edges.is_empty());
        for e in &edges {
            assert_ne!(e.source, e.destination);
            assert!((0..50).contains(&e.source));
            assert!((0..=20).contains(&e.weight));
        }
    }

    #[test]
    fn scale_free_attaches_m_edges_per_new_node() {
        let mut rng = StdRng::seed_from_u64(11);
        let edges = scale_free_edges(20, 2, 9, &mut rng);
        let from_last = edges.iter().filter(|e| e.source == 19).count();
        assert_eq!(from_last, 2);
    }
}
