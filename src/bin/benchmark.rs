use std::env;
use std::time::{Duration, Instant};

use dist_query::graph::generators::random_edges;
use dist_query::graph::NodeId;
use dist_query::{DistanceQuery, ShortestPathEngine};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Answer every query one after another through the engine-owned scratch
fn run_sequential(
    engine: &mut ShortestPathEngine,
    pairs: &[(NodeId, NodeId)],
) -> (Duration, usize) {
    let start = Instant::now();
    let reachable = pairs
        .iter()
        .filter(|&&(s, e)| engine.distance(s, e).is_some())
        .count();
    (start.elapsed(), reachable)
}

// Answer the same queries through the rayon batch path
fn run_batched(engine: &ShortestPathEngine, pairs: &[(NodeId, NodeId)]) -> (Duration, usize) {
    let start = Instant::now();
    let reachable = engine
        .distances_batch(pairs)
        .iter()
        .filter(|d| d.is_some())
        .count();
    (start.elapsed(), reachable)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command line arguments: [queries] [seed]
    let args: Vec<String> = env::args().collect();
    let query_count: usize = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(1_000);
    let seed: u64 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(42);

    let graph_sizes = [1_000, 10_000, 50_000, 100_000];
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: sequential vs batched distance queries");
    println!("Edge factor: {} edges per node, {} queries per graph", edge_factor, query_count);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let edges = random_edges(size, edge_factor, 100, &mut rng);
        let mut engine = ShortestPathEngine::from_edges(edges)?;
        info!("Graph with {} nodes and {} edges ready", engine.node_count(), engine.edge_count());

        let pairs: Vec<(NodeId, NodeId)> = (0..query_count)
            .map(|_| {
                (
                    rng.gen_range(0..size) as NodeId,
                    rng.gen_range(0..size) as NodeId,
                )
            })
            .collect();

        let (seq_time, seq_reachable) = run_sequential(&mut engine, &pairs);
        let (batch_time, batch_reachable) = run_batched(&engine, &pairs);
        assert_eq!(seq_reachable, batch_reachable, "batched results must match sequential ones");

        println!(
            "{} nodes: {} reachable, sequential {:?}, batched {:?}",
            size, seq_reachable, seq_time, batch_time
        );
        results.push((size, seq_time, batch_time));
    }

    println!(
        "\n{:<10} | {:<15} | {:<15} | {:<10}",
        "Nodes", "Sequential (ms)", "Batched (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");
    for (size, seq_time, batch_time) in &results {
        let speedup = seq_time.as_secs_f64() / batch_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            seq_time.as_millis(),
            batch_time.as_millis(),
            speedup
        );
    }

    Ok(())
}
