use dist_query::{DistanceQuery, QueryOutcome, ShortestPathEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Directed, weighted: (source, destination, weight)
    let edges = vec![(0, 4, 3), (0, 1, 9), (0, 2, 6), (0, 3, 5), (2, 1, 2), (2, 3, 4)];
    let mut engine = ShortestPathEngine::<i64>::new(edges)?;

    println!("Graph has {} nodes and {} edges", engine.node_count(), engine.edge_count());
    for (start, end) in [(0, 3), (2, 1), (2, 2), (3, 0)] {
        match engine.query(start, end) {
            QueryOutcome::Reachable(d) => println!("  {} -> {}: {}", start, end, d),
            QueryOutcome::Unreachable => println!("  {} -> {}: unreachable", start, end),
        }
    }

    Ok(())
}
