//! Build a small graph, spread from a vertex, and find the best source.

use hopspread::*;

fn main() -> GraphResult<()> {
    // Two components: a tree rooted at 0, and a pair 7 - 8.
    let graph = GraphBuilder::new(9)
        .links([(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (5, 6), (7, 8)])
        .build()?;

    println!("Adjacency list:");
    print!("{}", graph);

    let engine = SpreadEngine::new();
    for t in 0..=3 {
        println!("reach from 0 within {} steps: {}", t, engine.propagate(&graph, 0, t)?);
    }

    println!("timeline from 7: {:?}", engine.timeline(&graph, 7, 3)?);

    match engine.max_spread(&graph) {
        Some(source) => println!(
            "best source: vertex {} reaches {} vertices",
            source.vertex, source.reach
        ),
        None => println!("best source: {}", NO_SOURCE),
    }

    Ok(())
}
