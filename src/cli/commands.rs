//! CLI command implementations.

use std::path::Path;

use crate::config::{load_config, SpreadConfig};
use crate::engine::{PropagationParams, SpreadEngine};
use crate::format::read_text_input;
use crate::graph::SpreadGraph;
use crate::types::{EdgeMode, GraphResult, NO_SOURCE};

/// Load a run's input. `None` or `-` reads the plain-text stream from stdin;
/// `.json`/`.toml` paths go through the config loader, others through the text reader.
pub fn load_input(path: Option<&Path>, mode: Option<EdgeMode>) -> GraphResult<SpreadConfig> {
    let mut config = match path {
        None => read_text_input(std::io::stdin().lock())?,
        Some(p) if p.as_os_str() == "-" => read_text_input(std::io::stdin().lock())?,
        Some(p) => {
            let ext = p
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_lowercase);
            match ext.as_deref() {
                Some("json") | Some("toml") => load_config(p)?,
                _ => {
                    let config = read_text_input(std::fs::File::open(p)?)?;
                    log::info!("loaded text input from {}", p.display());
                    config
                }
            }
        }
    };

    if let Some(mode) = mode {
        config.mode = mode;
    }
    Ok(config)
}

/// Full run: adjacency listing, then the propagation count from the start vertex.
pub fn cmd_run(config: &SpreadConfig, json: bool) -> GraphResult<()> {
    let graph = config.build_graph()?;
    let start = config.start_vertex()?;
    let time_limit = config.time_limit()?;
    let count = SpreadEngine::new().propagate(&graph, start, time_limit)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "adjacency": adjacency_json(&graph),
                "start": start,
                "time_limit": time_limit,
                "reached": count,
            })
        );
    } else {
        println!("Adjacency list:");
        print!("{}", graph);
        println!(
            "Reached within {} steps from {}: {}",
            time_limit, start, count
        );
    }
    Ok(())
}

/// Propagation count, optionally overriding the configured start and limit.
pub fn cmd_propagate(
    config: &SpreadConfig,
    start: Option<usize>,
    time_limit: Option<u32>,
    json: bool,
) -> GraphResult<()> {
    let graph = config.build_graph()?;
    let start = match start {
        Some(s) => s,
        None => config.start_vertex()?,
    };
    let time_limit = match time_limit {
        Some(t) => t,
        None => config.time_limit()?,
    };

    let engine = SpreadEngine::new();
    if json {
        let result = engine.propagate_detailed(&graph, PropagationParams { start, time_limit })?;
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else {
        let count = engine.propagate(&graph, start, time_limit)?;
        println!("{}", count);
    }
    Ok(())
}

/// The vertex whose reachable set is largest, or -1 for an empty graph.
pub fn cmd_source(config: &SpreadConfig, json: bool) -> GraphResult<()> {
    let graph = config.build_graph()?;
    let best = SpreadEngine::new().max_spread(&graph);

    let vertex = best.map_or(NO_SOURCE, |s| s.vertex as i64);
    let reach = best.map_or(0, |s| s.reach);

    if json {
        println!(
            "{}",
            serde_json::json!({"source": vertex, "reach": reach})
        );
    } else {
        println!("Max spread source: {} (reaches {})", vertex, reach);
    }
    Ok(())
}

/// Print the adjacency listing.
pub fn cmd_render(config: &SpreadConfig, json: bool) -> GraphResult<()> {
    let graph = config.build_graph()?;
    if json {
        println!("{}", adjacency_json(&graph));
    } else {
        print!("{}", graph);
    }
    Ok(())
}

/// Cumulative reach per time step.
pub fn cmd_timeline(
    config: &SpreadConfig,
    start: Option<usize>,
    time_limit: Option<u32>,
    json: bool,
) -> GraphResult<()> {
    let graph = config.build_graph()?;
    let start = match start {
        Some(s) => s,
        None => config.start_vertex()?,
    };
    let time_limit = match time_limit {
        Some(t) => t,
        None => config.time_limit()?,
    };
    let timeline = SpreadEngine::new().timeline(&graph, start, time_limit)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"start": start, "timeline": timeline})
        );
    } else {
        for (step, reached) in timeline.iter().enumerate() {
            println!("t={}: {}", step, reached);
        }
    }
    Ok(())
}

/// Summary statistics about the graph.
pub fn cmd_stats(config: &SpreadConfig, json: bool) -> GraphResult<()> {
    let graph = config.build_graph()?;
    let engine = SpreadEngine::new();
    let reach = engine.reach_counts(&graph);
    let best = engine.max_spread(&graph);
    let isolated = (0..graph.vertex_count())
        .filter(|&v| graph.degree(v).is_ok_and(|d| d == 0))
        .count();

    if json {
        let stats = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "mode": graph.mode().name(),
            "isolated": isolated,
            "max_reach": reach.iter().copied().max().unwrap_or(0),
            "source": best.map_or(NO_SOURCE, |s| s.vertex as i64),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Mode: {}", graph.mode());
        println!("Isolated vertices: {}", isolated);
        println!(
            "Max reach: {}",
            reach.iter().copied().max().unwrap_or(0)
        );
        println!(
            "Max spread source: {}",
            best.map_or(NO_SOURCE, |s| s.vertex as i64)
        );
    }
    Ok(())
}

fn adjacency_json(graph: &SpreadGraph) -> serde_json::Value {
    graph
        .render()
        .into_iter()
        .map(|(v, list)| serde_json::json!({"vertex": v, "neighbors": list}))
        .collect()
}
