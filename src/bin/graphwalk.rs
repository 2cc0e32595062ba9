use std::{env, process};

use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt};

use graphwalk::{
    Algorithm, Graph, GraphWalkError, SearchEvent, SearchResult,
    client::{CommandLineConfig, OutputFormat},
    search,
};

#[derive(Serialize)]
struct Report<'a> {
    algorithm: Algorithm,
    start: &'a str,
    end: &'a str,
    #[serde(flatten)]
    result: &'a SearchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<Vec<SearchEvent<'a>>>,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{}", CommandLineConfig::help());
            process::exit(2);
        }
    };
    init_logging(config.verbose);

    let graph = match load_graph(&config) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let result = search(&graph, config.algorithm, &config.start, &config.end);
    if let Err(err) = print_result(&config, &result) {
        eprintln!("output failed: {err}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_graph(config: &CommandLineConfig) -> Result<Graph, GraphWalkError> {
    let graph = Graph::from_json_file(&config.graph)?;
    graph.validate()?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

fn print_result(config: &CommandLineConfig, result: &SearchResult) -> Result<(), GraphWalkError> {
    match config.format {
        OutputFormat::Json => {
            let report = Report {
                algorithm: config.algorithm,
                start: &config.start,
                end: &config.end,
                result,
                events: config.events.then(|| result.events().collect()),
            };
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|e| GraphWalkError::parse(e.to_string()))?;
            println!("{rendered}");
        }
        OutputFormat::Text => {
            if config.events {
                for event in result.events() {
                    let marker = if event.on_path { " *" } else { "" };
                    println!("{:>4}  {}{marker}", event.visited_count, event.node);
                }
            }
            println!("algorithm: {}", config.algorithm);
            println!(
                "visited ({}): {}",
                result.visited.len(),
                result.visited.join(" ")
            );
            if result.has_path() {
                println!("path: {}", result.path.join(" -> "));
            } else {
                println!("path: none");
            }
            println!("cost: {}", result.cost);
        }
    }
    Ok(())
}
