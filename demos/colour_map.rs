//! Builds a map of regions, prints its adjacency rendering, a breadth-first
//! ordering and whether the map is connected.
//!
//! Usage:
//!   cargo run --example colour_map
//!   cargo run --example colour_map -- --start NSW --remove T --remove SA
//!   cargo run --example colour_map -- --region A --region B --border A:B

use std::process;

use clap::Parser;
use land_graph::{prelude::*, tracing_support::init_tracing};

const DEFAULT_REGIONS: [&str; 7] = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];
const DEFAULT_BORDERS: [&str; 9] = [
    "WA:NT", "WA:SA", "NT:SA", "NT:Q", "SA:Q", "SA:NSW", "SA:V", "Q:NSW", "NSW:V",
];

/// Build a region map and print its structure.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Region names; defaults to the states and territories of Australia
    #[arg(long = "region")]
    regions: Vec<String>,

    /// Borders as NAME:NAME pairs; defaults to the Australian borders
    #[arg(long = "border")]
    borders: Vec<String>,

    /// Initial vertex capacity of the graph
    #[arg(long, default_value_t = 4)]
    capacity: usize,

    /// Region to start the breadth-first traversal from
    #[arg(long)]
    start: Option<String>,

    /// Regions to remove after building the map
    #[arg(long)]
    remove: Vec<String>,

    /// Print graph events to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    if args.verbose {
        init_tracing();
    }

    let (regions, borders) = if args.regions.is_empty() {
        (
            DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect(),
            DEFAULT_BORDERS.iter().map(|b| b.to_string()).collect(),
        )
    } else {
        (args.regions.clone(), args.borders.clone())
    };

    let mut graph = Graph::with_capacity(args.capacity);
    for name in &regions {
        graph.add_vertex(Land::new(name.as_str(), Colour::None));
    }
    for border in &borders {
        let Some((a, b)) = border.split_once(':') else {
            eprintln!("Invalid border '{border}', expected NAME:NAME");
            process::exit(1);
        };
        let (a, b) = (Land::new(a, Colour::None), Land::new(b, Colour::None));
        if !graph.contains(&a) || !graph.contains(&b) {
            eprintln!("Ignoring border '{border}' with an unknown region");
        }
        graph.add_edge(&a, &b);
    }

    for name in &args.remove {
        match graph.remove_vertex(&Land::new(name.as_str(), Colour::None)) {
            Ok(Some(land)) => println!("Removed {land}"),
            Ok(None) => println!("No region named '{name}'"),
            Err(err) => {
                eprintln!("Cannot remove '{name}': {err}");
                process::exit(1);
            }
        }
    }

    println!("{graph}");

    let start = match &args.start {
        Some(name) => Land::new(name.as_str(), Colour::None),
        None => match graph.get(0) {
            Some(first) => first.clone(),
            None => return,
        },
    };
    let order: Vec<_> = graph.bfs(&start).map(Land::name).collect();
    println!("Breadth-first from {}: {}", start.name(), order.join(" "));
    println!(
        "Connected: {} ({} regions, {} borders, capacity {})",
        graph.is_connected(),
        graph.len(),
        graph.num_edges(),
        graph.capacity()
    );
}
