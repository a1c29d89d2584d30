//! Demo: builds a seven-airport route network, prints it, and lists the
//! flights leaving one airport.

use anyhow::{bail, Context, Result};
use clap::Parser;
use skyroute::{GraphKind, GraphOptions, GraphReport, RouteGraph};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "airports")]
#[command(about = "Print a sample airport route network and query one airport", long_about = None)]
struct Cli {
    /// Mirror every route in both directions
    #[arg(long, default_value_t = false)]
    undirected: bool,

    /// Maximum number of airports in the graph
    #[arg(long, default_value_t = GraphOptions::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Airport id to query; read from stdin when omitted
    #[arg(long)]
    query: Option<i32>,

    /// Emit the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn options(&self) -> GraphOptions {
        let kind = if self.undirected {
            GraphKind::Undirected
        } else {
            GraphKind::Directed
        };
        GraphOptions::new(self.capacity, kind)
    }
}

const AIRPORTS: &[(i32, &str, &str, &str, &str, i32)] = &[
    (100, "MEX", "Mexico", "Mexico City", "Benito Juarez International", -6),
    (120, "LHR", "United Kingdom", "London", "Heathrow", 0),
    (130, "MAD", "Spain", "Madrid", "Barajas", 1),
    (140, "FRA", "Germany", "Frankfurt", "Frankfurt am Main", 1),
    (150, "CDG", "France", "Paris", "Charles de Gaulle", 1),
    (160, "BER", "Germany", "Berlin", "Brandenburg", 1),
    (170, "HKG", "Hong Kong", "Hong Kong", "Hong Kong International", 8),
];

const ROUTES: &[(i32, i32, f32)] = &[
    (100, 150, 9.0),
    (100, 140, 10.0),
    (100, 130, 9.5),
    (120, 160, 2.0),
    (130, 150, 1.5),
    (130, 120, 2.0),
    (140, 160, 3.0),
    (140, 120, 2.5),
    (150, 100, 9.0),
    (150, 120, 10.0),
    (150, 170, 14.0),
    (160, 100, 12.0),
    (170, 150, 14.0),
];

fn build_network(options: GraphOptions) -> Result<RouteGraph> {
    let mut graph = RouteGraph::with_options(options).context("failed to create graph")?;

    for &(id, iata, country, city, name, utc) in AIRPORTS {
        graph
            .add_airport(id, iata, country, city, name, utc)
            .with_context(|| format!("failed to add airport {id} ({iata})"))?;
    }

    for &(from, to, weight) in ROUTES {
        if !graph.add_weighted_edge(from, to, weight)? {
            tracing::warn!(from, to, "route skipped: unknown airport");
        }
    }

    Ok(graph)
}

fn read_query() -> Result<i32> {
    eprint!("Which airport do you want to query (100, 120, ...)? ");
    io::stderr().flush().ok();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read airport id from stdin")?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("no airport id given");
    }
    trimmed
        .parse()
        .with_context(|| format!("invalid airport id: {trimmed:?}"))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut graph = build_network(cli.options())?;
    tracing::info!(
        airports = graph.len(),
        entries = graph.edge_count(),
        kind = ?graph.kind(),
        "network built"
    );

    let report = GraphReport::from_graph(&mut graph).context("failed to walk the network")?;
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }

    let id = match cli.query {
        Some(id) => id,
        None => read_query()?,
    };
    println!("{}", report.render_query(id)?);

    graph.delete();
    Ok(())
}
