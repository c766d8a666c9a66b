use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use railquery_lib::{parse_station, Distance, Graph, Route, Station};

#[derive(Parser, Debug)]
#[command(author, version, about = "Station graph route queries")]
#[command(group(ArgGroup::new("source").required(true).args(["graph_file", "graph"])))]
struct Cli {
    /// Read the graph specification from a file.
    #[arg(long)]
    graph_file: Option<PathBuf>,

    /// Supply the graph specification inline, e.g. "AB5,BC4".
    #[arg(long)]
    graph: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Total distance of an explicit dash-joined route such as "A-B-C".
    Distance {
        /// Route notation: stations joined by dashes.
        route: String,
    },
    /// Count paths between two stations under a hop or length constraint.
    #[command(group(ArgGroup::new("constraint")
        .required(true)
        .args(["max_stops", "exact_stops", "max_length"])))]
    Routes {
        /// Starting station.
        #[arg(long = "from")]
        from: String,
        /// Destination station.
        #[arg(long = "to")]
        to: String,
        /// Count paths taking at most this many hops.
        #[arg(long)]
        max_stops: Option<usize>,
        /// Count paths taking exactly this many hops.
        #[arg(long)]
        exact_stops: Option<usize>,
        /// Count paths with total distance strictly below this bound.
        #[arg(long)]
        max_length: Option<u32>,
    },
    /// Shortest distance between two stations (shortest cycle when equal).
    Shortest {
        /// Starting station.
        #[arg(long = "from")]
        from: String,
        /// Destination station.
        #[arg(long = "to")]
        to: String,
    },
    /// Run the canonical ten-query report against the loaded graph.
    Report,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let spec = load_spec(&cli)?;
    let graph = Graph::parse(&spec).context("failed to build graph from specification")?;

    match cli.command {
        Command::Distance { ref route } => handle_distance(&graph, route, cli.format),
        Command::Routes {
            ref from,
            ref to,
            max_stops,
            exact_stops,
            max_length,
        } => handle_routes(&graph, from, to, max_stops, exact_stops, max_length, cli.format),
        Command::Shortest { ref from, ref to } => handle_shortest(&graph, from, to, cli.format),
        Command::Report => handle_report(&graph, cli.format),
    }
}

fn load_spec(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.graph_file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read graph file {}", path.display()));
    }
    // clap's source group guarantees one of the two is present.
    Ok(cli.graph.clone().unwrap_or_default())
}

fn handle_distance(graph: &Graph, notation: &str, format: Format) -> Result<()> {
    let route: Route = notation.parse().context("invalid route notation")?;
    let distance = graph.route_length(&route);

    match format {
        Format::Text => println!("{distance}"),
        Format::Json => {
            #[derive(Serialize)]
            struct Summary {
                route: String,
                distance: Distance,
            }
            print_json(&Summary {
                route: route.to_string(),
                distance,
            })?;
        }
    }
    Ok(())
}

fn handle_routes(
    graph: &Graph,
    from: &str,
    to: &str,
    max_stops: Option<usize>,
    exact_stops: Option<usize>,
    max_length: Option<u32>,
    format: Format,
) -> Result<()> {
    let (start, end) = parse_endpoints(from, to)?;

    let (constraint, count) = if let Some(max_stops) = max_stops {
        (
            json!({ "max_stops": max_stops }),
            graph.count_routes_within_stops(start, end, max_stops),
        )
    } else if let Some(stops) = exact_stops {
        (
            json!({ "exact_stops": stops }),
            graph.count_routes_with_exact_stops(start, end, stops),
        )
    } else {
        // clap's constraint group guarantees max_length is the remaining case.
        let bound = max_length.unwrap_or_default();
        (
            json!({ "max_length": bound }),
            graph.count_routes_under_length(start, end, bound),
        )
    };

    match format {
        Format::Text => println!("{count}"),
        Format::Json => print_json(&json!({
            "from": start,
            "to": end,
            "constraint": constraint,
            "count": count,
        }))?,
    }
    Ok(())
}

fn handle_shortest(graph: &Graph, from: &str, to: &str, format: Format) -> Result<()> {
    let (start, end) = parse_endpoints(from, to)?;
    let distance = graph.shortest_distance(start, end);

    match format {
        Format::Text => println!("{distance}"),
        Format::Json => {
            #[derive(Serialize)]
            struct Summary {
                from: Station,
                to: Station,
                distance: Distance,
            }
            print_json(&Summary {
                from: start,
                to: end,
                distance,
            })?;
        }
    }
    Ok(())
}

/// The fixed scenario the original assignment prints: ten canonical queries
/// in a stable order.
fn handle_report(graph: &Graph, format: Format) -> Result<()> {
    let mut entries: Vec<serde_json::Value> = Vec::with_capacity(10);

    for notation in ["A-B-C", "A-D", "A-D-C", "A-E-B-C-D", "A-E-D"] {
        let route: Route = notation.parse().context("invalid report route")?;
        let distance = graph.route_length(&route);
        entries.push(json!({ "query": format!("distance {notation}"), "value": distance }));
    }
    entries.push(json!({
        "query": "routes C to C, at most 3 stops",
        "value": graph.count_routes_within_stops('C', 'C', 3),
    }));
    entries.push(json!({
        "query": "routes A to C, exactly 4 stops",
        "value": graph.count_routes_with_exact_stops('A', 'C', 4),
    }));
    entries.push(json!({
        "query": "shortest A to C",
        "value": graph.shortest_distance('A', 'C'),
    }));
    entries.push(json!({
        "query": "shortest B to B",
        "value": graph.shortest_distance('B', 'B'),
    }));
    entries.push(json!({
        "query": "routes C to C, length under 30",
        "value": graph.count_routes_under_length('C', 'C', 30),
    }));

    match format {
        Format::Text => {
            for (index, entry) in entries.iter().enumerate() {
                let value = render_value(&entry["value"]);
                println!("Output #{}: {}", index + 1, value);
            }
        }
        Format::Json => print_json(&entries)?,
    }
    Ok(())
}

fn parse_endpoints(from: &str, to: &str) -> Result<(Station, Station)> {
    let start = parse_station(from).context("invalid --from station")?;
    let end = parse_station(to).context("invalid --to station")?;
    Ok((start, end))
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => railquery_lib::NO_ROUTE.to_string(),
        other => other.to_string(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string(value).context("failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
