use clap::{Args, Parser, Subcommand, ValueEnum};
use eyre::{eyre, Result};
use log::info;
use rota::graph::Spatial;
use rota::spatial::Position;
use rota::{search_with_order, InsertionOrder, MapGraph, Route};
use rota_map::{goias, load_graph};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rota", version, about = "Best-first route search between named places")]
struct Cli {
    /// Log filter, used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a route between two places
    Route {
        from: String,
        to: String,
        #[command(flatten)]
        map: MapArgs,
        #[arg(long, value_enum, default_value_t = Order::Ascending)]
        order: Order,
    },
    /// Print the place closest to a coordinate
    Nearest {
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[command(flatten)]
        map: MapArgs,
    },
    /// Run the sample searches over the built-in map of Goiás
    Demo {
        #[arg(long, value_enum, default_value_t = Order::Ascending)]
        order: Order,
    },
}

#[derive(Args)]
struct MapArgs {
    /// Route table in JSON format. The built-in map of Goiás is used if omitted
    #[arg(long)]
    map: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Order {
    Ascending,
    Descending,
}

impl From<Order> for InsertionOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Ascending => InsertionOrder::Ascending,
            Order::Descending => InsertionOrder::Descending,
        }
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre!("failed to initialise logging: {}", e))
}

fn load(args: &MapArgs) -> Result<MapGraph> {
    let load_timer = Instant::now();

    let graph = match &args.map {
        Some(path) => load_graph(path)?,
        None => goias().build_graph()?,
    };

    info!(
        "Loaded graph with {} nodes and {} edges in {:.3} seconds",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        load_timer.elapsed().as_secs_f32()
    );
    Ok(graph)
}

fn print_route(route: Option<Route<String>>) {
    match route {
        Some(route) => println!("{}", route),
        None => println!("No route found"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.command {
        Command::Route { from, to, map, order } => {
            let graph = load(&map)?;
            print_route(search_with_order(&graph, &from, &to, order.into())?);
        }
        Command::Nearest { lon, lat, map } => {
            let graph = load(&map)?;
            let place = graph
                .nearest(&Position { x: lon, y: lat })
                .ok_or_else(|| eyre!("the map has no places"))?;
            println!("{}", place);
        }
        Command::Demo { order } => {
            let graph = goias().build_graph()?;
            let searches = [
                ("Origin and destination are the same", "Goiania", "Goiania"),
                ("Destination is a neighbor of the origin", "Goiania", "BelaVista"),
                ("Common search", "Goiania", "CaldasNovas"),
                ("Closer city has no route to destination", "Piracanjuba", "Morrinhos"),
            ];
            for (title, from, to) in searches.iter() {
                println!("# {}", title);
                let route = search_with_order(&graph, &from.to_string(), &to.to_string(), order.into())?;
                print_route(route);
            }
        }
    }
    Ok(())
}
