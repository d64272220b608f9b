use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use hbnb_dynamic::api::{ApiClient, ApiError};
use hbnb_dynamic::config::{self, HbnbConfig};
use hbnb_dynamic::filters::SearchRequest;
use hbnb_dynamic::observability;

#[derive(Parser)]
#[command(name = "hbnb-cli")]
#[command(about = "Query the HBnB REST API", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override both API base URLs.
    #[arg(short, long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API status
    Status,
    /// Show object counts
    Stats,
    /// List states
    States,
    /// List the cities of a state
    Cities { state_id: String },
    /// List amenities
    Amenities,
    /// Search places by state, city and amenity ids
    Search {
        #[arg(long = "state")]
        states: Vec<String>,
        #[arg(long = "city")]
        cities: Vec<String>,
        #[arg(long = "amenity")]
        amenities: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => HbnbConfig::default(),
    };
    if let Some(url) = cli.url {
        config.api.base_url = url.clone();
        config.api.status_base_url = url;
    }

    observability::init_logging(&config.observability)?;
    let client = ApiClient::new(&config.api, &config.timeouts)?;

    let result = match cli.command {
        Commands::Status => print_json(client.status().await),
        Commands::Stats => print_json(client.stats().await),
        Commands::States => print_json(client.states().await),
        Commands::Cities { state_id } => print_json(client.cities(&state_id).await),
        Commands::Amenities => print_json(client.amenities().await),
        Commands::Search { states, cities, amenities } => {
            let request = SearchRequest { states, cities, amenities };
            print_json(client.places_search(&request).await)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn print_json<T: Serialize>(result: Result<T, ApiError>) -> Result<(), Box<dyn std::error::Error>> {
    let value = result?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
