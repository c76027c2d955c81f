use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use locality::config::ServerConfig;
use locality::geo::{self, Gazetteer, Listing, Priority, UserLocale};
use locality::viewer::{self, ProfileStore};
use locality::{server, LocalityError, Result};

/// Locality — rank marketplace listings by distance to the viewer.
///
/// Examples:
///   locality classify "Abidjan, Côte d'Ivoire" --city Abidjan --country "Ivory Coast"
///   locality sort listings.json --city Lomé --country Togo
///   locality profile set --city Abidjan --country "Côte d'Ivoire"
///   locality serve --port 8080
#[derive(Parser)]
#[command(name = "locality", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify one listing location for the viewer.
    Classify {
        /// Listing location, e.g. "Cocody, Abidjan".
        location: String,
        #[command(flatten)]
        viewer: ViewerArgs,
    },
    /// Sort a JSON array of listings (file path or "-" for stdin).
    Sort {
        input: String,
        #[command(flatten)]
        viewer: ViewerArgs,
        /// Drop listings less relevant than this tier.
        #[arg(long)]
        max_priority: Option<Priority>,
    },
    /// Print the comparison key for a place name.
    Normalize { text: String },
    /// Print the canonical name for a country spelling.
    Canonicalize { country: String },
    /// List known countries, or the cities of one country.
    Countries {
        #[arg(long)]
        cities: Option<String>,
    },
    /// Show or change the stored viewer profile.
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Run the HTTP API.
    Serve {
        /// Defaults to LOCALITY_HOST or 127.0.0.1.
        #[arg(long)]
        host: Option<String>,
        /// Defaults to LOCALITY_PORT or 8080.
        #[arg(long, short = 'p')]
        port: Option<u16>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    Show,
    Set {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },
    Clear,
}

#[derive(Args)]
struct ViewerArgs {
    /// Viewer city. Falls back to the stored profile.
    #[arg(long)]
    city: Option<String>,
    /// Viewer country, any spelling. Falls back to the stored profile.
    #[arg(long)]
    country: Option<String>,
    /// Fill missing viewer fields from IP geolocation.
    #[arg(long, short = 'a')]
    auto: bool,
}

impl ViewerArgs {
    fn resolve(&self) -> UserLocale {
        let explicit = UserLocale::new(self.city.as_deref(), self.country.as_deref());
        viewer::resolve_viewer(explicit, self.auto, &ProfileStore::load())
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "locality=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Classify { location, viewer } => {
            let locale = viewer.resolve();
            let placement = geo::classify(&location, locale.city(), locale.country());
            print_json(&placement)
        }
        Command::Sort {
            input,
            viewer,
            max_priority,
        } => {
            let listings: Vec<Listing> = serde_json::from_str(&read_input(&input)?)?;
            let locale = viewer.resolve();
            let ranked = Gazetteer::builtin().rank_within(
                listings,
                locale.city(),
                locale.country(),
                max_priority,
            );
            print_json(&ranked)
        }
        Command::Normalize { text } => {
            println!("{}", geo::normalize(&text));
            Ok(())
        }
        Command::Canonicalize { country } => {
            println!("{}", geo::canonicalize(&country));
            Ok(())
        }
        Command::Countries { cities: Some(name) } => {
            let country = Gazetteer::builtin()
                .find_country(&name)
                .ok_or_else(|| LocalityError::NoInput(format!("unknown country '{}'", name)))?;
            for city in country.cities {
                println!("{}", city);
            }
            Ok(())
        }
        Command::Countries { cities: None } => {
            for c in Gazetteer::builtin().countries() {
                println!("{} {:<16} {}", c.flag, c.name, c.dial_code);
            }
            Ok(())
        }
        Command::Profile { action } => run_profile(action),
        Command::Serve { host, port } => {
            let config = ServerConfig::from_env().with_overrides(host, port);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::start(&config))
        }
    }
}

fn run_profile(action: ProfileAction) -> Result<()> {
    let mut store = ProfileStore::load();
    match action {
        ProfileAction::Show => {
            let locale = store.locale();
            println!("  \u{1F4C1} {}", store.path().display());
            println!("  City:    {}", locale.city().unwrap_or("-"));
            println!("  Country: {}", locale.country().unwrap_or("-"));
            if let Some(ts) = store.updated_at() {
                println!("  Updated: {}", ts.format("%Y-%m-%d %H:%M UTC"));
            }
        }
        ProfileAction::Set { city, country } => {
            let locale = UserLocale::new(city.as_deref(), country.as_deref());
            if locale.is_empty() {
                return Err(LocalityError::NoInput(
                    "use --city and/or --country".into(),
                ));
            }
            store.set(locale)?;
            tracing::info!("Profile saved to {}", store.path().display());
        }
        ProfileAction::Clear => {
            store.clear()?;
            tracing::info!("Profile cleared");
        }
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
