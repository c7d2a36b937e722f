use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ledger_core::{load_config, LedgerConfig, TripDispatcher};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod output;

use output::{DriverView, PassengerView, TripView};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "ride-ledger",
    about = "Load a ride-share ledger from CSV files and dispatch trips",
    long_about = "Loads passengers, drivers and trips from CSV record files,\n\
                  joins them into one ledger and dispatches new trips to\n\
                  the first available driver."
)]
struct Cli {
    /// TOML file naming the record files
    #[arg(long, env = "RIDE_LEDGER_CONFIG")]
    config: Option<PathBuf>,
    /// Directory containing users.csv, drivers.csv and trips.csv
    #[arg(long, conflicts_with = "config")]
    data_dir: Option<PathBuf>,
    /// Passenger records (overrides config)
    #[arg(long)]
    passengers: Option<PathBuf>,
    /// Driver records (overrides config)
    #[arg(long)]
    drivers: Option<PathBuf>,
    /// Trip records (overrides config)
    #[arg(long)]
    trips: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print ledger counts
    Summary,
    /// Dispatch a new trip for a passenger
    RequestTrip {
        #[arg(allow_negative_numbers = true)]
        passenger_id: i64,
    },
    /// Show a passenger and their spending
    Passenger {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Show a driver and their earnings
    Driver {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

impl Cli {
    fn ledger_config(&self) -> Result<LedgerConfig, Box<dyn Error>> {
        let mut config = match (&self.config, &self.data_dir) {
            (Some(path), None) => load_config(path)?,
            (None, Some(dir)) => LedgerConfig::in_dir(dir),
            (None, None) => LedgerConfig::default(),
            (Some(_), Some(_)) => return Err("--config and --data-dir cannot be combined".into()),
        };
        if let Some(path) = &self.passengers {
            config = config.with_passengers(path);
        }
        if let Some(path) = &self.drivers {
            config = config.with_drivers(path);
        }
        if let Some(path) = &self.trips {
            config = config.with_trips(path);
        }
        Ok(config)
    }
}

// ── entry point ────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledger_core=info,ledger_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.ledger_config()?;
    tracing::debug!(?config, "loading ledger");
    let mut dispatcher = TripDispatcher::from_config(&config)?;

    match cli.command {
        Commands::Summary => {
            if cli.json {
                let summary = serde_json::json!({
                    "passengers": dispatcher.passengers().len(),
                    "drivers": dispatcher.drivers().len(),
                    "trips": dispatcher.trips().len(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{dispatcher}");
            }
        }
        Commands::RequestTrip { passenger_id } => {
            let trip = dispatcher.request_trip(passenger_id)?;
            let driver = dispatcher.driver_of(&trip);
            let view = TripView::new(&trip, driver);
            output::print(&view, cli.json)?;
        }
        Commands::Passenger { id } => match dispatcher.find_passenger(id)? {
            Some(passenger) => output::print(&PassengerView::from(passenger), cli.json)?,
            None => return Err(format!("no passenger with id {id}").into()),
        },
        Commands::Driver { id } => match dispatcher.find_driver(id)? {
            Some(driver) => output::print(&DriverView::from(driver), cli.json)?,
            None => return Err(format!("no driver with id {id}").into()),
        },
    }

    Ok(())
}
